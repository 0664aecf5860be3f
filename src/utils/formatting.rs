//! Formatting utilities used for CLI and export outputs.

use crate::models::session::Session;
use ansi_term::Style;

pub fn bold(s: &str) -> String {
    Style::new().bold().paint(s).to_string()
}

/// Comma separated speaker names, empty when the session has none.
pub fn speaker_names(session: &Session) -> String {
    session
        .speakers()
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format a pixel value the way the layout exports it: no trailing `.0`.
pub fn px(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn px_drops_integral_fraction() {
        assert_eq!(px(630.0), "630");
        assert_eq!(px(262.5), "262.5");
        assert_eq!(px(1.0 / 3.0), "0.33");
    }
}
