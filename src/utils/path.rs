//! Path utilities: resolve the app directory, expand ~.

use std::env;
use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `<home>/.devfest-schedule`, or `./.devfest-schedule` when no home is known.
pub fn app_dir() -> PathBuf {
    dirs::home_dir()
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".devfest-schedule")
}
