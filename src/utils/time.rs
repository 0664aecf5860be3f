//! Time utilities: parsing session timestamps, hour truncation, minute spans,
//! formatting HH:MM labels and parsing UTC offsets.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta, TimeZone, Timelike};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static OFFSET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([+-])(\d{2}):?(\d{2})$").expect("valid offset regex"));

/// Parse a session timestamp into the layout time zone.
///
/// Timestamps carrying an offset (`2025-10-10T09:15:00+02:00`, `...Z`) are
/// converted to `tz`; timestamps without one (`2025-10-10T09:15:00`, the
/// session API's format) are read as wall-clock time in `tz`.
/// Anything else yields `None`.
pub fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(tz));
    }

    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()?;

    tz.from_local_datetime(&naive).earliest()
}

/// Zero the minutes, seconds and sub-second part of `dt`.
pub fn floor_to_hour<Tz: TimeZone>(dt: &DateTime<Tz>) -> DateTime<Tz> {
    let into_hour = TimeDelta::minutes(i64::from(dt.minute()))
        + TimeDelta::seconds(i64::from(dt.second()))
        + TimeDelta::nanoseconds(i64::from(dt.nanosecond()));
    dt.clone() - into_hour
}

/// Fractional minutes from `start` to `end` (negative when `end` is earlier).
pub fn minutes_between<Tz: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>) -> f64 {
    let span = end.clone() - start.clone();
    span.num_milliseconds() as f64 / 60_000.0
}

/// 24h `HH:MM` label.
pub fn format_time<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    dt.format("%H:%M").to_string()
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Parse `+HH:MM`, `-HHMM`, `Z` or `UTC` into a fixed offset.
pub fn parse_offset(s: &str) -> AppResult<FixedOffset> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("z") || s.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0).ok_or_else(|| AppError::InvalidOffset(s.to_string()));
    }

    let caps = OFFSET_RE
        .captures(s)
        .ok_or_else(|| AppError::InvalidOffset(s.to_string()))?;

    let hours: i32 = caps[2].parse().map_err(|_| AppError::InvalidOffset(s.to_string()))?;
    let minutes: i32 = caps[3].parse().map_err(|_| AppError::InvalidOffset(s.to_string()))?;
    if minutes >= 60 {
        return Err(AppError::InvalidOffset(s.to_string()));
    }

    let secs = (hours * 3600 + minutes * 60) * if &caps[1] == "-" { -1 } else { 1 };
    FixedOffset::east_opt(secs).ok_or_else(|| AppError::InvalidOffset(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn naive_timestamps_are_wall_clock_in_target_zone() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let dt = parse_timestamp("2025-10-10T09:15:00", &tz).unwrap();
        assert_eq!(format_time(&dt), "09:15");
        assert_eq!(dt.with_timezone(&Utc).hour(), 7);
    }

    #[test]
    fn offset_timestamps_are_converted() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let dt = parse_timestamp("2025-10-10T07:15:00Z", &tz).unwrap();
        assert_eq!(format_time(&dt), "09:15");
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_timestamp("not a date", &Utc).is_none());
        assert!(parse_timestamp("", &Utc).is_none());
        assert!(parse_timestamp("2025-13-40T09:00:00", &Utc).is_none());
    }

    #[test]
    fn floor_drops_minutes_seconds_and_fraction() {
        let dt = parse_timestamp("2025-10-10T09:59:59.500", &Utc).unwrap();
        assert_eq!(
            floor_to_hour(&dt),
            parse_timestamp("2025-10-10T09:00:00", &Utc).unwrap()
        );
    }

    #[test]
    fn offsets_parse() {
        assert_eq!(parse_offset("+02:00").unwrap().local_minus_utc(), 7200);
        assert_eq!(parse_offset("-0330").unwrap().local_minus_utc(), -12600);
        assert_eq!(parse_offset("Z").unwrap().local_minus_utc(), 0);
        assert!(parse_offset("+2").is_err());
        assert!(parse_offset("+02:75").is_err());
    }

    #[test]
    fn minutes_are_signed() {
        let a = parse_timestamp("2025-10-10T09:00:00", &Utc).unwrap();
        let b = parse_timestamp("2025-10-10T09:45:30", &Utc).unwrap();
        assert_eq!(minutes_between(&a, &b), 45.5);
        assert_eq!(minutes_between(&b, &a), -45.5);
        assert_eq!(format_minutes(-75), "-01:15");
    }
}
