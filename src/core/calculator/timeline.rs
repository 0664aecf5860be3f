use crate::models::Day;
use crate::models::session::Session;
use crate::models::stage::Stage;
use crate::utils::time::{floor_to_hour, minutes_between};
use chrono::{DateTime, TimeDelta, TimeZone};
use std::iter;

/// Vertical scale of the desktop timeline.
pub const PIXELS_PER_MINUTE: f64 = 3.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub top: f64,
    pub height: f64,
}

/// Geometry of one day's timeline. Recomputed whenever the selected day or
/// the session set changes.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineConfig<Tz: TimeZone> {
    /// Start of the hour holding the earliest session start.
    pub min_time: DateTime<Tz>,
    /// Start of the hour holding the latest session end, plus one hour.
    pub max_time: DateTime<Tz>,
    /// Every whole hour from `min_time` through `max_time`.
    pub hour_markers: Vec<DateTime<Tz>>,
    pub pixels_per_minute: f64,
    pub timeline_height: f64,
}

impl<Tz: TimeZone> TimelineConfig<Tz> {
    /// Offset from the top of the timeline.
    pub fn position_of(&self, t: &DateTime<Tz>) -> f64 {
        minutes_between(&self.min_time, t) * self.pixels_per_minute
    }

    /// Block height for a session's duration. Zero or negative when the
    /// data has `end <= start`.
    pub fn height_of(&self, start: &DateTime<Tz>, end: &DateTime<Tz>) -> f64 {
        minutes_between(start, end) * self.pixels_per_minute
    }

    /// Position and height of a session block, raised to `min_height` so
    /// zero or negative durations stay visible, and never running past the
    /// bottom of the timeline.
    pub fn block_for(&self, start: &DateTime<Tz>, end: &DateTime<Tz>, min_height: f64) -> Geometry {
        let top = self.position_of(start);
        let height = self
            .height_of(start, end)
            .max(min_height)
            .min((self.timeline_height - top).max(0.0));

        Geometry { top, height }
    }
}

/// [`compute_timeline_scaled`] with the default [`PIXELS_PER_MINUTE`].
pub fn compute_timeline<Tz: TimeZone>(
    stages: &[Stage],
    service_sessions: &[Session],
    day: Day,
    tz: &Tz,
) -> Option<TimelineConfig<Tz>> {
    compute_timeline_scaled(stages, service_sessions, day, tz, PIXELS_PER_MINUTE)
}

/// Timeline geometry for the sessions starting on `day`; `None` when there
/// are none ("no sessions this day").
pub fn compute_timeline_scaled<Tz: TimeZone>(
    stages: &[Stage],
    service_sessions: &[Session],
    day: Day,
    tz: &Tz,
    pixels_per_minute: f64,
) -> Option<TimelineConfig<Tz>> {
    let spans: Vec<(DateTime<Tz>, DateTime<Tz>)> = stages
        .iter()
        .flat_map(|stage| stage.sessions.iter())
        .chain(service_sessions)
        .filter_map(|s| s.span_in(tz))
        .filter(|(start, _)| start.date_naive() == day)
        .collect();

    let earliest = spans.iter().map(|(start, _)| start).min()?;
    // An end before its own start must not pull max_time above min_time.
    let latest = spans
        .iter()
        .map(|(start, end)| if end > start { end } else { start })
        .max()?;

    let hour = TimeDelta::hours(1);
    let min_time = floor_to_hour(earliest);
    let max_time = floor_to_hour(latest) + hour;

    let hour_markers = iter::successors(Some(min_time.clone()), |t| Some(t.clone() + hour))
        .take_while(|t| *t <= max_time)
        .collect();

    let timeline_height = minutes_between(&min_time, &max_time) * pixels_per_minute;

    Some(TimelineConfig {
        min_time,
        max_time,
        hour_markers,
        pixels_per_minute,
        timeline_height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::{format_time, parse_timestamp};
    use chrono::{FixedOffset, NaiveDate, Utc};

    const EPS: f64 = 1e-9;

    fn day() -> Day {
        NaiveDate::from_ymd_opt(2025, 10, 10).unwrap()
    }

    fn at(raw: &str) -> DateTime<Utc> {
        parse_timestamp(raw, &Utc).unwrap()
    }

    fn main_and_registration() -> (Vec<Stage>, Vec<Session>) {
        (
            vec![Stage::new(
                "Main",
                vec![Session::new("Keynote", "2025-10-10T09:15:00", "2025-10-10T10:00:00")],
            )],
            vec![Session::new("Registro", "2025-10-10T08:50:00", "2025-10-10T09:00:00")],
        )
    }

    #[test]
    fn worked_example() {
        let (stages, service) = main_and_registration();
        let cfg = compute_timeline(&stages, &service, day(), &Utc).unwrap();

        assert_eq!(cfg.min_time, at("2025-10-10T08:00:00"));
        assert_eq!(cfg.max_time, at("2025-10-10T11:00:00"));
        let labels: Vec<String> = cfg.hour_markers.iter().map(format_time).collect();
        assert_eq!(labels, ["08:00", "09:00", "10:00", "11:00"]);
        assert!((cfg.timeline_height - 630.0).abs() < EPS);
        assert!((cfg.position_of(&at("2025-10-10T09:15:00")) - 262.5).abs() < EPS);
        assert!(
            (cfg.height_of(&at("2025-10-10T09:15:00"), &at("2025-10-10T10:00:00")) - 157.5).abs()
                < EPS
        );
    }

    #[test]
    fn empty_input_has_no_timeline() {
        assert!(compute_timeline(&[], &[], day(), &Utc).is_none());
    }

    #[test]
    fn other_days_do_not_count() {
        let (stages, _) = main_and_registration();
        let other = NaiveDate::from_ymd_opt(2025, 10, 11).unwrap();
        assert!(compute_timeline(&stages, &[], other, &Utc).is_none());
    }

    #[test]
    fn markers_are_hourly_and_bounded() {
        let stages = vec![Stage::new(
            "Main",
            vec![
                Session::new("A", "2025-10-10T09:40:00", "2025-10-10T10:20:00"),
                Session::new("B", "2025-10-10T16:05:00", "2025-10-10T17:00:00"),
            ],
        )];
        let cfg = compute_timeline(&stages, &[], day(), &Utc).unwrap();

        assert_eq!(cfg.hour_markers.first(), Some(&cfg.min_time));
        assert!(cfg.hour_markers.last().unwrap() <= &cfg.max_time);
        for pair in cfg.hour_markers.windows(2) {
            assert_eq!(pair[1].clone() - pair[0].clone(), TimeDelta::hours(1));
        }
        // 17:00 is already whole, still gets the extra hour.
        assert_eq!(cfg.max_time, at("2025-10-10T18:00:00"));
    }

    #[test]
    fn every_session_fits_inside_the_timeline() {
        let stages = vec![
            Stage::new(
                "Main",
                vec![
                    Session::new("A", "2025-10-10T09:00:00", "2025-10-10T09:45:00"),
                    Session::new("B", "2025-10-10T12:30:00", "2025-10-10T13:59:59"),
                ],
            ),
            Stage::new(
                "Lab",
                vec![Session::new("C", "2025-10-10T10:10:00", "2025-10-10T14:00:00")],
            ),
        ];
        let service = vec![Session::new("Café", "2025-10-10T11:00:00", "2025-10-10T11:20:00")];
        let cfg = compute_timeline(&stages, &service, day(), &Utc).unwrap();

        for s in stages.iter().flat_map(|st| st.sessions.iter()).chain(service.iter()) {
            let (start, end) = s.span_in(&Utc).unwrap();
            let top = cfg.position_of(&start);
            assert!(top >= 0.0, "{}", s.title);
            assert!(top + cfg.height_of(&start, &end) <= cfg.timeline_height + EPS, "{}", s.title);
        }
    }

    #[test]
    fn hours_are_truncated_in_layout_zone() {
        // +05:30 shifts the wall clock by half an hour.
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let service = vec![Session::new("A", "2025-10-10T04:00:00Z", "2025-10-10T05:00:00Z")];

        let cfg = compute_timeline(&[], &service, day(), &ist).unwrap();

        assert_eq!(format_time(&cfg.min_time), "09:00");
        assert_eq!(format_time(&cfg.max_time), "11:00");
        assert!((cfg.position_of(&service[0].start_in(&ist).unwrap()) - 30.0 * 3.5).abs() < EPS);
    }

    #[test]
    fn custom_scale_is_applied() {
        let (stages, service) = main_and_registration();
        let cfg = compute_timeline_scaled(&stages, &service, day(), &Utc, 2.0).unwrap();
        assert!((cfg.timeline_height - 360.0).abs() < EPS);
        assert_eq!(cfg.pixels_per_minute, 2.0);
    }

    #[test]
    fn unparseable_sessions_are_ignored() {
        let service = vec![
            Session::new("Broken", "2025-10-10T07:00:00", "whenever"),
            Session::new("Ok", "2025-10-10T10:30:00", "2025-10-10T11:00:00"),
        ];
        let cfg = compute_timeline(&[], &service, day(), &Utc).unwrap();
        assert_eq!(cfg.min_time, at("2025-10-10T10:00:00"));
    }

    #[test]
    fn inverted_session_gets_a_visible_block() {
        let service = vec![Session::new("Oops", "2025-10-10T10:30:00", "2025-10-10T08:00:00")];
        let cfg = compute_timeline(&[], &service, day(), &Utc).unwrap();
        let (start, end) = service[0].span_in(&Utc).unwrap();

        assert!(cfg.min_time <= cfg.max_time);
        assert!(cfg.height_of(&start, &end) < 0.0);

        let block = cfg.block_for(&start, &end, 17.5);
        assert!((block.top - 105.0).abs() < EPS);
        assert!((block.height - 17.5).abs() < EPS);
        assert!(block.top + block.height <= cfg.timeline_height + EPS);
    }

    #[test]
    fn block_height_is_capped_at_the_bottom() {
        let service = vec![Session::new("Late", "2025-10-10T10:59:00", "2025-10-10T10:59:00")];
        let cfg = compute_timeline(&[], &service, day(), &Utc).unwrap();
        let (start, end) = service[0].span_in(&Utc).unwrap();

        let block = cfg.block_for(&start, &end, 17.5);
        assert!((block.height - 3.5).abs() < EPS);
    }

    #[test]
    fn recomputation_is_deterministic() {
        let (stages, service) = main_and_registration();
        assert_eq!(
            compute_timeline(&stages, &service, day(), &Utc),
            compute_timeline(&stages, &service, day(), &Utc)
        );
    }
}
