use crate::models::Day;
use crate::models::session::Session;
use crate::models::stage::Stage;
use chrono::TimeZone;
use std::collections::BTreeSet;

/// Calendar date of the session start in `tz`, or `None` when the session's
/// timestamps do not parse.
pub fn day_of<Tz: TimeZone>(session: &Session, tz: &Tz) -> Option<Day> {
    session
        .span_in(tz)
        .map(|(start, _)| start.date_naive())
}

/// Distinct calendar days across every stage and service session, ascending.
///
/// Sessions on the same date but at different times collapse into one day.
/// No sessions at all gives an empty list: "no schedule available yet".
pub fn extract_days<Tz: TimeZone>(
    stages: &[Stage],
    service_sessions: &[Session],
    tz: &Tz,
) -> Vec<Day> {
    stages
        .iter()
        .flat_map(|stage| stage.sessions.iter())
        .chain(service_sessions)
        .filter_map(|s| day_of(s, tz))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
