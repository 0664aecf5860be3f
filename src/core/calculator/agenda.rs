use crate::models::Day;
use crate::models::session::{Session, StageRef};
use crate::models::stage::Stage;
use chrono::TimeZone;

/// Small-screen agenda: the day's service sessions and stage sessions merged
/// into one list ordered by start. Stage sessions carry their stage name.
///
/// The sort is stable, so equal starts keep input order: service sessions
/// first, then stages in the order given.
pub fn mobile_agenda<Tz: TimeZone>(
    stages: &[Stage],
    service_sessions: &[Session],
    day: Day,
    tz: &Tz,
) -> Vec<Session> {
    let tagged = service_sessions.iter().map(|s| (s, None)).chain(
        stages
            .iter()
            .flat_map(|stage| stage.sessions.iter().map(move |s| (s, Some(&stage.name)))),
    );

    let mut entries: Vec<_> = tagged
        .filter_map(|(session, stage)| {
            let (start, _) = session.span_in(tz)?;
            if start.date_naive() != day {
                return None;
            }

            let mut entry = session.clone();
            if let Some(name) = stage {
                entry.stage = Some(StageRef { name: name.clone() });
            }
            Some((start, entry))
        })
        .collect();

    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries.into_iter().map(|(_, s)| s).collect()
}
