use super::days::day_of;
use crate::models::Day;
use crate::models::session::Session;
use crate::models::stage::Stage;
use chrono::TimeZone;

/// The schedule restricted to one day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayView {
    /// Stages with at least one session on the day, in input order.
    pub stages: Vec<Stage>,
    /// General sessions on the day; may be empty ("no general sessions").
    pub service_sessions: Vec<Session>,
}

impl DayView {
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty() && self.service_sessions.is_empty()
    }
}

/// Keep only sessions starting on `day`. Stages left without sessions are
/// dropped; service sessions are only filtered. Inputs are left untouched.
pub fn filter_by_day<Tz: TimeZone>(
    stages: &[Stage],
    service_sessions: &[Session],
    day: Day,
    tz: &Tz,
) -> DayView {
    let on_day = |s: &Session| day_of(s, tz) == Some(day);

    let stages = stages
        .iter()
        .filter_map(|stage| {
            let sessions: Vec<Session> = stage
                .sessions
                .iter()
                .filter(|&s| on_day(s))
                .cloned()
                .collect();
            (!sessions.is_empty()).then(|| Stage::new(stage.name.clone(), sessions))
        })
        .collect();

    let service_sessions = service_sessions
        .iter()
        .filter(|&s| on_day(s))
        .cloned()
        .collect();

    DayView {
        stages,
        service_sessions,
    }
}
