pub mod agenda;
pub mod config;
pub mod day;
pub mod days;
pub mod export;
pub mod session;
pub mod timeline;
pub mod validate;

use crate::core::calculator::extract_days;
use crate::core::logic::{Core, LayoutOptions};
use crate::errors::AppResult;
use crate::models::Day;
use crate::models::program::Program;
use crate::ui::messages::info;
use chrono::TimeZone;

/// What every schedule command works on: the loaded program, the layout
/// time zone and the layout options from the config.
pub struct Context<'a, Tz: TimeZone> {
    pub program: &'a Program,
    pub tz: Tz,
    pub opts: LayoutOptions,
}

impl<Tz: TimeZone> Context<'_, Tz> {
    pub fn days(&self) -> Vec<Day> {
        extract_days(&self.program.stages, &self.program.service_sessions, &self.tz)
    }

    /// Requested day or the first one. Prints the empty state and returns
    /// `None` when nothing is scheduled.
    pub fn resolve_day(&self, requested: Option<&str>) -> AppResult<Option<Day>> {
        let day = Core::selected_day(requested, &self.days())?;
        if day.is_none() {
            info("No schedule available yet");
        }
        Ok(day)
    }
}
