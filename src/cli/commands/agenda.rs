use super::Context;
use crate::cli::parser::ScheduleCommands;
use crate::core::calculator::mobile_agenda;
use crate::core::logic::GENERAL_TRACK;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::formatting::speaker_names;
use crate::utils::table::Table;
use crate::utils::time::format_time;
use chrono::TimeZone;
use std::fmt;

pub fn handle<Tz>(cmd: &ScheduleCommands, ctx: &Context<'_, Tz>) -> AppResult<()>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    if let ScheduleCommands::Agenda { date } = cmd {
        let Some(day) = ctx.resolve_day(date.as_deref())? else {
            return Ok(());
        };

        header(ctx.opts.label(day));

        let agenda = mobile_agenda(&ctx.program.stages, &ctx.program.service_sessions, day, &ctx.tz);
        if agenda.is_empty() {
            info("No sessions scheduled for this day");
            return Ok(());
        }

        let mut table = Table::new(["Start", "End", "Stage", "Title", "Speakers"]);
        for session in &agenda {
            let (start, end) = session
                .span_in(&ctx.tz)
                .map(|(s, e)| (format_time(&s), format_time(&e)))
                .unwrap_or_default();

            table.add_row(vec![
                start,
                end,
                session.stage_name().unwrap_or(GENERAL_TRACK).to_string(),
                session.title.clone(),
                speaker_names(session),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
