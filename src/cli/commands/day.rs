use super::Context;
use crate::cli::parser::ScheduleCommands;
use crate::core::calculator::{TimeBlock, filter_by_day, group_by_start};
use crate::core::logic::GENERAL_TRACK;
use crate::errors::AppResult;
use crate::models::session::Session;
use crate::ui::messages::{header, info};
use crate::utils::formatting::{bold, speaker_names};
use crate::utils::time::format_time;
use chrono::TimeZone;
use std::fmt;

pub fn handle<Tz>(cmd: &ScheduleCommands, ctx: &Context<'_, Tz>) -> AppResult<()>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    if let ScheduleCommands::Day { date } = cmd {
        let Some(day) = ctx.resolve_day(date.as_deref())? else {
            return Ok(());
        };

        header(ctx.opts.label(day));

        let view = filter_by_day(&ctx.program.stages, &ctx.program.service_sessions, day, &ctx.tz);
        if view.is_empty() {
            info("No sessions scheduled for this day");
            return Ok(());
        }

        println!("{}", bold(GENERAL_TRACK));
        if view.service_sessions.is_empty() {
            println!("  No general sessions");
        }
        for session in &view.service_sessions {
            println!("  {}", line(session, &ctx.tz));
        }

        for stage in &view.stages {
            println!("\n{}", bold(&stage.name));
            for block in group_by_start(&stage.sessions) {
                print_block(&block, &ctx.tz);
            }
        }
    }
    Ok(())
}

/// Parallel sessions of a block are listed under one time slot.
fn print_block<Tz>(block: &TimeBlock<'_>, tz: &Tz)
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let [first, rest @ ..] = block.sessions.as_slice() else {
        return;
    };
    println!("  {}", line(first, tz));
    for session in rest {
        println!("  {:13}{}", "", entry(session));
    }
}

fn line<Tz>(session: &Session, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let span = match session.span_in(tz) {
        Some((start, end)) => format!("{}-{}", format_time(&start), format_time(&end)),
        None => "--:--".to_string(),
    };
    format!("{span:13}{}", entry(session))
}

fn entry(session: &Session) -> String {
    let speakers = speaker_names(session);
    if speakers.is_empty() {
        session.title.clone()
    } else {
        format!("{} ({speakers})", session.title)
    }
}
