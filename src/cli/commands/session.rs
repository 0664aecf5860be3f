use super::Context;
use crate::cli::parser::ScheduleCommands;
use crate::core::calculator::day_of;
use crate::core::logic::GENERAL_TRACK;
use crate::errors::{AppError, AppResult};
use crate::models::program::Program;
use crate::models::session::Session;
use crate::utils::date::long_day_label;
use crate::utils::formatting::bold;
use crate::utils::time::{format_minutes, format_time, minutes_between};
use chrono::TimeZone;
use std::fmt;

const WRAP_WIDTH: usize = 78;

pub fn handle<Tz>(cmd: &ScheduleCommands, ctx: &Context<'_, Tz>) -> AppResult<()>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    if let ScheduleCommands::Session { slug } = cmd {
        let session = ctx
            .program
            .find_session(slug)
            .ok_or_else(|| AppError::SessionNotFound(slug.clone()))?;

        println!("{}", bold(&session.title));
        println!();

        if let (Some(day), Some((start, end))) = (day_of(session, &ctx.tz), session.span_in(&ctx.tz)) {
            println!("Date     : {}", long_day_label(day));
            println!(
                "Time     : {} - {} ({})",
                format_time(&start),
                format_time(&end),
                format_minutes(minutes_between(&start, &end).round() as i64)
            );
        } else {
            println!("Time     : {} - {} (not scheduled)", session.start, session.end);
        }
        println!("Stage    : {}", stage_of(ctx.program, session));

        if !session.speakers().is_empty() {
            println!();
            println!("{}", bold("Speakers"));
            for speaker in session.speakers() {
                match &speaker.title {
                    Some(title) => println!("  {} - {}", speaker.name, title),
                    None => println!("  {}", speaker.name),
                }
            }
        }

        if let Some(description) = session.description.as_deref().filter(|d| !d.trim().is_empty()) {
            println!();
            for line in textwrap::wrap(description.trim(), WRAP_WIDTH) {
                println!("{line}");
            }
        }
    }
    Ok(())
}

/// Stage holding the session, falling back to its own stage tag, then to
/// the general track.
fn stage_of<'a>(program: &'a Program, session: &'a Session) -> &'a str {
    program
        .stages
        .iter()
        .find(|st| st.sessions.iter().any(|s| std::ptr::eq(s, session)))
        .map(|st| st.name.as_str())
        .or(session.stage_name())
        .unwrap_or(GENERAL_TRACK)
}
