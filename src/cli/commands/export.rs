use super::Context;
use crate::cli::parser::ScheduleCommands;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::utils::date::parse_date;
use crate::utils::path::expand_tilde;
use chrono::TimeZone;
use std::fmt;

pub fn handle<Tz>(cmd: &ScheduleCommands, ctx: &Context<'_, Tz>) -> AppResult<()>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    if let ScheduleCommands::Export {
        format,
        file,
        date,
        force,
    } = cmd
    {
        let day = date
            .as_deref()
            .map(|raw| parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string())))
            .transpose()?;

        let path = expand_tilde(file);
        ExportLogic::export(ctx.program, &ctx.tz, &ctx.opts, *format, &path, day, *force)?;
    }
    Ok(())
}
