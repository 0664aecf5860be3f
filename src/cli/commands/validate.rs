use super::Context;
use crate::core::validate::validate;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use chrono::TimeZone;
use tracing::debug;

pub fn handle<Tz: TimeZone>(ctx: &Context<'_, Tz>) -> AppResult<()> {
    let issues = validate(ctx.program, &ctx.tz);
    debug!(issues = issues.len(), "validation finished");

    if issues.is_empty() {
        success(format!(
            "Schedule OK: {} sessions, {} stages",
            ctx.program.sessions().count(),
            ctx.program.stages.len()
        ));
        return Ok(());
    }

    for issue in &issues {
        warning(issue);
    }
    Err(AppError::Validation(issues.len()))
}
