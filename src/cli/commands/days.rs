use super::Context;
use crate::core::calculator::filter_by_day;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date::iso_label;
use crate::utils::table::Table;
use chrono::TimeZone;

pub fn handle<Tz: TimeZone>(ctx: &Context<'_, Tz>) -> AppResult<()> {
    let days = ctx.days();
    if days.is_empty() {
        info("No schedule available yet");
        return Ok(());
    }

    let mut table = Table::new(["Date", "Day", "Sessions", "Stages"]);
    for day in days {
        let view = filter_by_day(&ctx.program.stages, &ctx.program.service_sessions, day, &ctx.tz);
        let sessions = view.service_sessions.len()
            + view.stages.iter().map(|st| st.sessions.len()).sum::<usize>();

        table.add_row(vec![
            iso_label(day),
            ctx.opts.label(day),
            sessions.to_string(),
            view.stages.len().to_string(),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
