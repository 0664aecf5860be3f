use super::Context;
use crate::cli::parser::ScheduleCommands;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::formatting::px;
use crate::utils::table::Table;
use crate::utils::time::format_time;
use chrono::TimeZone;
use std::fmt;

pub fn handle<Tz>(cmd: &ScheduleCommands, ctx: &Context<'_, Tz>) -> AppResult<()>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    if let ScheduleCommands::Timeline { date } = cmd {
        let Some(day) = ctx.resolve_day(date.as_deref())? else {
            return Ok(());
        };

        header(ctx.opts.label(day));

        let (Some(timeline), Some(layout)) = (
            Core::timeline(ctx.program, day, &ctx.tz, &ctx.opts),
            Core::build_day_layout(ctx.program, day, &ctx.tz, &ctx.opts),
        ) else {
            info("No sessions scheduled for this day");
            return Ok(());
        };

        println!(
            "Range   : {} - {}",
            format_time(&timeline.min_time),
            format_time(&timeline.max_time)
        );
        println!("Height  : {} px ({} px/min)", px(layout.timeline_height), px(layout.pixels_per_minute));
        println!();

        let mut hours = Table::new(["Hour", "Top"]);
        for marker in &layout.hour_markers {
            hours.add_row(vec![marker.label.clone(), px(marker.top)]);
        }
        print!("{}", hours.render());
        println!();

        let mut blocks = Table::new(["Track", "Start", "End", "Top", "Height", "Title"]);
        for track in &layout.tracks {
            for b in &track.blocks {
                blocks.add_row(vec![
                    track.name.clone(),
                    b.start.clone(),
                    b.end.clone(),
                    px(b.top),
                    px(b.height),
                    b.title.clone(),
                ]);
            }
        }
        print!("{}", blocks.render());
    }
    Ok(())
}
