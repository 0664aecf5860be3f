use crate::config::Config;
use crate::core::calculator::timeline::{PIXELS_PER_MINUTE, TimelineConfig};
use crate::core::calculator::{days, filter, timeline};
use crate::errors::{AppError, AppResult};
use crate::models::Day;
use crate::models::day_layout::{Block, DayLayout, HourMarker, Track};
use crate::models::program::Program;
use crate::models::session::Session;
use crate::utils::date::{day_label, iso_label, parse_date};
use crate::utils::time::format_time;
use chrono::TimeZone;
use std::fmt;

/// Title of the track holding service sessions.
pub const GENERAL_TRACK: &str = "General";

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    pub pixels_per_minute: f64,
    /// Minimum drawn duration, so empty or inverted sessions stay visible.
    pub min_block_minutes: f64,
    pub localized_labels: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            pixels_per_minute: PIXELS_PER_MINUTE,
            min_block_minutes: 5.0,
            localized_labels: true,
        }
    }
}

impl From<&Config> for LayoutOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            pixels_per_minute: cfg.pixels_per_minute,
            min_block_minutes: cfg.min_block_minutes,
            localized_labels: cfg.locale_day_labels,
        }
    }
}

impl LayoutOptions {
    pub fn label(&self, day: Day) -> String {
        if self.localized_labels {
            day_label(day)
        } else {
            iso_label(day)
        }
    }
}

pub struct Core;

impl Core {
    /// Day to show: the requested one if given, else the first scheduled day.
    /// `Ok(None)` means nothing is scheduled yet.
    pub fn selected_day(requested: Option<&str>, days: &[Day]) -> AppResult<Option<Day>> {
        match requested {
            Some(raw) => parse_date(raw)
                .map(Some)
                .ok_or_else(|| AppError::InvalidDate(raw.to_string())),
            None => Ok(days.first().copied()),
        }
    }

    pub fn timeline<Tz: TimeZone>(
        program: &Program,
        day: Day,
        tz: &Tz,
        opts: &LayoutOptions,
    ) -> Option<TimelineConfig<Tz>> {
        timeline::compute_timeline_scaled(
            &program.stages,
            &program.service_sessions,
            day,
            tz,
            opts.pixels_per_minute,
        )
    }

    /// Desktop layout for `day`: a "General" track when the day has service
    /// sessions, then one track per stage. `None` when nothing is scheduled.
    pub fn build_day_layout<Tz>(
        program: &Program,
        day: Day,
        tz: &Tz,
        opts: &LayoutOptions,
    ) -> Option<DayLayout>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let view = filter::filter_by_day(&program.stages, &program.service_sessions, day, tz);
        let timeline = timeline::compute_timeline_scaled(
            &view.stages,
            &view.service_sessions,
            day,
            tz,
            opts.pixels_per_minute,
        )?;

        let min_height = opts.min_block_minutes * opts.pixels_per_minute;
        let track = |name: &str, sessions: &[Session]| Track {
            name: name.to_string(),
            blocks: sessions
                .iter()
                .filter_map(|s| block(s, &timeline, tz, min_height))
                .collect(),
        };

        let general = (!view.service_sessions.is_empty())
            .then(|| track(GENERAL_TRACK, view.service_sessions.as_slice()));
        let tracks = general
            .into_iter()
            .chain(view.stages.iter().map(|st| track(st.name.as_str(), st.sessions.as_slice())))
            .collect();

        let hour_markers = timeline
            .hour_markers
            .iter()
            .map(|m| HourMarker {
                label: format_time(m),
                top: timeline.position_of(m),
            })
            .collect();

        Some(DayLayout {
            day,
            label: opts.label(day),
            pixels_per_minute: timeline.pixels_per_minute,
            timeline_height: timeline.timeline_height,
            hour_markers,
            tracks,
        })
    }

    /// Layouts for every scheduled day, in day order.
    pub fn build_all_layouts<Tz>(program: &Program, tz: &Tz, opts: &LayoutOptions) -> Vec<DayLayout>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        days::extract_days(&program.stages, &program.service_sessions, tz)
            .into_iter()
            .filter_map(|day| Self::build_day_layout(program, day, tz, opts))
            .collect()
    }
}

fn block<Tz>(session: &Session, timeline: &TimelineConfig<Tz>, tz: &Tz, min_height: f64) -> Option<Block>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let (start, end) = session.span_in(tz)?;
    let geometry = timeline.block_for(&start, &end, min_height);

    Some(Block {
        key: session.key().to_string(),
        title: session.title.clone(),
        start: format_time(&start),
        end: format_time(&end),
        top: geometry.top,
        height: geometry.height,
        speakers: session.speakers().iter().map(|s| s.name.clone()).collect(),
    })
}
