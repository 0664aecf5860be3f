use crate::core::logic::{Core, LayoutOptions};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::layouts_to_rows;
use crate::models::Day;
use crate::models::program::Program;
use crate::ui::messages::warning;
use chrono::TimeZone;
use std::fmt;
use std::path::Path;
use tracing::debug;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the layout of `date`, or of every scheduled day when `None`.
    ///
    /// Nothing is written when there is nothing to export. Returns whether a
    /// file was produced.
    pub fn export<Tz>(
        program: &Program,
        tz: &Tz,
        opts: &LayoutOptions,
        format: ExportFormat,
        file: &Path,
        date: Option<Day>,
        force: bool,
    ) -> AppResult<bool>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        ensure_writable(file, force)?;

        let layouts = match date {
            Some(day) => Core::build_day_layout(program, day, tz, opts)
                .into_iter()
                .collect(),
            None => Core::build_all_layouts(program, tz, opts),
        };

        if layouts.is_empty() {
            warning("No sessions found for the selected day.");
            return Ok(false);
        }

        debug!(days = layouts.len(), format = format.as_str(), "exporting layouts");

        match format {
            ExportFormat::Json => export_json(&layouts, file)?,
            ExportFormat::Csv => export_csv(&layouts_to_rows(&layouts), file)?,
        }

        Ok(true)
    }
}
