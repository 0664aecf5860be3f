use crate::errors::AppResult;
use crate::export::model::BlockExport;
use crate::export::notify_export_success;
use crate::models::day_layout::DayLayout;
use crate::ui::messages::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Full layouts (tracks, blocks, hour markers), pretty-printed.
pub(crate) fn export_json(layouts: &[DayLayout], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, layouts)?;
    out.write_all(b"\n")?;
    out.flush()?;

    notify_export_success("JSON", path);
    Ok(())
}

/// One row per block; the header comes from the serde field names.
pub(crate) fn export_csv(rows: &[BlockExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
