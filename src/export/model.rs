use crate::models::day_layout::DayLayout;
use crate::utils::date::iso_label;
use serde::Serialize;

/// One positioned block per row, for spreadsheet-friendly CSV.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct BlockExport {
    pub day: String,
    pub track: String,
    pub key: String,
    pub title: String,
    pub start: String,
    pub end: String,
    pub top: f64,
    pub height: f64,
    pub speakers: String,
}

pub(crate) fn layouts_to_rows(layouts: &[DayLayout]) -> Vec<BlockExport> {
    layouts
        .iter()
        .flat_map(|layout| {
            layout.tracks.iter().flat_map(move |track| {
                track.blocks.iter().map(move |b| BlockExport {
                    day: iso_label(layout.day),
                    track: track.name.clone(),
                    key: b.key.clone(),
                    title: b.title.clone(),
                    start: b.start.clone(),
                    end: b.end.clone(),
                    top: b.top,
                    height: b.height,
                    speakers: b.speakers.join("; "),
                })
            })
        })
        .collect()
}
