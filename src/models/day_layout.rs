use chrono::NaiveDate;
use serde::Serialize;

/// A session positioned inside a track.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub key: String,
    pub title: String,
    pub start: String,
    pub end: String,
    pub top: f64,
    pub height: f64,
    pub speakers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Track {
    pub name: String,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourMarker {
    pub label: String,
    pub top: f64,
}

/// Render-ready desktop layout for one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayLayout {
    pub day: NaiveDate,
    pub label: String,
    pub pixels_per_minute: f64,
    pub timeline_height: f64,
    pub hour_markers: Vec<HourMarker>,
    pub tracks: Vec<Track>,
}
