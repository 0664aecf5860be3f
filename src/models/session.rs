use super::speaker::Speaker;
use crate::utils::time::parse_timestamp;
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageRef {
    pub name: String,
}

/// A talk or a service session.
///
/// `start`/`end` keep the raw ISO-8601 text from the data source; they are
/// interpreted per layout time zone by [`Session::span_in`]. A session whose
/// timestamps do not parse never shows up in any derived view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub start: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub end: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default, alias = "speaker", skip_serializing_if = "Option::is_none")]
    pub speakers: Option<Vec<Speaker>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<StageRef>,
}

/// Null or missing timestamps become `""`, which never parses, so the
/// session is dropped from the views instead of failing the whole document.
fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

impl Session {
    pub fn new(title: impl Into<String>, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            start: start.into(),
            end: end.into(),
            slug: None,
            speakers: None,
            stage: None,
        }
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn with_stage(mut self, name: impl Into<String>) -> Self {
        self.stage = Some(StageRef { name: name.into() });
        self
    }

    /// List key: the slug, or the title for service sessions without one.
    pub fn key(&self) -> &str {
        self.slug.as_deref().unwrap_or(&self.title)
    }

    pub fn speakers(&self) -> &[Speaker] {
        self.speakers.as_deref().unwrap_or(&[])
    }

    pub fn stage_name(&self) -> Option<&str> {
        self.stage.as_ref().map(|s| s.name.as_str())
    }

    pub fn start_in<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        parse_timestamp(&self.start, tz)
    }

    pub fn end_in<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        parse_timestamp(&self.end, tz)
    }

    /// Start and end in `tz`; `None` if either timestamp is unparseable.
    pub fn span_in<Tz: TimeZone>(&self, tz: &Tz) -> Option<(DateTime<Tz>, DateTime<Tz>)> {
        Some((self.start_in(tz)?, self.end_in(tz)?))
    }
}
