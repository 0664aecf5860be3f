use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Speaker {
    pub name: String,
    /// Tag line shown under the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default)]
    pub is_top_speaker: bool,
}

impl Speaker {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
            image_url: None,
            slug: None,
            is_top_speaker: false,
        }
    }
}

/// Order speakers by name (case-insensitive), then move top speakers to the
/// front. Both passes are stable.
pub fn sort_speakers(speakers: &mut [Speaker]) {
    speakers.sort_by_key(|s| s.name.to_lowercase());
    speakers.sort_by_key(|s| !s.is_top_speaker);
}
