//! Reader for the session-management API exports: the "grid" view (days →
//! rooms → sessions) and the "speaker wall" view.
//!
//! Only the JSON shape is handled here; fetching the exports is left to
//! whatever downloads them.

use crate::errors::AppResult;
use crate::models::program::Program;
use crate::models::session::{Session, StageRef};
use crate::models::speaker::{Speaker, sort_speakers};
use crate::models::stage::Stage;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, warn};

#[derive(Debug, Clone, Deserialize)]
pub struct GridDay {
    #[serde(default)]
    pub rooms: Vec<GridRoom>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GridRoom {
    pub name: String,
    #[serde(default)]
    pub sessions: Vec<GridSession>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GridSpeakerRef {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSession {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub starts_at: Option<String>,
    #[serde(default)]
    pub ends_at: Option<String>,
    #[serde(default)]
    pub speakers: Vec<GridSpeakerRef>,
    #[serde(default)]
    pub is_service_session: bool,
    #[serde(default)]
    pub is_plenum_session: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallSpeaker {
    pub id: String,
    pub full_name: String,
    #[serde(default)]
    pub tag_line: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub is_top_speaker: bool,
}

impl From<&WallSpeaker> for Speaker {
    fn from(w: &WallSpeaker) -> Self {
        Speaker {
            name: w.full_name.clone(),
            title: w.tag_line.clone(),
            image_url: w.profile_picture.clone(),
            slug: Some(w.id.clone()),
            is_top_speaker: w.is_top_speaker,
        }
    }
}

pub fn parse_grid(json: &str) -> AppResult<Vec<GridDay>> {
    Ok(serde_json::from_str(json)?)
}

pub fn parse_speaker_wall(json: &str) -> AppResult<Vec<WallSpeaker>> {
    Ok(serde_json::from_str(json)?)
}

/// Resolve a session's speakers. With a wall, unknown ids are dropped; without
/// one, the grid's inline names are used. `None` for sessions with no speakers.
fn resolve_speakers(
    session: &GridSession,
    wall: Option<&HashMap<&str, &WallSpeaker>>,
) -> Option<Vec<Speaker>> {
    if session.speakers.is_empty() {
        return None;
    }

    let mut speakers: Vec<Speaker> = match wall {
        Some(wall) => session
            .speakers
            .iter()
            .filter_map(|r| match wall.get(r.id.as_str()) {
                Some(w) => Some(Speaker::from(*w)),
                None => {
                    warn!(session = %session.id, speaker = %r.id, "speaker missing from speaker wall");
                    None
                }
            })
            .collect(),
        None => session
            .speakers
            .iter()
            .map(|r| Speaker {
                slug: Some(r.id.clone()),
                ..Speaker::named(r.name.clone())
            })
            .collect(),
    };

    sort_speakers(&mut speakers);
    Some(speakers)
}

/// Normalize the grid export into stages and general sessions.
///
/// Service and plenum sessions form the general track. Every other session
/// lands in the stage named after its room; stages appear in first-seen order
/// across all days.
pub fn build_program(grid: &[GridDay], wall: Option<&[WallSpeaker]>) -> Program {
    let wall_index: Option<HashMap<&str, &WallSpeaker>> =
        wall.map(|w| w.iter().map(|s| (s.id.as_str(), s)).collect());

    let sessions = grid
        .iter()
        .flat_map(|day| day.rooms.iter())
        .flat_map(|room| room.sessions.iter().map(move |s| (room, s)));

    let (stages, service_sessions) = sessions.fold(
        (Vec::<Stage>::new(), Vec::<Session>::new()),
        |(mut stages, mut service), (room, gs)| {
            let session = Session {
                title: gs.title.clone(),
                description: gs.description.clone(),
                start: gs.starts_at.clone().unwrap_or_default(),
                end: gs.ends_at.clone().unwrap_or_default(),
                slug: Some(gs.id.clone()),
                speakers: resolve_speakers(gs, wall_index.as_ref()),
                stage: None,
            };

            if gs.is_service_session || gs.is_plenum_session {
                service.push(session);
                return (stages, service);
            }

            let session = Session {
                stage: Some(StageRef {
                    name: room.name.clone(),
                }),
                ..session
            };
            match stages.iter_mut().find(|st| st.name == room.name) {
                Some(stage) => stage.sessions.push(session),
                None => stages.push(Stage::new(room.name.clone(), vec![session])),
            }
            (stages, service)
        },
    );

    debug!(
        stages = stages.len(),
        service_sessions = service_sessions.len(),
        "normalized session grid"
    );

    Program::new(stages, service_sessions)
}
