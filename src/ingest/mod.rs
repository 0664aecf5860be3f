//! Loading a [`Program`] from disk.

pub mod sessionize;

use crate::errors::AppResult;
use crate::models::program::Program;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Normalized `{"stages": [...], "serviceSessions": [...]}` document
    #[default]
    Program,
    /// Session API grid export (days → rooms → sessions)
    Sessionize,
}

impl InputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Program => "program",
            InputFormat::Sessionize => "sessionize",
        }
    }
}

pub fn parse_program(json: &str) -> AppResult<Program> {
    Ok(serde_json::from_str(json)?)
}

/// Read the schedule at `path`. `speakers` is the optional speaker-wall
/// export and only applies to the session API format.
pub fn load_program(path: &Path, format: InputFormat, speakers: Option<&Path>) -> AppResult<Program> {
    debug!(path = %path.display(), format = format.as_str(), "loading schedule");
    let raw = fs::read_to_string(path)?;

    let program = match format {
        InputFormat::Program => parse_program(&raw)?,
        InputFormat::Sessionize => {
            let grid = sessionize::parse_grid(&raw)?;
            let wall = match speakers {
                Some(p) => Some(sessionize::parse_speaker_wall(&fs::read_to_string(p)?)?),
                None => None,
            };
            sessionize::build_program(&grid, wall.as_deref())
        }
    };

    debug!(
        stages = program.stages.len(),
        sessions = program.sessions().count(),
        "schedule loaded"
    );
    Ok(program)
}
