use super::session::Session;
use serde::{Deserialize, Serialize};

/// A named track with its ordered sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub name: String,
    #[serde(default, alias = "schedule")]
    pub sessions: Vec<Session>,
}

impl Stage {
    pub fn new(name: impl Into<String>, sessions: Vec<Session>) -> Self {
        Self {
            name: name.into(),
            sessions,
        }
    }
}
