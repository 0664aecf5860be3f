use super::session::Session;
use super::stage::Stage;
use serde::{Deserialize, Serialize};

/// Everything the layout engine consumes for one render: the stage tracks and
/// the general (service) sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    #[serde(default)]
    pub stages: Vec<Stage>,
    #[serde(default)]
    pub service_sessions: Vec<Session>,
}

impl Program {
    pub fn new(stages: Vec<Stage>, service_sessions: Vec<Session>) -> Self {
        Self {
            stages,
            service_sessions,
        }
    }

    /// Service sessions first, then each stage's sessions in stage order.
    pub fn sessions(&self) -> impl Iterator<Item = &Session> {
        self.service_sessions
            .iter()
            .chain(self.stages.iter().flat_map(|st| st.sessions.iter()))
    }

    pub fn is_empty(&self) -> bool {
        self.sessions().next().is_none()
    }

    /// Session detail lookup by slug.
    pub fn find_session(&self, slug: &str) -> Option<&Session> {
        self.sessions().find(|s| s.slug.as_deref() == Some(slug))
    }
}
