//! Conversation message types.

use crate::actor::preset::USER_ACTOR_ID;
use crate::scenario::ScenarioStep;
use serde::{Deserialize, Serialize};

/// Distinguishes who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageAuthor {
    /// Typed directly by the user and appended immediately.
    User,
    /// Emitted by the sequence player when a scenario step fired.
    Engine,
}

/// A single entry in a conversation log.
///
/// Messages are immutable once appended. `id` is unique within a log and
/// `timestamp` records the wall-clock time of append (RFC 3339), not the
/// time the emission was scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier (UUID format)
    pub id: String,
    /// Id of the actor this message is attributed to
    pub actor_id: String,
    /// Who authored the message
    pub author: MessageAuthor,
    /// Message text
    pub text: String,
    /// Wall-clock creation time (RFC 3339 format)
    pub timestamp: String,
    /// Ordered source citations, empty for most messages
    #[serde(default)]
    pub citations: Vec<String>,
}

impl Message {
    /// Creates a user-authored message, stamped with the current time.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            actor_id: USER_ACTOR_ID.to_string(),
            author: MessageAuthor::User,
            text: text.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            citations: Vec::new(),
        }
    }

    /// Creates an engine-authored message from a scenario step that just
    /// fired, stamped with the fire time.
    pub fn from_step(step: &ScenarioStep) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            actor_id: step.actor_id.clone(),
            author: MessageAuthor::Engine,
            text: step.text.clone(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            citations: step.citations.clone(),
        }
    }
}
