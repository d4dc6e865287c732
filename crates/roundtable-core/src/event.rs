//! Playback events published to subscribers.
//!
//! The UI collaborator subscribes to a single stream and reacts to log
//! growth (live message rendering) and playback completion (artifact
//! reveal).

use crate::conversation::Message;
use serde::{Deserialize, Serialize};

/// High-level events observable by subscribers of a conversation log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlaybackEvent {
    /// A message was appended to the log (user- or engine-authored).
    MessageAppended { message: Message },
    /// A playback session transitioned from Idle to Running.
    PlaybackStarted { scenario_id: String },
    /// A playback session fired its final step and completed.
    PlaybackCompleted { scenario_id: String },
}
