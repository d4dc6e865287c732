//! Playback session state.
//!
//! A session is one run of a scenario against a particular log. Its state
//! is an owned value held behind the player's lock rather than ambient
//! module-level state, which is what makes the single-flight guard and
//! multi-instance testing straightforward.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Lifecycle of a playback session.
///
/// `Completed` is terminal for that session; a fresh `start` call creates a
/// new session beginning again at `Idle -> Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum PlaybackStatus {
    /// No session is in flight.
    Idle,
    /// Steps are being emitted on schedule.
    Running,
    /// The final step has fired; the result artifact is available.
    Completed,
}

/// Transient progress state of one scenario run.
///
/// Owned exclusively by the `SequencePlayer`; no other component mutates
/// `status` or `cursor`. The cursor counts committed steps: it only
/// advances forward, one step at a time, terminating exactly at the
/// scenario's step count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackSession {
    /// Current lifecycle state
    pub status: PlaybackStatus,
    /// Scenario being played, `None` while idle
    pub scenario_id: Option<String>,
    /// Number of steps that have fired so far
    pub cursor: usize,
}

impl PlaybackSession {
    /// Creates an idle session with no scenario loaded.
    pub fn idle() -> Self {
        Self {
            status: PlaybackStatus::Idle,
            scenario_id: None,
            cursor: 0,
        }
    }

    /// Creates a freshly started session for the given scenario.
    pub fn running(scenario_id: String) -> Self {
        Self {
            status: PlaybackStatus::Running,
            scenario_id: Some(scenario_id),
            cursor: 0,
        }
    }

    /// Returns whether this session is currently running.
    pub fn is_running(&self) -> bool {
        self.status == PlaybackStatus::Running
    }
}

impl Default for PlaybackSession {
    fn default() -> Self {
        Self::idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_session() {
        let session = PlaybackSession::idle();

        assert_eq!(session.status, PlaybackStatus::Idle);
        assert_eq!(session.scenario_id, None);
        assert_eq!(session.cursor, 0);
        assert!(!session.is_running());
    }

    #[test]
    fn test_running_session() {
        let session = PlaybackSession::running("fund_eval".to_string());

        assert!(session.is_running());
        assert_eq!(session.scenario_id.as_deref(), Some("fund_eval"));
        assert_eq!(session.cursor, 0);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(PlaybackStatus::Running.to_string(), "running");
        assert_eq!(PlaybackStatus::Completed.to_string(), "completed");
    }
}
