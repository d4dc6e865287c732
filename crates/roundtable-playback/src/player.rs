//! The sequence player: the scheduler and state machine of the engine.

use crate::session::{PlaybackSession, PlaybackStatus};
use roundtable_core::conversation::{ConversationLog, Message};
use roundtable_core::error::{Result, RoundtableError};
use roundtable_core::event::PlaybackEvent;
use roundtable_core::scenario::{ResultArtifact, ScenarioRegistry};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Outcome of a `start` request.
///
/// `AlreadyRunning` is a deliberate no-op guard, not an error: the caller
/// simply observes that no new session started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// A new session transitioned from Idle to Running.
    Started,
    /// A session was already running; the request was ignored.
    AlreadyRunning,
}

/// Drives step-by-step timed emission of a scenario into a conversation log.
///
/// At most one session may be running against the player's log at a time
/// (single-flight). Each step's wait is only armed after the previous step's
/// message has been appended, so step order holds in the log under any
/// scheduler jitter: step `i + 1` literally cannot begin its wait before
/// step `i`'s message exists.
///
/// There is no cancel transition; once started, a session runs to
/// completion unless the surrounding runtime is torn down.
pub struct SequencePlayer {
    registry: Arc<ScenarioRegistry>,
    log: Arc<ConversationLog>,
    session: Arc<RwLock<PlaybackSession>>,
}

impl SequencePlayer {
    /// Creates an idle player over the given registry and log.
    pub fn new(registry: Arc<ScenarioRegistry>, log: Arc<ConversationLog>) -> Self {
        Self {
            registry,
            log,
            session: Arc::new(RwLock::new(PlaybackSession::idle())),
        }
    }

    /// Starts playback of a scenario.
    ///
    /// If a session is already running this is a no-op and returns
    /// `AlreadyRunning`; the running session is unaffected. An id missing
    /// from the registry is a caller defect: it is fatal in development
    /// builds and silently substituted with the fallback scenario in
    /// release builds, so the condition never reaches the end user.
    ///
    /// On success the session transitions to Running, a `PlaybackStarted`
    /// event is published, and steps are emitted on schedule by a spawned
    /// task until the session completes.
    pub async fn start(&self, scenario_id: &str) -> StartOutcome {
        let scenario = match self.registry.get(scenario_id) {
            Ok(scenario) => scenario.clone(),
            Err(_) => {
                tracing::error!(
                    "[SequencePlayer] Unknown scenario '{}', substituting fallback",
                    scenario_id
                );
                debug_assert!(false, "caller produced an unregistered scenario id");
                self.registry.fallback().clone()
            }
        };

        // Status check and transition under one write lock: the
        // single-flight guard.
        {
            let mut session = self.session.write().await;
            if session.is_running() {
                tracing::debug!(
                    "[SequencePlayer] Start of '{}' ignored: a session is already running",
                    scenario.id
                );
                return StartOutcome::AlreadyRunning;
            }
            *session = PlaybackSession::running(scenario.id.clone());
        }

        tracing::info!(
            "[SequencePlayer] Session started: scenario '{}' ({} steps)",
            scenario.id,
            scenario.steps.len()
        );
        self.log.publish(PlaybackEvent::PlaybackStarted {
            scenario_id: scenario.id.clone(),
        });

        let log = Arc::clone(&self.log);
        let session = Arc::clone(&self.session);
        tokio::spawn(async move {
            for (index, step) in scenario.steps.iter().enumerate() {
                // Relative delay: the wait is armed only after the previous
                // step's append committed.
                tokio::time::sleep(Duration::from_millis(step.delay_ms)).await;
                log.append(Message::from_step(step)).await;
                session.write().await.cursor = index + 1;
            }

            session.write().await.status = PlaybackStatus::Completed;
            tracing::info!(
                "[SequencePlayer] Session completed: scenario '{}'",
                scenario.id
            );
            log.publish(PlaybackEvent::PlaybackCompleted {
                scenario_id: scenario.id,
            });
        });

        StartOutcome::Started
    }

    /// Returns a snapshot of the current session state.
    pub async fn session(&self) -> PlaybackSession {
        self.session.read().await.clone()
    }

    /// Returns the current lifecycle status.
    pub async fn status(&self) -> PlaybackStatus {
        self.session.read().await.status
    }

    /// Returns the completed session's result artifact.
    ///
    /// # Errors
    ///
    /// Returns `ArtifactNotReady` unless the session status is
    /// `Completed`; a partial or stale artifact is never returned.
    pub async fn completed_artifact(&self) -> Result<ResultArtifact> {
        let session = self.session.read().await;
        if session.status != PlaybackStatus::Completed {
            return Err(RoundtableError::ArtifactNotReady {
                status: session.status.to_string(),
            });
        }

        let scenario_id = session.scenario_id.as_deref().ok_or_else(|| {
            RoundtableError::internal("completed session is missing its scenario id")
        })?;
        Ok(self.registry.get(scenario_id)?.result_artifact.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roundtable_core::conversation::MessageAuthor;
    use roundtable_core::scenario::{FUND_EVAL_SCENARIO_ID, GENERIC_FALLBACK_SCENARIO_ID};

    fn player() -> SequencePlayer {
        SequencePlayer::new(
            Arc::new(ScenarioRegistry::builtin()),
            Arc::new(ConversationLog::new()),
        )
    }

    async fn wait_for_completion(player: &SequencePlayer) {
        let mut events = player.log.subscribe();
        while !matches!(
            events.recv().await.unwrap(),
            PlaybackEvent::PlaybackCompleted { .. }
        ) {}
    }

    #[tokio::test(start_paused = true)]
    async fn test_playback_preserves_step_order() {
        let player = player();
        let scenario = player.registry.get(FUND_EVAL_SCENARIO_ID).unwrap().clone();

        assert_eq!(player.start(FUND_EVAL_SCENARIO_ID).await, StartOutcome::Started);
        wait_for_completion(&player).await;

        let messages = player.log.snapshot().await;
        assert_eq!(messages.len(), scenario.steps.len());
        for (message, step) in messages.iter().zip(&scenario.steps) {
            assert_eq!(message.actor_id, step.actor_id);
            assert_eq!(message.text, step.text);
            assert_eq!(message.author, MessageAuthor::Engine);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_start_is_a_no_op() {
        let player = player();

        assert_eq!(player.start(FUND_EVAL_SCENARIO_ID).await, StartOutcome::Started);

        // Let the first step fire, then try to start again mid-run.
        tokio::time::sleep(Duration::from_millis(700)).await;
        let before = player.session().await;
        assert_eq!(
            player.start(GENERIC_FALLBACK_SCENARIO_ID).await,
            StartOutcome::AlreadyRunning
        );
        let after = player.session().await;

        assert_eq!(before, after);
        assert_eq!(after.scenario_id.as_deref(), Some(FUND_EVAL_SCENARIO_ID));

        wait_for_completion(&player).await;
        let scenario = player.registry.get(FUND_EVAL_SCENARIO_ID).unwrap();
        assert_eq!(player.log.len().await, scenario.steps.len());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cursor_advances_one_step_at_a_time() {
        let player = player();
        player.start(FUND_EVAL_SCENARIO_ID).await;

        assert_eq!(player.session().await.cursor, 0);

        // First step fires at 600ms.
        tokio::time::sleep(Duration::from_millis(700)).await;
        assert_eq!(player.session().await.cursor, 1);
        assert_eq!(player.status().await, PlaybackStatus::Running);

        wait_for_completion(&player).await;
        let session = player.session().await;
        let scenario = player.registry.get(FUND_EVAL_SCENARIO_ID).unwrap();
        assert_eq!(session.cursor, scenario.steps.len());
        assert_eq!(session.status, PlaybackStatus::Completed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_artifact_gated_on_completion() {
        let player = player();

        let err = player.completed_artifact().await.unwrap_err();
        assert!(err.is_artifact_not_ready());

        player.start(FUND_EVAL_SCENARIO_ID).await;
        let err = player.completed_artifact().await.unwrap_err();
        assert!(err.is_artifact_not_ready());
        assert!(err.to_string().contains("running"));

        wait_for_completion(&player).await;
        let artifact = player.completed_artifact().await.unwrap();
        assert_eq!(artifact.kind(), "fund_evaluation");
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_after_completion() {
        let player = player();

        player.start(GENERIC_FALLBACK_SCENARIO_ID).await;
        wait_for_completion(&player).await;
        let first_len = player.log.len().await;

        assert_eq!(player.start(FUND_EVAL_SCENARIO_ID).await, StartOutcome::Started);
        wait_for_completion(&player).await;

        let session = player.session().await;
        assert_eq!(session.scenario_id.as_deref(), Some(FUND_EVAL_SCENARIO_ID));
        assert_eq!(session.status, PlaybackStatus::Completed);
        assert!(player.log.len().await > first_len);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fallback_scenario_plays_through() {
        let player = player();

        player.start(GENERIC_FALLBACK_SCENARIO_ID).await;
        wait_for_completion(&player).await;

        let artifact = player.completed_artifact().await.unwrap();
        assert_eq!(artifact.kind(), "topic_guide");
    }
}
