//! Playback engine facade.
//!
//! `PlaybackEngine` is the boundary the surrounding UI collaborator talks
//! to: it accepts free-text submissions and preset selections, exposes the
//! conversation log and event stream for rendering, and reveals the result
//! artifact after completion.

use crate::player::{SequencePlayer, StartOutcome};
use crate::session::PlaybackSession;
use roundtable_core::actor::{Actor, ActorDirectory};
use roundtable_core::conversation::{ConversationLog, Message};
use roundtable_core::error::{Result, RoundtableError};
use roundtable_core::event::PlaybackEvent;
use roundtable_core::routing::IntentRouter;
use roundtable_core::scenario::{
    ResultArtifact, ScenarioCatalog, ScenarioRegistry, builtin_catalog,
};
use std::sync::Arc;
use tokio::sync::broadcast;

/// Wires the intent router, scenario registry, conversation log, and
/// sequence player behind the two inbound contracts of the engine:
/// [`submit_text`] and [`select_preset`].
///
/// [`submit_text`]: PlaybackEngine::submit_text
/// [`select_preset`]: PlaybackEngine::select_preset
pub struct PlaybackEngine {
    directory: ActorDirectory,
    router: IntentRouter,
    player: SequencePlayer,
    log: Arc<ConversationLog>,
}

impl PlaybackEngine {
    /// Builds an engine from a scenario catalog.
    ///
    /// # Errors
    ///
    /// Returns a `Catalog` error if the catalog fails validation.
    pub fn from_catalog(catalog: ScenarioCatalog) -> Result<Self> {
        let log = Arc::new(ConversationLog::new());
        let registry = Arc::new(ScenarioRegistry::from_catalog(&catalog)?);
        Ok(Self {
            directory: catalog.actor_directory(),
            router: IntentRouter::from_catalog(&catalog),
            player: SequencePlayer::new(registry, Arc::clone(&log)),
            log,
        })
    }

    /// Builds an engine over the builtin demo catalog.
    pub fn builtin() -> Self {
        // The builtin catalog is validated by its own tests; failing here
        // would be a defect in this crate, not a runtime condition.
        Self::from_catalog(builtin_catalog()).expect("builtin catalog validates")
    }

    /// Submits free-text user input.
    ///
    /// Blank or whitespace-only input is rejected before it reaches the
    /// router: no message is appended and no state changes. Otherwise the
    /// user's message is appended to the log immediately (at real
    /// submission time, even mid-playback), the input is routed to a
    /// scenario, and playback is requested.
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` for blank input.
    pub async fn submit_text(&self, text: &str) -> Result<StartOutcome> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            tracing::debug!("[PlaybackEngine] Rejected empty input");
            return Err(RoundtableError::EmptyInput);
        }

        self.log.append(Message::user(trimmed)).await;

        let scenario_id = self.router.resolve(trimmed).to_string();
        tracing::info!("[PlaybackEngine] Routed input to scenario '{}'", scenario_id);
        Ok(self.player.start(&scenario_id).await)
    }

    /// Starts a known scenario directly, bypassing the intent router.
    pub async fn select_preset(&self, scenario_id: &str) -> StartOutcome {
        tracing::info!("[PlaybackEngine] Preset selected: '{}'", scenario_id);
        self.player.start(scenario_id).await
    }

    /// Subscribes to the engine's event stream (message appends and
    /// playback lifecycle transitions).
    pub fn subscribe(&self) -> broadcast::Receiver<PlaybackEvent> {
        self.log.subscribe()
    }

    /// Returns the conversation log shared with the player.
    pub fn log(&self) -> Arc<ConversationLog> {
        Arc::clone(&self.log)
    }

    /// Returns a snapshot of the current playback session state.
    pub async fn session(&self) -> PlaybackSession {
        self.player.session().await
    }

    /// Returns the completed session's result artifact.
    ///
    /// # Errors
    ///
    /// Returns `ArtifactNotReady` unless playback has completed.
    pub async fn completed_artifact(&self) -> Result<ResultArtifact> {
        self.player.completed_artifact().await
    }

    /// Looks up display metadata for an actor id, for rendering.
    ///
    /// # Errors
    ///
    /// Returns `ActorNotFound` for an unknown id.
    pub fn actor(&self, id: &str) -> Result<&Actor> {
        self.directory.get(id)
    }
}
