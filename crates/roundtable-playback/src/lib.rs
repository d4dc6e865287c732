//! Application layer of the Roundtable playback engine.
//!
//! This crate owns the temporal behavior: the `SequencePlayer` state
//! machine that emits scenario steps on schedule, the `PlaybackSession`
//! progress state, and the `PlaybackEngine` facade that the surrounding UI
//! collaborator drives.

pub mod engine;
pub mod player;
pub mod session;

pub use engine::PlaybackEngine;
pub use player::{SequencePlayer, StartOutcome};
pub use session::{PlaybackSession, PlaybackStatus};
