//! Domain layer of the Roundtable playback engine.
//!
//! A Roundtable deployment drives a simulated committee of actors through a
//! predefined, timed sequence of messages in response to a free-text
//! trigger, then reveals a structured result artifact once the sequence
//! completes. This crate holds the pure domain: actors, messages, the
//! append-only conversation log, scenarios and their registry, intent
//! routing, and the shared error type. The state machine that performs the
//! timed playback lives in `roundtable-playback`.

pub mod actor;
pub mod conversation;
pub mod error;
pub mod event;
pub mod routing;
pub mod scenario;

// Re-export common error type
pub use error::RoundtableError;
