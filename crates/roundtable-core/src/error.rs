//! Error types for the Roundtable playback engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the Roundtable engine.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum RoundtableError {
    /// A scenario id was looked up that is not present in the registry.
    ///
    /// The intent router only ever produces registered ids, so seeing this
    /// at runtime indicates a programming defect in the caller.
    #[error("Scenario not found: '{id}'")]
    ScenarioNotFound { id: String },

    /// An actor id was referenced that is not present in the directory.
    #[error("Actor not found: '{id}'")]
    ActorNotFound { id: String },

    /// User input was blank or whitespace-only and was rejected before
    /// reaching the intent router.
    #[error("Input was empty or whitespace-only")]
    EmptyInput,

    /// The result artifact was requested before the session completed.
    #[error("Result artifact not ready: playback is {status}")]
    ArtifactNotReady { status: String },

    /// A scenario catalog failed validation.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// IO error (catalog file loading)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RoundtableError {
    /// Creates a ScenarioNotFound error
    pub fn scenario_not_found(id: impl Into<String>) -> Self {
        Self::ScenarioNotFound { id: id.into() }
    }

    /// Creates an ActorNotFound error
    pub fn actor_not_found(id: impl Into<String>) -> Self {
        Self::ActorNotFound { id: id.into() }
    }

    /// Creates a Catalog error
    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a ScenarioNotFound error
    pub fn is_scenario_not_found(&self) -> bool {
        matches!(self, Self::ScenarioNotFound { .. })
    }

    /// Check if this is an ArtifactNotReady error
    pub fn is_artifact_not_ready(&self) -> bool {
        matches!(self, Self::ArtifactNotReady { .. })
    }

    /// Check if this is an EmptyInput error
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput)
    }
}

impl From<std::io::Error> for RoundtableError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for RoundtableError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for RoundtableError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, RoundtableError>`.
pub type Result<T> = std::result::Result<T, RoundtableError>;
