//! Actor domain model.
//!
//! Actors are the committee members that appear to speak during a playback.
//! They are static display metadata, defined once at startup and never
//! mutated; messages reference them by id rather than owning them.

use crate::error::{Result, RoundtableError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A committee participant with display metadata.
///
/// Identity is by stable `id`; the remaining fields exist purely for
/// rendering by the UI collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Stable identifier referenced by messages and scenario steps
    pub id: String,
    /// Display name of the actor
    pub name: String,
    /// Role or title describing the actor's expertise
    pub role: String,
    /// Visual accent used when rendering this actor (e.g., a color token)
    #[serde(default)]
    pub accent: String,
}

/// Read-only lookup table of actors, keyed by id.
///
/// Built once from a catalog (or the builtin presets) and never mutated.
#[derive(Debug, Clone, Default)]
pub struct ActorDirectory {
    actors: HashMap<String, Actor>,
}

impl ActorDirectory {
    /// Builds a directory from a list of actors.
    pub fn new(actors: Vec<Actor>) -> Self {
        Self {
            actors: actors.into_iter().map(|a| (a.id.clone(), a)).collect(),
        }
    }

    /// Looks up an actor by id.
    ///
    /// # Errors
    ///
    /// Returns `ActorNotFound` if no actor with the given id exists.
    pub fn get(&self, id: &str) -> Result<&Actor> {
        self.actors
            .get(id)
            .ok_or_else(|| RoundtableError::actor_not_found(id))
    }

    /// Returns whether an actor with the given id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.actors.contains_key(id)
    }

    /// Returns the number of registered actors.
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    /// Returns whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}
