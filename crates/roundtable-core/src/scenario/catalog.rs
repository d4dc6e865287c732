//! Scenario catalog: the configuration surface of the engine.
//!
//! A catalog bundles the actors, scenarios, and fallback designation that a
//! deployment plays back. Swapping this data is the only supported
//! customization point; there is no dynamic scenario authoring API.
//!
//! Catalogs deserialize from TOML and are validated before use so that
//! routing and playback can assume every referenced id resolves.

use crate::actor::{Actor, ActorDirectory};
use crate::error::{Result, RoundtableError};
use crate::scenario::model::Scenario;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Static configuration data for one deployment of the engine.
///
/// Scenario order is significant: it is the priority order the intent
/// router applies when keyword sets of different scenarios overlap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioCatalog {
    /// Id of the scenario played when no keyword predicate matches
    pub fallback_scenario: String,
    /// Actors available to scenario steps
    #[serde(default)]
    pub actors: Vec<Actor>,
    /// Scenarios in router priority order
    pub scenarios: Vec<Scenario>,
}

impl ScenarioCatalog {
    /// Parses and validates a catalog from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns a `Serialization` error if the document does not parse, or a
    /// `Catalog` error if validation fails (see [`validate`]).
    ///
    /// [`validate`]: ScenarioCatalog::validate
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let catalog: Self = toml::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Loads and validates a catalog from a TOML file on disk.
    ///
    /// # Errors
    ///
    /// Returns an `Io` error if the file cannot be read, plus everything
    /// [`from_toml_str`] can return.
    ///
    /// [`from_toml_str`]: ScenarioCatalog::from_toml_str
    pub fn from_toml_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Validates internal consistency of the catalog.
    ///
    /// Checks, in order:
    /// - scenario ids are unique
    /// - every scenario has at least one step
    /// - no trigger keyword is empty or whitespace-only
    /// - every step references a defined actor
    /// - the designated fallback scenario exists
    ///
    /// # Errors
    ///
    /// Returns a `Catalog` error naming the first violation found.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for scenario in &self.scenarios {
            if !seen.insert(scenario.id.as_str()) {
                return Err(RoundtableError::catalog(format!(
                    "duplicate scenario id '{}'",
                    scenario.id
                )));
            }
            if scenario.steps.is_empty() {
                return Err(RoundtableError::catalog(format!(
                    "scenario '{}' has no steps",
                    scenario.id
                )));
            }
            // An empty keyword would substring-match every input and
            // shadow the fallback and all later rules.
            if scenario.trigger_keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(RoundtableError::catalog(format!(
                    "scenario '{}' has an empty trigger keyword",
                    scenario.id
                )));
            }
        }

        let directory = self.actor_directory();
        for scenario in &self.scenarios {
            for step in &scenario.steps {
                if !directory.contains(&step.actor_id) {
                    return Err(RoundtableError::catalog(format!(
                        "scenario '{}' references undefined actor '{}'",
                        scenario.id, step.actor_id
                    )));
                }
            }
        }

        if !seen.contains(self.fallback_scenario.as_str()) {
            return Err(RoundtableError::catalog(format!(
                "fallback scenario '{}' is not defined",
                self.fallback_scenario
            )));
        }

        Ok(())
    }

    /// Builds an actor directory from the catalog's actors.
    pub fn actor_directory(&self) -> ActorDirectory {
        ActorDirectory::new(self.actors.clone())
    }
}
