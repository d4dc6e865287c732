//! Scenario registry: read-only scenario lookup.

use crate::error::{Result, RoundtableError};
use crate::scenario::catalog::ScenarioCatalog;
use crate::scenario::model::Scenario;
use crate::scenario::preset::builtin_catalog;
use std::collections::HashMap;

/// Immutable catalog of scenarios, keyed by id.
///
/// The catalog is validated on construction and the registry is read-only
/// afterwards; there is no mutation API. The intent router only produces
/// ids present here, so a failed lookup indicates a programming defect in
/// the caller rather than a user-facing condition.
#[derive(Debug, Clone)]
pub struct ScenarioRegistry {
    scenarios: HashMap<String, Scenario>,
    fallback_id: String,
}

impl ScenarioRegistry {
    /// Builds a registry from a catalog, validating it first.
    ///
    /// # Errors
    ///
    /// Returns a `Catalog` error if the catalog fails validation (see
    /// [`ScenarioCatalog::validate`]).
    pub fn from_catalog(catalog: &ScenarioCatalog) -> Result<Self> {
        catalog.validate()?;
        Ok(Self {
            scenarios: catalog
                .scenarios
                .iter()
                .map(|s| (s.id.clone(), s.clone()))
                .collect(),
            fallback_id: catalog.fallback_scenario.clone(),
        })
    }

    /// Builds a registry from the builtin preset catalog.
    pub fn builtin() -> Self {
        // The builtin catalog is covered by its own validation test; a
        // failure here is a defect in this crate.
        Self::from_catalog(&builtin_catalog()).expect("builtin catalog validates")
    }

    /// Looks up a scenario by id.
    ///
    /// # Errors
    ///
    /// Returns `ScenarioNotFound` if no scenario with the given id exists.
    pub fn get(&self, id: &str) -> Result<&Scenario> {
        self.scenarios
            .get(id)
            .ok_or_else(|| RoundtableError::scenario_not_found(id))
    }

    /// Returns whether a scenario with the given id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.scenarios.contains_key(id)
    }

    /// Returns the designated fallback scenario.
    ///
    /// Construction validates the catalog, so on any registry the
    /// fallback id resolves and this never fails.
    pub fn fallback(&self) -> &Scenario {
        self.scenarios
            .get(&self.fallback_id)
            .expect("catalog validation guarantees the fallback scenario exists")
    }

    /// Returns the fallback scenario id.
    pub fn fallback_id(&self) -> &str {
        &self.fallback_id
    }
}
