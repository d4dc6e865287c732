//! Scenario domain module.
//!
//! - `model`: Core scenario types (`Scenario`, `ScenarioStep`, `ResultArtifact`)
//! - `catalog`: Deserializable configuration surface (`ScenarioCatalog`)
//! - `registry`: Read-only scenario lookup (`ScenarioRegistry`)
//! - `preset`: Builtin demo catalog and its scenario ids

pub mod catalog;
mod model;
pub mod preset;
mod registry;

pub use catalog::ScenarioCatalog;
pub use model::{DimensionScore, ResultArtifact, Scenario, ScenarioStep};
pub use preset::{
    BATTERY_OUTLOOK_SCENARIO_ID, FUND_EVAL_SCENARIO_ID, GENERIC_FALLBACK_SCENARIO_ID,
    builtin_catalog,
};
pub use registry::ScenarioRegistry;
