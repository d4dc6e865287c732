//! Scenario domain model.
//!
//! A scenario is an immutable script: an ordered list of timed steps plus a
//! structured result artifact revealed when the script has fully played.
//! Scenarios are looked up by id from the [`ScenarioRegistry`] and are never
//! constructed at runtime.
//!
//! [`ScenarioRegistry`]: super::registry::ScenarioRegistry

use serde::{Deserialize, Serialize};

/// One scheduled message emission within a scenario.
///
/// `delay_ms` is the wait *after the previous step fires* (or after scenario
/// start for the first step), not an absolute offset from t=0. The player
/// only arms a step's wait once its predecessor has actually been appended,
/// which is what guarantees steps cannot reorder under scheduler jitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioStep {
    /// Actor this step speaks as
    pub actor_id: String,
    /// Relative delay before this step fires, in milliseconds
    pub delay_ms: u64,
    /// Message text emitted when the step fires
    pub text: String,
    /// Optional source citations carried into the emitted message
    #[serde(default)]
    pub citations: Vec<String>,
}

/// One scored dimension within a fund evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    /// Dimension label (e.g., "Performance", "Drawdown control")
    pub name: String,
    /// Score on a 0-100 scale
    pub score: f64,
}

/// The structured result payload revealed after a scenario completes.
///
/// One variant per scenario family; the rendering collaborator switches on
/// the tag to choose a presentation, but the content of each variant is
/// authored here, in the scenario data, not by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultArtifact {
    /// Committee verdict on a specific fund.
    FundEvaluation {
        fund_name: String,
        /// Weighted overall score on a 0-100 scale
        overall_score: f64,
        dimensions: Vec<DimensionScore>,
        recommendation: String,
        summary: String,
    },
    /// Committee outlook on an industry or sector.
    IndustryOutlook {
        industry: String,
        headline: String,
        key_points: Vec<String>,
        outlook: String,
    },
    /// Fallback artifact listing what the committee can discuss.
    TopicGuide {
        supported_topics: Vec<String>,
        note: String,
    },
}

impl ResultArtifact {
    /// Returns the serde tag of this variant (e.g., `"fund_evaluation"`).
    pub fn kind(&self) -> &'static str {
        match self {
            Self::FundEvaluation { .. } => "fund_evaluation",
            Self::IndustryOutlook { .. } => "industry_outlook",
            Self::TopicGuide { .. } => "topic_guide",
        }
    }
}

/// An immutable script of timed steps plus a result artifact, keyed by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Unique scenario identifier
    pub id: String,
    /// Keywords the intent router matches against user input
    #[serde(default)]
    pub trigger_keywords: Vec<String>,
    /// Ordered steps played back when this scenario runs
    pub steps: Vec<ScenarioStep>,
    /// Structured result revealed once the final step has fired
    pub result_artifact: ResultArtifact,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_kind_matches_serde_tag() {
        let artifact = ResultArtifact::TopicGuide {
            supported_topics: vec!["funds".to_string()],
            note: "Ask about a fund or an industry.".to_string(),
        };

        let json = serde_json::to_value(&artifact).unwrap();
        assert_eq!(json["kind"], artifact.kind());
    }

    #[test]
    fn test_step_citations_default_to_empty() {
        let step: ScenarioStep = toml::from_str(
            r#"
            actor_id = "risk"
            delay_ms = 800
            text = "Volatility is within tolerance."
            "#,
        )
        .unwrap();

        assert!(step.citations.is_empty());
    }
}
