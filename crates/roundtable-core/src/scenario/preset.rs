//! Builtin scenario catalog.
//!
//! The default demo content: a simulated investment committee that can
//! evaluate a fund, give an industry outlook on power batteries, or explain
//! what it supports. Deployments that want different content load their own
//! catalog from TOML instead (see [`ScenarioCatalog`]).
//!
//! [`ScenarioCatalog`]: super::catalog::ScenarioCatalog

use crate::actor::preset::{
    DECISION_ACTOR_ID, FUNDAMENTAL_ACTOR_ID, MODERATOR_ACTOR_ID, OPTIMIZATION_ACTOR_ID,
    RESEARCH_ACTOR_ID, RISK_ACTOR_ID, builtin_actors,
};
use crate::scenario::catalog::ScenarioCatalog;
use crate::scenario::model::{DimensionScore, ResultArtifact, Scenario, ScenarioStep};

/// Id of the builtin fund evaluation scenario.
pub const FUND_EVAL_SCENARIO_ID: &str = "fund_eval";

/// Id of the builtin power-battery industry outlook scenario.
pub const BATTERY_OUTLOOK_SCENARIO_ID: &str = "battery_outlook";

/// Id of the builtin fallback scenario played when no keyword matches.
pub const GENERIC_FALLBACK_SCENARIO_ID: &str = "generic_fallback";

fn step(actor_id: &str, delay_ms: u64, text: &str) -> ScenarioStep {
    ScenarioStep {
        actor_id: actor_id.to_string(),
        delay_ms,
        text: text.to_string(),
        citations: Vec::new(),
    }
}

fn cited_step(actor_id: &str, delay_ms: u64, text: &str, citations: &[&str]) -> ScenarioStep {
    ScenarioStep {
        citations: citations.iter().map(|c| c.to_string()).collect(),
        ..step(actor_id, delay_ms, text)
    }
}

fn fund_eval_scenario() -> Scenario {
    Scenario {
        id: FUND_EVAL_SCENARIO_ID.to_string(),
        trigger_keywords: ["基金", "fund", "净值", "持仓"]
            .iter()
            .map(|k| k.to_string())
            .collect(),
        steps: vec![
            step(
                DECISION_ACTOR_ID,
                600,
                "Let's convene on this fund. I want a full pass: market backdrop, \
                 fundamentals, risk, and allocation fit before we issue a verdict.",
            ),
            cited_step(
                RESEARCH_ACTOR_ID,
                1400,
                "Market context first: the fund's sector tilt has been in favor for \
                 two quarters, and peer flows turned positive in the latest data.",
                &["Quarterly sector flow report", "Peer group NAV series"],
            ),
            cited_step(
                FUNDAMENTAL_ACTOR_ID,
                1600,
                "Fundamentals are solid. Three-year annualized return sits in the top \
                 quartile, and the manager's turnover discipline has held through the \
                 style rotation.",
                &["Fund annual report", "Manager track record database"],
            ),
            step(
                RISK_ACTOR_ID,
                1500,
                "Risk view: maximum drawdown stayed under 18% in the last downturn and \
                 current volatility is within our tolerance band. Concentration in the \
                 top ten holdings is the one flag worth watching.",
            ),
            step(
                OPTIMIZATION_ACTOR_ID,
                1400,
                "From an allocation angle this fund complements the existing holdings; \
                 a 5-8% position improves the portfolio's risk-adjusted return without \
                 breaching sector caps.",
            ),
            step(
                MODERATOR_ACTOR_ID,
                1200,
                "Summary: the committee leans positive. Strong fundamentals, \
                 acceptable risk, clear allocation fit. Full scorecard to follow.",
            ),
        ],
        result_artifact: ResultArtifact::FundEvaluation {
            fund_name: "Harvest Growth Select Mixed Fund".to_string(),
            overall_score: 86.5,
            dimensions: vec![
                DimensionScore {
                    name: "Performance".to_string(),
                    score: 91.0,
                },
                DimensionScore {
                    name: "Drawdown control".to_string(),
                    score: 84.0,
                },
                DimensionScore {
                    name: "Manager stability".to_string(),
                    score: 88.0,
                },
                DimensionScore {
                    name: "Fee level".to_string(),
                    score: 79.0,
                },
                DimensionScore {
                    name: "Portfolio fit".to_string(),
                    score: 90.0,
                },
            ],
            recommendation: "Accumulate: 5-8% target position".to_string(),
            summary: "Top-quartile track record with controlled drawdowns; watch \
                      top-ten holding concentration."
                .to_string(),
        },
    }
}

fn battery_outlook_scenario() -> Scenario {
    Scenario {
        id: BATTERY_OUTLOOK_SCENARIO_ID.to_string(),
        trigger_keywords: ["电池", "battery", "锂", "lithium", "新能源"]
            .iter()
            .map(|k| k.to_string())
            .collect(),
        steps: vec![
            step(
                DECISION_ACTOR_ID,
                600,
                "Topic is the power battery chain. Research leads, then I want the \
                 bull and bear cases side by side.",
            ),
            cited_step(
                RESEARCH_ACTOR_ID,
                1500,
                "Demand side: EV penetration keeps climbing and storage deployments \
                 doubled year over year, but cell prices are still falling on \
                 capacity overhang.",
                &["Monthly EV registration data", "Cell price index"],
            ),
            step(
                FUNDAMENTAL_ACTOR_ID,
                1600,
                "Margins diverge sharply across the chain: leading cell makers are \
                 defending theirs through scale, while second-tier players are \
                 underwater at current prices.",
            ),
            step(
                RISK_ACTOR_ID,
                1400,
                "Key risks: further capacity additions, lithium price swings, and \
                 policy changes in export markets. Position sizing should assume \
                 another price-war leg.",
            ),
            step(
                MODERATOR_ACTOR_ID,
                1200,
                "Netting it out: structurally positive on leaders, cautious on the \
                 long tail. Outlook summary to follow.",
            ),
        ],
        result_artifact: ResultArtifact::IndustryOutlook {
            industry: "Power batteries".to_string(),
            headline: "Consolidation favors the leaders".to_string(),
            key_points: vec![
                "EV and storage demand remain the twin growth engines".to_string(),
                "Capacity overhang keeps pressure on cell prices into next year".to_string(),
                "Cost curve separates top-tier makers from the long tail".to_string(),
                "Lithium input costs have stabilized at a lower plateau".to_string(),
            ],
            outlook: "Overweight leading cell makers; underweight undifferentiated \
                      second-tier capacity."
                .to_string(),
        },
    }
}

fn generic_fallback_scenario() -> Scenario {
    Scenario {
        id: GENERIC_FALLBACK_SCENARIO_ID.to_string(),
        // Never routed by keyword; reached only when nothing else matches.
        trigger_keywords: Vec::new(),
        steps: vec![
            step(
                MODERATOR_ACTOR_ID,
                500,
                "That topic is outside what this committee currently covers.",
            ),
            step(
                MODERATOR_ACTOR_ID,
                1100,
                "You can ask about evaluating a fund (e.g., mention a fund or 基金) \
                 or about the power battery industry (e.g., battery, 电池).",
            ),
        ],
        result_artifact: ResultArtifact::TopicGuide {
            supported_topics: vec![
                "Fund evaluation".to_string(),
                "Power battery industry outlook".to_string(),
            ],
            note: "Mention a supported topic keyword to start a committee session.".to_string(),
        },
    }
}

/// Returns the builtin demo catalog.
///
/// Scenario order doubles as router priority; the fallback scenario is last
/// and carries no keywords.
pub fn builtin_catalog() -> ScenarioCatalog {
    ScenarioCatalog {
        fallback_scenario: GENERIC_FALLBACK_SCENARIO_ID.to_string(),
        actors: builtin_actors(),
        scenarios: vec![
            fund_eval_scenario(),
            battery_outlook_scenario(),
            generic_fallback_scenario(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::preset::{
        DECISION_ACTOR_ID, FUNDAMENTAL_ACTOR_ID, MODERATOR_ACTOR_ID, OPTIMIZATION_ACTOR_ID,
        RESEARCH_ACTOR_ID, RISK_ACTOR_ID,
    };

    #[test]
    fn test_builtin_catalog_validates() {
        builtin_catalog().validate().unwrap();
    }

    #[test]
    fn test_fund_eval_actor_sequence() {
        let scenario = fund_eval_scenario();
        let actors: Vec<&str> = scenario.steps.iter().map(|s| s.actor_id.as_str()).collect();

        assert_eq!(
            actors,
            vec![
                DECISION_ACTOR_ID,
                RESEARCH_ACTOR_ID,
                FUNDAMENTAL_ACTOR_ID,
                RISK_ACTOR_ID,
                OPTIMIZATION_ACTOR_ID,
                MODERATOR_ACTOR_ID,
            ]
        );
    }

    #[test]
    fn test_fallback_has_no_keywords() {
        assert!(generic_fallback_scenario().trigger_keywords.is_empty());
    }
}
