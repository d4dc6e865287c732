//! Deterministic intent routing.
//!
//! Routing is strictly keyword matching, not language understanding: an
//! ordered list of predicates is applied to the input text and the first
//! rule whose keyword set intersects the input wins. Rule order encodes
//! priority among overlapping topics. The router is pure and synchronous;
//! identical input always resolves to the identical scenario id.

use crate::scenario::ScenarioCatalog;

/// One ordered keyword predicate mapping to a scenario id.
#[derive(Debug, Clone)]
struct IntentRule {
    /// Lowercased keywords; a substring hit on any of them fires the rule
    keywords: Vec<String>,
    scenario_id: String,
}

/// Maps free-text input to a scenario id via ordered keyword predicates.
///
/// Matching is case-insensitive substring containment rather than word
/// tokenization so that CJK keywords (which have no word boundaries) work
/// the same as Latin ones.
#[derive(Debug, Clone)]
pub struct IntentRouter {
    rules: Vec<IntentRule>,
    fallback_id: String,
}

impl IntentRouter {
    /// Builds a router from a validated catalog.
    ///
    /// Rules follow catalog scenario order; scenarios without trigger
    /// keywords (the fallback, typically) contribute no rule.
    pub fn from_catalog(catalog: &ScenarioCatalog) -> Self {
        let rules = catalog
            .scenarios
            .iter()
            .filter(|s| !s.trigger_keywords.is_empty())
            .map(|s| IntentRule {
                keywords: s
                    .trigger_keywords
                    .iter()
                    .map(|k| k.to_lowercase())
                    .collect(),
                scenario_id: s.id.clone(),
            })
            .collect();

        Self {
            rules,
            fallback_id: catalog.fallback_scenario.clone(),
        }
    }

    /// Builds a router over the builtin preset catalog.
    pub fn builtin() -> Self {
        Self::from_catalog(&crate::scenario::builtin_catalog())
    }

    /// Resolves input text to a scenario id.
    ///
    /// The first rule with a keyword hit wins; if no rule matches, the
    /// designated fallback id is returned. Never fails.
    pub fn resolve(&self, input: &str) -> &str {
        let normalized = input.to_lowercase();
        for rule in &self.rules {
            if rule.keywords.iter().any(|k| normalized.contains(k)) {
                return &rule.scenario_id;
            }
        }
        &self.fallback_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{
        BATTERY_OUTLOOK_SCENARIO_ID, FUND_EVAL_SCENARIO_ID, GENERIC_FALLBACK_SCENARIO_ID,
    };

    #[test]
    fn test_resolve_is_deterministic() {
        let router = IntentRouter::builtin();
        let input = "请评估一下这只基金";

        assert_eq!(router.resolve(input), FUND_EVAL_SCENARIO_ID);
        assert_eq!(router.resolve(input), FUND_EVAL_SCENARIO_ID);
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let router = IntentRouter::builtin();

        assert_eq!(router.resolve("Tell me about this FUND"), FUND_EVAL_SCENARIO_ID);
        assert_eq!(
            router.resolve("  what about Battery stocks?  "),
            BATTERY_OUTLOOK_SCENARIO_ID
        );
    }

    #[test]
    fn test_resolve_cjk_substrings() {
        let router = IntentRouter::builtin();

        assert_eq!(router.resolve("动力电池行业怎么看"), BATTERY_OUTLOOK_SCENARIO_ID);
    }

    #[test]
    fn test_unmatched_input_falls_back() {
        let router = IntentRouter::builtin();

        assert_eq!(
            router.resolve("what's the weather today"),
            GENERIC_FALLBACK_SCENARIO_ID
        );
    }

    #[test]
    fn test_rule_order_encodes_priority() {
        let router = IntentRouter::builtin();

        // Both keyword sets hit; the earlier catalog entry wins.
        assert_eq!(
            router.resolve("a fund that invests in battery makers"),
            FUND_EVAL_SCENARIO_ID
        );
    }
}
