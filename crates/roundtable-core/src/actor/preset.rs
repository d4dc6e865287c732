//! Builtin actor presets.
//!
//! Provides the default investment-committee actors used by the builtin
//! scenario catalog. Catalogs loaded from configuration may define their
//! own actors instead.

use super::model::Actor;

/// Actor id used for user-authored messages.
pub const USER_ACTOR_ID: &str = "user";

/// Actor id for the committee chair who frames each question.
pub const DECISION_ACTOR_ID: &str = "decision";

/// Actor id for the market research analyst.
pub const RESEARCH_ACTOR_ID: &str = "research";

/// Actor id for the fundamental analyst.
pub const FUNDAMENTAL_ACTOR_ID: &str = "fundamental";

/// Actor id for the risk controller.
pub const RISK_ACTOR_ID: &str = "risk";

/// Actor id for the portfolio optimization analyst.
pub const OPTIMIZATION_ACTOR_ID: &str = "optimization";

/// Actor id for the moderator who closes each discussion.
pub const MODERATOR_ACTOR_ID: &str = "moderator";

/// Returns the builtin committee actors.
///
/// The set includes the six committee members that speak during scripted
/// playbacks plus the `user` actor that user-authored messages reference.
pub fn builtin_actors() -> Vec<Actor> {
    vec![
        Actor {
            id: USER_ACTOR_ID.to_string(),
            name: "You".to_string(),
            role: "Investor".to_string(),
            accent: "neutral".to_string(),
        },
        Actor {
            id: DECISION_ACTOR_ID.to_string(),
            name: "Chen Wei".to_string(),
            role: "Decision Chair".to_string(),
            accent: "indigo".to_string(),
        },
        Actor {
            id: RESEARCH_ACTOR_ID.to_string(),
            name: "Lin Yao".to_string(),
            role: "Market Research Analyst".to_string(),
            accent: "teal".to_string(),
        },
        Actor {
            id: FUNDAMENTAL_ACTOR_ID.to_string(),
            name: "Zhao Ming".to_string(),
            role: "Fundamental Analyst".to_string(),
            accent: "amber".to_string(),
        },
        Actor {
            id: RISK_ACTOR_ID.to_string(),
            name: "Su Qing".to_string(),
            role: "Risk Controller".to_string(),
            accent: "rose".to_string(),
        },
        Actor {
            id: OPTIMIZATION_ACTOR_ID.to_string(),
            name: "Han Lu".to_string(),
            role: "Portfolio Optimization Analyst".to_string(),
            accent: "emerald".to_string(),
        },
        Actor {
            id: MODERATOR_ACTOR_ID.to_string(),
            name: "Fang Jie".to_string(),
            role: "Committee Moderator".to_string(),
            accent: "slate".to_string(),
        },
    ]
}
