//! Actor domain module.
//!
//! - `model`: Core actor types (`Actor`, `ActorDirectory`)
//! - `preset`: Builtin committee actors and their stable ids

mod model;
pub mod preset;

pub use model::{Actor, ActorDirectory};
pub use preset::{
    DECISION_ACTOR_ID, FUNDAMENTAL_ACTOR_ID, MODERATOR_ACTOR_ID, OPTIMIZATION_ACTOR_ID,
    RESEARCH_ACTOR_ID, RISK_ACTOR_ID, USER_ACTOR_ID, builtin_actors,
};
