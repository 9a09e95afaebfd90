//! Classification engine: descriptor → recommended strategy + rationale trail.
//!
//! ```text
//! Descriptor → RuleSet (ordered, first match wins) → Recommendation
//! ```
//!
//! Rule tables live in [`rules`] as plain data so the priority order can be
//! read top to bottom and each rule tested on its own. Evaluation holds no
//! state and has no side effects beyond trace logging.

mod classifier;
mod recommendation;
mod rule;
pub mod rules;
mod strategy;

pub use classifier::{
    classify_access, classify_event, classify_raw_access, classify_raw_event, classify_raw_state,
    classify_state, evaluate,
};
pub use recommendation::{Justification, Recommendation};
pub use rule::{Fallback, Outcome, Rule, RuleSet};
pub use strategy::Strategy;
