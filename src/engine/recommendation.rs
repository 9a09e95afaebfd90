use serde::Serialize;

use crate::descriptor::DescriptorKind;
use crate::engine::rule::Outcome;
use crate::engine::strategy::Strategy;

/// One consulted rule in the rationale trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Justification {
    /// 1-based position of the rule in its table.
    pub rank: usize,
    pub rule: &'static str,
    pub question: &'static str,
    pub answer: bool,
    /// True for the rule that decided the recommendation.
    pub contributing: bool,
}

/// Engine output: the recommended strategy and how it was reached.
///
/// The trail is never empty and holds exactly one contributing record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    kind: DescriptorKind,
    strategy: Strategy,
    #[serde(skip_serializing_if = "Option::is_none")]
    companion: Option<Strategy>,
    rule: &'static str,
    trail: Vec<Justification>,
}

impl Recommendation {
    /// Build from a decided outcome; `trail` must end with the deciding record.
    pub(crate) fn new(kind: DescriptorKind, outcome: Outcome, trail: Vec<Justification>) -> Self {
        let rule = trail.last().map(|j| j.rule).unwrap_or_default();
        Self {
            kind,
            strategy: outcome.strategy,
            companion: outcome.companion,
            rule,
            trail,
        }
    }

    pub fn kind(&self) -> DescriptorKind {
        self.kind
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn companion(&self) -> Option<Strategy> {
        self.companion
    }

    /// Primary strategy followed by the companion, if any.
    pub fn strategies(&self) -> impl Iterator<Item = Strategy> + '_ {
        std::iter::once(self.strategy).chain(self.companion)
    }

    /// Id of the deciding rule.
    pub fn rule(&self) -> &'static str {
        self.rule
    }

    pub fn trail(&self) -> &[Justification] {
        &self.trail
    }

    /// The record of the deciding rule.
    pub fn decisive(&self) -> Option<&Justification> {
        self.trail.iter().find(|j| j.contributing)
    }

    /// Whether acting on this recommendation means dispatching an action object.
    pub fn needs_action_object(&self) -> bool {
        self.strategies().any(Strategy::needs_action_object)
    }

    /// Drop every record except the deciding one.
    pub fn into_decisive(mut self) -> Self {
        self.trail.retain(|j| j.contributing);
        self
    }
}
