//! Rule definitions: the data the classifier walks.

use crate::descriptor::DescriptorKind;
use crate::engine::strategy::Strategy;

/// What a matching rule recommends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub strategy: Strategy,
    /// Strategy applied alongside the primary one (e.g. slice + middleware).
    pub companion: Option<Strategy>,
}

impl Outcome {
    pub const fn single(strategy: Strategy) -> Self {
        Self {
            strategy,
            companion: None,
        }
    }

    pub const fn with(strategy: Strategy, companion: Strategy) -> Self {
        Self {
            strategy,
            companion: Some(companion),
        }
    }
}

/// A single question in an ordered decision list.
pub struct Rule<D> {
    /// Stable identifier (e.g. "state.growth").
    pub id: &'static str,
    /// Question asked of the descriptor, phrased for the rationale trail.
    pub question: &'static str,
    /// Answer to the question. A `true` answer decides the classification.
    pub predicate: fn(&D) -> bool,
    /// Recommendation produced when the predicate holds.
    pub decide: fn(&D) -> Outcome,
}

/// Terminal rule consulted when nothing earlier matched.
pub struct Fallback {
    pub id: &'static str,
    pub question: &'static str,
    pub outcome: Outcome,
}

/// An ordered rule list with its unconditional fallback.
///
/// The fallback makes evaluation total: every descriptor gets a recommendation.
pub struct RuleSet<D: 'static> {
    pub kind: DescriptorKind,
    pub rules: &'static [Rule<D>],
    pub fallback: Fallback,
}

impl<D: 'static> RuleSet<D> {
    /// Number of rules including the fallback.
    pub fn rule_count(&self) -> usize {
        self.rules.len() + 1
    }

    /// Ids in priority order, fallback last.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules
            .iter()
            .map(|r| r.id)
            .chain(std::iter::once(self.fallback.id))
    }

    /// Questions in priority order, paired with their rule id.
    pub fn questions(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.rules
            .iter()
            .map(|r| (r.id, r.question))
            .chain(std::iter::once((self.fallback.id, self.fallback.question)))
    }
}
