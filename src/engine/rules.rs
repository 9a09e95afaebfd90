//! Rule tables: single source of truth for classification order.
//!
//! Each table is read top to bottom; the first rule whose predicate holds
//! decides and later rules are never consulted. Precedence among overlapping
//! heuristics (e.g. growth vs. cross-feature reuse) is fixed by position.

use crate::descriptor::{AccessDescriptor, DescriptorKind, EventDescriptor, Scope, StateDescriptor};
use crate::engine::rule::{Fallback, Outcome, Rule, RuleSet};
use crate::engine::strategy::Strategy;

/// Where a piece of state should live.
pub static STATE_RULES: RuleSet<StateDescriptor> = RuleSet {
    kind: DescriptorKind::State,
    rules: &[
        Rule {
            id: "state.global-scope",
            question: "Is the state app-wide or reused across features?",
            predicate: |d| d.scope() == Scope::AppWide || d.reused_across_features(),
            decide: |_| Outcome::single(Strategy::GlobalSlice),
        },
        Rule {
            id: "state.growth",
            question: "Is the state expected to grow in complexity?",
            predicate: |d| d.growth_expectation(),
            decide: |_| Outcome::single(Strategy::GlobalSlice),
        },
        Rule {
            id: "state.shared-async",
            question: "Is the state loaded asynchronously and shared beyond one component?",
            predicate: |d| d.involves_async() && d.scope() != Scope::SingleComponent,
            decide: |_| Outcome::with(Strategy::GlobalSlice, Strategy::Middleware),
        },
        Rule {
            id: "state.local",
            question: "Is the state confined to a single component with no expected growth?",
            predicate: |d| d.scope() == Scope::SingleComponent && !d.growth_expectation(),
            decide: |_| Outcome::single(Strategy::LocalState),
        },
    ],
    fallback: Fallback {
        id: "state.fallback",
        question: "No earlier rule matched; is a local reducer enough?",
        outcome: Outcome::single(Strategy::LocalReducer),
    },
};

/// Whether an event needs an action object, and of what kind.
pub static EVENT_RULES: RuleSet<EventDescriptor> = RuleSet {
    kind: DescriptorKind::Event,
    rules: &[
        Rule {
            id: "event.side-effects",
            question: "Does handling the event have side effects?",
            predicate: |d| d.has_side_effects(),
            decide: |_| Outcome::single(Strategy::Middleware),
        },
        Rule {
            id: "event.shared",
            question: "Is the event consumed in several places or reusable across the app?",
            predicate: |d| d.multiple_consumers() || d.reusable_across_app(),
            // App-wide reuse makes it a global action; otherwise it stays within the feature.
            decide: |d| {
                if d.reusable_across_app() {
                    Outcome::single(Strategy::GlobalAction)
                } else {
                    Outcome::single(Strategy::SharedAction)
                }
            },
        },
    ],
    fallback: Fallback {
        id: "event.fallback",
        question: "No earlier rule matched; can the event be handled in place?",
        outcome: Outcome::single(Strategy::LocalHandling),
    },
};

/// How a read site should reach stored state.
pub static ACCESS_RULES: RuleSet<AccessDescriptor> = RuleSet {
    kind: DescriptorKind::Access,
    rules: &[
        Rule {
            id: "access.derived",
            question: "Does the read compute a value, reach into nested data, or depend on a shape that may change?",
            predicate: |d| d.requires_computation() || d.is_deeply_nested() || d.shape_may_change(),
            decide: |_| Outcome::single(Strategy::Selector),
        },
        Rule {
            id: "access.shared",
            question: "Is the value read from multiple components?",
            predicate: |d| d.accessed_from_multiple_components(),
            decide: |_| Outcome::single(Strategy::Selector),
        },
    ],
    fallback: Fallback {
        id: "access.fallback",
        question: "No earlier rule matched; is a direct read enough?",
        outcome: Outcome::single(Strategy::DirectAccess),
    },
};
