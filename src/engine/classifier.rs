//! Rule evaluator and the classification entry points.

use tracing::{debug, trace};

use crate::descriptor::{
    AccessDescriptor, DescriptorError, EventDescriptor, RawAccessDescriptor, RawEventDescriptor,
    RawStateDescriptor, StateDescriptor,
};
use crate::engine::recommendation::{Justification, Recommendation};
use crate::engine::rules::{ACCESS_RULES, EVENT_RULES, STATE_RULES};
use crate::engine::rule::RuleSet;

/// Walk `rules` top to bottom against `descriptor`.
///
/// Every consulted rule is recorded. The first rule that answers yes decides;
/// if none does, the fallback decides.
pub fn evaluate<D: 'static>(rules: &RuleSet<D>, descriptor: &D) -> Recommendation {
    let mut trail = Vec::with_capacity(rules.rule_count());

    for (index, rule) in rules.rules.iter().enumerate() {
        let answer = (rule.predicate)(descriptor);
        trace!(kind = %rules.kind, rule = rule.id, answer, "rule consulted");
        trail.push(Justification {
            rank: index + 1,
            rule: rule.id,
            question: rule.question,
            answer,
            contributing: answer,
        });

        if answer {
            let outcome = (rule.decide)(descriptor);
            debug!(kind = %rules.kind, rule = rule.id, strategy = %outcome.strategy, "classified");
            return Recommendation::new(rules.kind, outcome, trail);
        }
    }

    let fallback = &rules.fallback;
    trail.push(Justification {
        rank: rules.rules.len() + 1,
        rule: fallback.id,
        question: fallback.question,
        answer: true,
        contributing: true,
    });
    debug!(kind = %rules.kind, rule = fallback.id, strategy = %fallback.outcome.strategy, "classified by fallback");
    Recommendation::new(rules.kind, fallback.outcome, trail)
}

/// Recommend where a piece of state should live.
pub fn classify_state(descriptor: &StateDescriptor) -> Recommendation {
    evaluate(&STATE_RULES, descriptor)
}

/// Recommend how an event should be dispatched and handled.
pub fn classify_event(descriptor: &EventDescriptor) -> Recommendation {
    evaluate(&EVENT_RULES, descriptor)
}

/// Recommend how a read site should access stored state.
pub fn classify_access(descriptor: &AccessDescriptor) -> Recommendation {
    evaluate(&ACCESS_RULES, descriptor)
}

/// Validate then classify. Fails before any rule is consulted if a field is unset.
pub fn classify_raw_state(raw: RawStateDescriptor) -> Result<Recommendation, DescriptorError> {
    Ok(classify_state(&StateDescriptor::try_from(raw)?))
}

pub fn classify_raw_event(raw: RawEventDescriptor) -> Result<Recommendation, DescriptorError> {
    Ok(classify_event(&EventDescriptor::try_from(raw)?))
}

pub fn classify_raw_access(raw: RawAccessDescriptor) -> Result<Recommendation, DescriptorError> {
    Ok(classify_access(&AccessDescriptor::try_from(raw)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Scope;
    use crate::engine::strategy::Strategy;

    #[test]
    fn trail_stops_at_first_match() {
        let d = StateDescriptor::new(Scope::FewComponents, true, true, false, false);
        let rec = classify_state(&d);
        assert_eq!(rec.rule(), "state.growth");
        assert_eq!(rec.trail().len(), 2);
        assert!(!rec.trail()[0].answer);
        assert!(rec.trail()[1].contributing);
    }

    #[test]
    fn fallback_is_recorded_last() {
        let d = StateDescriptor::new(Scope::FewComponents, false, false, false, false);
        let rec = classify_state(&d);
        assert_eq!(rec.strategy(), Strategy::LocalReducer);
        assert_eq!(rec.trail().len(), 5);
        assert_eq!(rec.trail()[4].rule, "state.fallback");
        assert_eq!(rec.trail()[4].rank, 5);
        assert!(rec.trail()[..4].iter().all(|j| !j.answer && !j.contributing));
    }

    #[test]
    fn exactly_one_contributing_record() {
        for d in [
            EventDescriptor::new(false, false, false),
            EventDescriptor::new(true, false, false),
            EventDescriptor::new(true, true, true),
        ] {
            let rec = classify_event(&d);
            assert!(!rec.trail().is_empty());
            assert_eq!(rec.trail().iter().filter(|j| j.contributing).count(), 1);
        }
    }

    #[test]
    fn raw_with_missing_field_never_classifies() {
        let raw = RawEventDescriptor {
            multiple_consumers: Some(true),
            has_side_effects: Some(true),
            reusable_across_app: None,
        };
        assert!(classify_raw_event(raw).is_err());
    }

    #[test]
    fn decisive_trail_keeps_one_record() {
        let d = AccessDescriptor::new(true, false, false, false);
        let rec = classify_access(&d).into_decisive();
        assert_eq!(rec.trail().len(), 1);
        assert_eq!(rec.trail()[0].rule, "access.shared");
        assert_eq!(rec.trail()[0].rank, 2);
    }
}
