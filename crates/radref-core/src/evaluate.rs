//! Ordered rule evaluation.

use std::collections::{BTreeMap, BTreeSet};

use crate::compute::compute_derived;
use crate::error::EvaluationError;
use crate::models::{
    AnswerSet, AppliedModifier, Evaluation, Outcome, Predicate, Rule, RuleOutcome,
    Scheme, Value,
};
use crate::validate::{resolve, validate};

/// Run the scheme's decision table over a complete, valid answer set.
///
/// Rules are tried in declaration order and the first match wins. A rule
/// that reads a derived value which came out undefined is skipped. When the
/// winning rule is an adjustment, it is applied to the first matching
/// absolute rule (the base) and clamped to the adjustment's bounds.
pub fn evaluate(scheme: &Scheme, answers: &AnswerSet) -> Result<Evaluation, EvaluationError> {
    let validation = validate(scheme, answers);
    if !validation.complete {
        return Err(EvaluationError::IncompleteAnswerSet {
            scheme: scheme.key.clone(),
            missing: validation.missing,
            invalid: validation.invalid_fields,
        });
    }

    let mut values = resolve(scheme, answers).values;
    let derived = compute_derived(scheme, &mut values);
    let undefined: BTreeSet<&str> = derived
        .iter()
        .filter(|(_, v)| v.is_none())
        .map(|(k, _)| k.as_str())
        .collect();

    let table = RuleTable {
        scheme,
        values: &values,
        undefined: &undefined,
    };

    let (outcome, modifier) = match table.first_match(|_| true) {
        None => {
            tracing::warn!(scheme = %scheme.key, "no rule matched a complete answer set");
            (Outcome::NoMatch, None)
        }
        Some(rule) => table.resolve_outcome(rule),
    };

    if let Some(rule) = outcome.rule() {
        tracing::debug!(scheme = %scheme.key, rule, "rule matched");
    }

    Ok(Evaluation {
        scheme: scheme.key.clone(),
        outcome,
        modifier,
        derived,
    })
}

struct RuleTable<'a> {
    scheme: &'a Scheme,
    values: &'a BTreeMap<String, Value>,
    undefined: &'a BTreeSet<&'a str>,
}

impl<'a> RuleTable<'a> {
    fn first_match(&self, accept: impl Fn(&Rule) -> bool) -> Option<&'a Rule> {
        self.scheme.rules.iter().filter(|r| accept(*r)).find(|rule| {
            let reads_undefined = rule
                .when
                .references()
                .iter()
                .any(|key| self.undefined.contains(key));
            !reads_undefined && self.holds(&rule.when)
        })
    }

    fn resolve_outcome(&self, rule: &'a Rule) -> (Outcome, Option<AppliedModifier>) {
        match &rule.outcome {
            RuleOutcome::Category { code } => (self.matched(code, &rule.id), None),
            RuleOutcome::Adjust {
                delta,
                floor,
                ceiling,
            } => {
                let Some(base) = self.first_match(|r| !r.is_adjustment()) else {
                    tracing::warn!(
                        scheme = %self.scheme.key,
                        rule = %rule.id,
                        "adjustment matched but no base rule did"
                    );
                    return (Outcome::NoMatch, None);
                };
                let RuleOutcome::Category { code: base_code } = &base.outcome else {
                    return (Outcome::NoMatch, None);
                };
                let adjusted = step_along(&self.scheme.scale, base_code, *delta, floor, ceiling);
                let modifier = AppliedModifier {
                    rule: rule.id.clone(),
                    delta: *delta,
                    from: base_code.clone(),
                    to: adjusted.to_string(),
                };
                (self.matched(adjusted, &base.id), Some(modifier))
            }
        }
    }

    fn matched(&self, code: &str, rule: &str) -> Outcome {
        match self.scheme.category(code) {
            Some(category) => Outcome::Matched {
                category: category.clone(),
                rule: rule.to_string(),
            },
            None => {
                tracing::warn!(scheme = %self.scheme.key, code, "rule yields undeclared category");
                Outcome::NoMatch
            }
        }
    }

    fn holds(&self, predicate: &Predicate) -> bool {
        let number = |key: &String| self.values.get(key).and_then(Value::as_number);
        match predicate {
            Predicate::Always => true,
            Predicate::Equals { key, value } => self.values.get(key) == Some(value),
            Predicate::NotEquals { key, value } => {
                self.values.get(key).is_some_and(|v| v != value)
            }
            Predicate::OneOf { key, values } => {
                self.values.get(key).is_some_and(|v| values.contains(v))
            }
            Predicate::LessThan { key, value } => number(key).is_some_and(|n| n < *value),
            Predicate::AtMost { key, value } => number(key).is_some_and(|n| n <= *value),
            Predicate::GreaterThan { key, value } => number(key).is_some_and(|n| n > *value),
            Predicate::AtLeast { key, value } => number(key).is_some_and(|n| n >= *value),
            Predicate::Within { key, range } => number(key).is_some_and(|n| range.contains(n)),
            Predicate::InBand { key, band } => {
                let Some(n) = number(key) else {
                    return false;
                };
                self.scheme
                    .bands_of(key)
                    .iter()
                    .find(|b| &b.code == band)
                    .is_some_and(|b| b.range.contains(n))
            }
            Predicate::Present { key } => self.values.contains_key(key),
            Predicate::All { of } => of.iter().all(|p| self.holds(p)),
            Predicate::Any { of } => of.iter().any(|p| self.holds(p)),
            Predicate::Not { predicate } => !self.holds(predicate),
            Predicate::CountAtLeast { count, of } => {
                of.iter().filter(|p| self.holds(p)).count() >= *count
            }
        }
    }
}

/// Move `delta` positions from `base` along `scale`, clamped to
/// `[floor, ceiling]`. A base already beyond the bound in the direction of
/// travel, or not on the scale at all, is returned unchanged.
pub fn step_along<'a>(
    scale: &'a [String],
    base: &'a str,
    delta: i32,
    floor: &str,
    ceiling: &str,
) -> &'a str {
    let position = |code: &str| scale.iter().position(|c| c == code);
    let (Some(from), Some(lo), Some(hi)) = (position(base), position(floor), position(ceiling))
    else {
        return base;
    };

    let target = from as i64 + i64::from(delta);
    let clamped = if delta > 0 {
        target.min(hi.max(from) as i64)
    } else {
        target.max(lo.min(from) as i64)
    };
    &scale[clamped as usize]
}

