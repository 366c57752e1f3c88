use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::interval::Interval;
use super::value::Value;

/// Condition over the (derived-augmented) answer set.
///
/// Comparisons against an absent key are false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "op", rename_all = "snake_case")]
#[ts(export)]
pub enum Predicate {
    Always,
    Equals { key: String, value: Value },
    NotEquals { key: String, value: Value },
    OneOf { key: String, values: Vec<Value> },
    LessThan { key: String, value: f64 },
    AtMost { key: String, value: f64 },
    GreaterThan { key: String, value: f64 },
    AtLeast { key: String, value: f64 },
    Within { key: String, range: Interval },
    InBand { key: String, band: String },
    Present { key: String },
    All { of: Vec<Predicate> },
    Any { of: Vec<Predicate> },
    Not { predicate: Box<Predicate> },
    /// At least `count` of the sub-predicates hold.
    CountAtLeast { count: usize, of: Vec<Predicate> },
}

impl Predicate {
    /// Every answer or derived key this predicate reads.
    pub fn references(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_references(&mut out);
        out
    }

    fn collect_references<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Predicate::Always => {}
            Predicate::Equals { key, .. }
            | Predicate::NotEquals { key, .. }
            | Predicate::OneOf { key, .. }
            | Predicate::LessThan { key, .. }
            | Predicate::AtMost { key, .. }
            | Predicate::GreaterThan { key, .. }
            | Predicate::AtLeast { key, .. }
            | Predicate::Within { key, .. }
            | Predicate::InBand { key, .. }
            | Predicate::Present { key } => out.push(key),
            Predicate::All { of } | Predicate::Any { of } | Predicate::CountAtLeast { of, .. } => {
                for p in of {
                    p.collect_references(out);
                }
            }
            Predicate::Not { predicate } => predicate.collect_references(out),
        }
    }
}

/// Predicate constructors used by the scheme tables.
pub mod when {
    use super::{Interval, Predicate, Value};

    pub fn always() -> Predicate {
        Predicate::Always
    }

    pub fn eq(key: &str, value: impl Into<Value>) -> Predicate {
        Predicate::Equals {
            key: key.to_string(),
            value: value.into(),
        }
    }

    pub fn ne(key: &str, value: impl Into<Value>) -> Predicate {
        Predicate::NotEquals {
            key: key.to_string(),
            value: value.into(),
        }
    }

    pub fn one_of(key: &str, values: &[&str]) -> Predicate {
        Predicate::OneOf {
            key: key.to_string(),
            values: values.iter().map(|v| Value::from(*v)).collect(),
        }
    }

    pub fn yes(key: &str) -> Predicate {
        eq(key, "yes")
    }

    pub fn lt(key: &str, value: f64) -> Predicate {
        Predicate::LessThan {
            key: key.to_string(),
            value,
        }
    }

    pub fn le(key: &str, value: f64) -> Predicate {
        Predicate::AtMost {
            key: key.to_string(),
            value,
        }
    }

    pub fn gt(key: &str, value: f64) -> Predicate {
        Predicate::GreaterThan {
            key: key.to_string(),
            value,
        }
    }

    pub fn ge(key: &str, value: f64) -> Predicate {
        Predicate::AtLeast {
            key: key.to_string(),
            value,
        }
    }

    pub fn within(key: &str, range: Interval) -> Predicate {
        Predicate::Within {
            key: key.to_string(),
            range,
        }
    }

    pub fn band(key: &str, band: &str) -> Predicate {
        Predicate::InBand {
            key: key.to_string(),
            band: band.to_string(),
        }
    }

    pub fn present(key: &str) -> Predicate {
        Predicate::Present {
            key: key.to_string(),
        }
    }

    pub fn all(of: impl IntoIterator<Item = Predicate>) -> Predicate {
        Predicate::All {
            of: of.into_iter().collect(),
        }
    }

    pub fn any(of: impl IntoIterator<Item = Predicate>) -> Predicate {
        Predicate::Any {
            of: of.into_iter().collect(),
        }
    }

    pub fn not(predicate: Predicate) -> Predicate {
        Predicate::Not {
            predicate: Box::new(predicate),
        }
    }

    pub fn count_at_least(count: usize, of: impl IntoIterator<Item = Predicate>) -> Predicate {
        Predicate::CountAtLeast {
            count,
            of: of.into_iter().collect(),
        }
    }
}

/// What a matching rule produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum RuleOutcome {
    Category {
        code: String,
    },
    /// Step the base category `delta` positions along the scheme scale,
    /// never past `floor` or `ceiling`.
    Adjust {
        delta: i32,
        floor: String,
        ceiling: String,
    },
}

/// One row of a scheme's ordered decision table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rule {
    pub id: String,
    pub when: Predicate,
    pub outcome: RuleOutcome,
}

impl Rule {
    pub fn new(id: &str, when: Predicate, category: &str) -> Self {
        Self {
            id: id.to_string(),
            when,
            outcome: RuleOutcome::Category {
                code: category.to_string(),
            },
        }
    }

    pub fn adjust(id: &str, when: Predicate, delta: i32, floor: &str, ceiling: &str) -> Self {
        Self {
            id: id.to_string(),
            when,
            outcome: RuleOutcome::Adjust {
                delta,
                floor: floor.to_string(),
                ceiling: ceiling.to_string(),
            },
        }
    }

    pub fn is_adjustment(&self) -> bool {
        matches!(self.outcome, RuleOutcome::Adjust { .. })
    }
}
