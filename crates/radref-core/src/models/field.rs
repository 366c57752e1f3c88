use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::interval::Interval;
use super::value::Value;

/// One enumerated answer option: stored code plus report label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Choice {
    pub code: String,
    pub label: String,
}

/// A named sub-range of a numeric field or derived value (e.g. "< 6 mm").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Band {
    pub code: String,
    pub label: String,
    pub range: Interval,
}

impl Band {
    pub fn new(code: &str, label: &str, range: Interval) -> Self {
        Self {
            code: code.to_string(),
            label: label.to_string(),
            range,
        }
    }
}

/// The set of values a field accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum FieldDomain {
    Choice {
        options: Vec<Choice>,
    },
    Numeric {
        range: Interval,
        step: Option<f64>,
        bands: Vec<Band>,
    },
}

impl FieldDomain {
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (FieldDomain::Choice { options }, Value::Code(code)) => {
                options.iter().any(|o| &o.code == code)
            }
            (FieldDomain::Numeric { range, step, .. }, Value::Number(n)) => {
                if !n.is_finite() || !range.contains(*n) {
                    return false;
                }
                match step {
                    Some(step) => {
                        let origin = range.lower.map(|b| b.value).unwrap_or(0.0);
                        let remainder = (n - origin).rem_euclid(*step);
                        // Allow floating point tolerance
                        remainder < 1e-9 || (step - remainder) < 1e-9
                    }
                    None => true,
                }
            }
            _ => false,
        }
    }

    /// Human label for a stored code, if this is a choice domain.
    pub fn label_of(&self, code: &str) -> Option<&str> {
        match self {
            FieldDomain::Choice { options } => options
                .iter()
                .find(|o| o.code == code)
                .map(|o| o.label.as_str()),
            FieldDomain::Numeric { .. } => None,
        }
    }

    pub fn bands(&self) -> &[Band] {
        match self {
            FieldDomain::Numeric { bands, .. } => bands,
            FieldDomain::Choice { .. } => &[],
        }
    }
}

/// Condition on another field's value that makes a field relevant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum Trigger {
    Equals(Value),
    NotEquals(Value),
    OneOf(Vec<Value>),
}

impl Trigger {
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Trigger::Equals(v) => v == value,
            Trigger::NotEquals(v) => v != value,
            Trigger::OneOf(vs) => vs.contains(value),
        }
    }

    pub fn values(&self) -> Vec<&Value> {
        match self {
            Trigger::Equals(v) | Trigger::NotEquals(v) => vec![v],
            Trigger::OneOf(vs) => vs.iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Dependency {
    pub field: String,
    pub trigger: Trigger,
}

/// One input of a scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Field {
    pub key: String,
    pub label: String,
    pub domain: FieldDomain,
    pub depends_on: Option<Dependency>,
    pub default: Option<Value>,
    pub required: bool,
    pub unit: Option<String>,
}

impl Field {
    /// An enumerated field from `(code, label)` pairs.
    pub fn choice(key: &str, label: &str, options: &[(&str, &str)]) -> Self {
        Self::with_domain(
            key,
            label,
            FieldDomain::Choice {
                options: options
                    .iter()
                    .map(|(code, label)| Choice {
                        code: code.to_string(),
                        label: label.to_string(),
                    })
                    .collect(),
            },
        )
    }

    /// A `"yes"` / `"no"` field.
    pub fn yes_no(key: &str, label: &str) -> Self {
        Self::choice(key, label, &[("yes", "sim"), ("no", "não")])
    }

    pub fn numeric(key: &str, label: &str, range: Interval) -> Self {
        Self::with_domain(
            key,
            label,
            FieldDomain::Numeric {
                range,
                step: None,
                bands: Vec::new(),
            },
        )
    }

    /// An integer-valued numeric field over `[min, max]`.
    pub fn integer(key: &str, label: &str, min: f64, max: f64) -> Self {
        Self::numeric(key, label, Interval::closed(min, max)).step(1.0)
    }

    fn with_domain(key: &str, label: &str, domain: FieldDomain) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            domain,
            depends_on: None,
            default: None,
            required: true,
            unit: None,
        }
    }

    pub fn depends_on(mut self, field: &str, trigger: Trigger) -> Self {
        self.depends_on = Some(Dependency {
            field: field.to_string(),
            trigger,
        });
        self
    }

    /// Shorthand for a dependency on `field == value`.
    pub fn when(self, field: &str, value: impl Into<Value>) -> Self {
        self.depends_on(field, Trigger::Equals(value.into()))
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_string());
        self
    }

    pub fn step(mut self, value: f64) -> Self {
        if let FieldDomain::Numeric { step, .. } = &mut self.domain {
            *step = Some(value);
        }
        self
    }

    pub fn bands(mut self, value: Vec<Band>) -> Self {
        if let FieldDomain::Numeric { bands, .. } = &mut self.domain {
            *bands = value;
        }
        self
    }
}
