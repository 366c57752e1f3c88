use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::category::Category;

/// Result of checking an answer set against a scheme's fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Validation {
    pub complete: bool,
    /// Keys of the fields currently relevant, in declaration order.
    pub relevant: Vec<String>,
    /// Relevant required fields with neither an answer nor a default.
    pub missing: Vec<String>,
    /// Relevant fields whose value lies outside the field's domain.
    pub invalid_fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export)]
pub enum Outcome {
    Matched { category: Category, rule: String },
    /// The rule table has a gap for this answer set.
    NoMatch,
}

impl Outcome {
    pub fn category(&self) -> Option<&Category> {
        match self {
            Outcome::Matched { category, .. } => Some(category),
            Outcome::NoMatch => None,
        }
    }

    pub fn rule(&self) -> Option<&str> {
        match self {
            Outcome::Matched { rule, .. } => Some(rule),
            Outcome::NoMatch => None,
        }
    }

    pub fn code(&self) -> Option<&str> {
        self.category().map(|c| c.code.as_str())
    }
}

/// An adjustment rule applied on top of a base category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AppliedModifier {
    pub rule: String,
    pub delta: i32,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Evaluation {
    pub scheme: String,
    pub outcome: Outcome,
    pub modifier: Option<AppliedModifier>,
    /// Derived values by key; `None` where the formula was undefined.
    pub derived: BTreeMap<String, Option<f64>>,
}

/// Everything the UI needs after one interaction: the validity flag,
/// the classification when complete, and the copyable report text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    pub scheme: String,
    pub validation: Validation,
    pub evaluation: Option<Evaluation>,
    pub report: Option<String>,
}
