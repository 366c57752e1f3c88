use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Risk tier used for result badge colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    /// Study inadequate or result not classifiable on imaging alone.
    Indeterminate,
    Benign,
    Low,
    Intermediate,
    High,
    Critical,
}

/// A classification outcome of a scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub code: String,
    pub label: String,
    pub rank: i32,
    pub severity: Severity,
    pub risk: Option<String>,
    pub management: Option<String>,
}

impl Category {
    pub fn new(code: &str, label: &str, rank: i32, severity: Severity) -> Self {
        Self {
            code: code.to_string(),
            label: label.to_string(),
            rank,
            severity,
            risk: None,
            management: None,
        }
    }

    pub fn with_risk(mut self, risk: &str) -> Self {
        self.risk = Some(risk.to_string());
        self
    }

    pub fn with_management(mut self, management: &str) -> Self {
        self.management = Some(management.to_string());
        self
    }
}
