use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single answer: either an enumerated code or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum Value {
    Number(f64),
    Code(String),
}

impl Value {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Code(_) => None,
        }
    }

    pub fn as_code(&self) -> Option<&str> {
        match self {
            Value::Code(c) => Some(c),
            Value::Number(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Code(c) => write!(f, "\"{c}\""),
        }
    }
}

impl From<&str> for Value {
    fn from(code: &str) -> Self {
        Value::Code(code.to_string())
    }
}

impl From<String> for Value {
    fn from(code: String) -> Self {
        Value::Code(code)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}
