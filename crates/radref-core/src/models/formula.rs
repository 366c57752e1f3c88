use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::field::Band;
use super::interval::Interval;

/// Arithmetic over answers and earlier derived values.
///
/// Evaluation is total: a missing input, an unknown code, a zero divisor or
/// a non-finite result yields `None` rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Expr {
    Const(f64),
    /// Numeric field or earlier derived value.
    Var(String),
    /// Score contributed by a choice field, looked up by code.
    Points {
        field: String,
        table: Vec<(String, f64)>,
    },
    /// Number of listed fields whose answer equals `code`.
    CountOf {
        fields: Vec<String>,
        code: String,
    },
    Sum(Vec<Expr>),
    Product(Vec<Expr>),
    Difference(Box<Expr>, Box<Expr>),
    Quotient(Box<Expr>, Box<Expr>),
    Power(Box<Expr>, Box<Expr>),
    Min(Vec<Expr>),
    Max(Vec<Expr>),
}

impl Expr {
    pub fn var(key: &str) -> Self {
        Expr::Var(key.to_string())
    }

    pub fn points(field: &str, table: &[(&str, f64)]) -> Self {
        Expr::Points {
            field: field.to_string(),
            table: table.iter().map(|(c, p)| (c.to_string(), *p)).collect(),
        }
    }

    /// `points` for a yes/no field: `yes` scores `points`, `no` scores 0.
    pub fn flag(field: &str, points: f64) -> Self {
        Self::points(field, &[("yes", points), ("no", 0.0)])
    }

    pub fn count_of(fields: &[&str], code: &str) -> Self {
        Expr::CountOf {
            fields: fields.iter().map(|f| f.to_string()).collect(),
            code: code.to_string(),
        }
    }

    pub fn sum_of(keys: &[&str]) -> Self {
        Expr::Sum(keys.iter().map(|k| Expr::var(k)).collect())
    }

    pub fn minus(a: Expr, b: Expr) -> Self {
        Expr::Difference(Box::new(a), Box::new(b))
    }

    pub fn div(a: Expr, b: Expr) -> Self {
        Expr::Quotient(Box::new(a), Box::new(b))
    }

    pub fn pow(base: Expr, exponent: Expr) -> Self {
        Expr::Power(Box::new(base), Box::new(exponent))
    }

    /// Every answer or derived key this expression reads.
    pub fn references(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_references(&mut out);
        out
    }

    fn collect_references<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Expr::Const(_) => {}
            Expr::Var(key) => out.push(key),
            Expr::Points { field, .. } => out.push(field),
            Expr::CountOf { fields, .. } => out.extend(fields.iter().map(String::as_str)),
            Expr::Sum(xs) | Expr::Product(xs) | Expr::Min(xs) | Expr::Max(xs) => {
                for x in xs {
                    x.collect_references(out);
                }
            }
            Expr::Difference(a, b) | Expr::Quotient(a, b) | Expr::Power(a, b) => {
                a.collect_references(out);
                b.collect_references(out);
            }
        }
    }
}

/// A value computed from the answers before rule matching
/// (e.g. eGFR, a summed point score, an ellipsoid volume).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Derived {
    pub key: String,
    pub label: String,
    pub expr: Expr,
    /// Range the result is expected to fall in; bands partition it.
    pub range: Interval,
    pub bands: Vec<Band>,
    pub unit: Option<String>,
    pub decimals: u8,
}

impl Derived {
    pub fn new(key: &str, label: &str, expr: Expr) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            expr,
            range: Interval::all(),
            bands: Vec::new(),
            unit: None,
            decimals: 0,
        }
    }

    pub fn range(mut self, range: Interval) -> Self {
        self.range = range;
        self
    }

    pub fn bands(mut self, bands: Vec<Band>) -> Self {
        self.bands = bands;
        self
    }

    pub fn unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_string());
        self
    }

    pub fn decimals(mut self, decimals: u8) -> Self {
        self.decimals = decimals;
        self
    }
}
