//! Derived-value computation.

use std::collections::BTreeMap;

use crate::models::{Expr, Scheme, Value};

/// Evaluate an expression against the working values.
///
/// Returns `None` for a missing or non-numeric input, an unlisted code, a
/// zero divisor or any non-finite intermediate result.
pub fn eval_expr(expr: &Expr, values: &BTreeMap<String, Value>) -> Option<f64> {
    let result = match expr {
        Expr::Const(c) => *c,
        Expr::Var(key) => values.get(key)?.as_number()?,
        Expr::Points { field, table } => {
            let code = values.get(field)?.as_code()?;
            table.iter().find(|(c, _)| c == code)?.1
        }
        Expr::CountOf { fields, code } => fields
            .iter()
            .filter(|f| values.get(*f).and_then(Value::as_code) == Some(code.as_str()))
            .count() as f64,
        Expr::Sum(xs) => xs
            .iter()
            .map(|x| eval_expr(x, values))
            .sum::<Option<f64>>()?,
        Expr::Product(xs) => xs
            .iter()
            .map(|x| eval_expr(x, values))
            .product::<Option<f64>>()?,
        Expr::Difference(a, b) => eval_expr(a, values)? - eval_expr(b, values)?,
        Expr::Quotient(a, b) => {
            let divisor = eval_expr(b, values)?;
            if divisor == 0.0 {
                return None;
            }
            eval_expr(a, values)? / divisor
        }
        Expr::Power(base, exponent) => eval_expr(base, values)?.powf(eval_expr(exponent, values)?),
        Expr::Min(xs) => fold(xs, values, f64::min)?,
        Expr::Max(xs) => fold(xs, values, f64::max)?,
    };
    result.is_finite().then_some(result)
}

fn fold(
    xs: &[Expr],
    values: &BTreeMap<String, Value>,
    op: fn(f64, f64) -> f64,
) -> Option<f64> {
    let mut acc: Option<f64> = None;
    for x in xs {
        let v = eval_expr(x, values)?;
        acc = Some(acc.map_or(v, |a| op(a, v)));
    }
    acc
}

/// Compute every derived value of `scheme` in declaration order, inserting
/// defined results into `values` so later formulas and rules can read them.
pub fn compute_derived(
    scheme: &Scheme,
    values: &mut BTreeMap<String, Value>,
) -> BTreeMap<String, Option<f64>> {
    let mut out = BTreeMap::new();
    for derived in &scheme.derived {
        let result = eval_expr(&derived.expr, values);
        if let Some(v) = result {
            values.insert(derived.key.clone(), Value::Number(v));
        } else {
            tracing::debug!(scheme = %scheme.key, derived = %derived.key, "derived value undefined");
        }
        out.insert(derived.key.clone(), result);
    }
    out
}
