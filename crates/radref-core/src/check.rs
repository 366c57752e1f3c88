//! Scheme self-checks run once when the registry is loaded.
//!
//! These catch authoring defects in the static tables: dangling references,
//! codes outside a field's domain, and numeric bands that leave a gap or
//! overlap.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::error::SchemeError;
use crate::models::interval::{cmp_lower, cmp_upper};
use crate::models::{Band, Expr, FieldDomain, Interval, Predicate, RuleOutcome, Scheme, Value};

/// Every authoring defect found in `scheme`. Empty means the scheme is sound.
///
/// Only declared bands are partition-checked. Rules that compare a value
/// against a bare threshold (`LessThan`, `AtLeast`, `Within`, ...) are read
/// as an ordered first-match table and are not checked for gaps.
pub fn check_scheme(scheme: &Scheme) -> Vec<SchemeError> {
    let mut checker = Checker {
        scheme,
        errors: Vec::new(),
    };
    checker.keys();
    checker.fields();
    checker.derived();
    checker.rules();
    checker.errors
}

/// Check that `bands`, clipped to `domain`, cover it exactly once.
pub fn check_partition(domain: &Interval, bands: &[Band]) -> Result<(), String> {
    let mut clipped = Vec::with_capacity(bands.len());
    for band in bands {
        let range = band.range.intersect(domain);
        if range.is_empty() {
            return Err(format!("band '{}' lies outside {domain}", band.code));
        }
        clipped.push((band.code.as_str(), range));
    }
    clipped.sort_by(|a, b| cmp_lower(a.1.lower, b.1.lower));

    let (Some(first), Some(last)) = (clipped.first(), clipped.last()) else {
        return Ok(());
    };
    if cmp_lower(first.1.lower, domain.lower) != Ordering::Equal {
        return Err(format!("gap below band '{}'", first.0));
    }

    for pair in clipped.windows(2) {
        let ((a_code, a), (b_code, b)) = (pair[0], pair[1]);
        let (Some(upper), Some(lower)) = (a.upper, b.lower) else {
            return Err(format!("bands '{a_code}' and '{b_code}' overlap"));
        };
        match upper.value.total_cmp(&lower.value) {
            Ordering::Less => return Err(format!("gap between '{a_code}' and '{b_code}'")),
            Ordering::Greater => return Err(format!("bands '{a_code}' and '{b_code}' overlap")),
            Ordering::Equal => match (upper.inclusive, lower.inclusive) {
                (true, true) => {
                    return Err(format!(
                        "bands '{a_code}' and '{b_code}' both contain {}",
                        upper.value
                    ));
                }
                (false, false) => {
                    return Err(format!(
                        "{} is in neither '{a_code}' nor '{b_code}'",
                        upper.value
                    ));
                }
                _ => {}
            },
        }
    }

    if cmp_upper(last.1.upper, domain.upper) != Ordering::Equal {
        return Err(format!("gap above band '{}'", last.0));
    }
    Ok(())
}

struct Checker<'a> {
    scheme: &'a Scheme,
    errors: Vec<SchemeError>,
}

impl Checker<'_> {
    fn name(&self) -> String {
        self.scheme.key.clone()
    }

    fn keys(&mut self) {
        let scheme = self.scheme;
        let mut seen = BTreeSet::new();
        let keys = scheme
            .fields
            .iter()
            .map(|f| &f.key)
            .chain(scheme.derived.iter().map(|d| &d.key));
        for key in keys {
            if !seen.insert(key) {
                self.errors.push(SchemeError::DuplicateKey {
                    scheme: self.name(),
                    key: key.clone(),
                });
            }
        }

        let mut codes = BTreeSet::new();
        for category in &scheme.categories {
            if !codes.insert(&category.code) {
                self.errors.push(SchemeError::DuplicateCategory {
                    scheme: self.name(),
                    code: category.code.clone(),
                });
            }
        }
    }

    fn fields(&mut self) {
        let scheme = self.scheme;
        for (i, field) in scheme.fields.iter().enumerate() {
            if let Some(dep) = &field.depends_on {
                match scheme.fields[..i].iter().find(|f| f.key == dep.field) {
                    None => self.errors.push(SchemeError::DependencyOrder {
                        scheme: self.name(),
                        field: field.key.clone(),
                        dependency: dep.field.clone(),
                    }),
                    Some(parent) => {
                        for value in dep.trigger.values() {
                            if !parent.domain.accepts(value) {
                                self.outside(&field.key, &parent.key, value);
                            }
                        }
                    }
                }
            }

            if let Some(default) = &field.default
                && !field.domain.accepts(default)
            {
                self.outside(&field.key, &field.key, default);
            }

            if let FieldDomain::Numeric { range, bands, .. } = &field.domain {
                self.partition(&field.key, range, bands);
            }
        }
    }

    fn derived(&mut self) {
        let scheme = self.scheme;
        for (i, derived) in scheme.derived.iter().enumerate() {
            let earlier: Vec<&str> = scheme.derived[..i]
                .iter()
                .map(|d| d.key.as_str())
                .collect();
            for reference in derived.expr.references() {
                if scheme.field(reference).is_none() && !earlier.contains(&reference) {
                    self.unknown(&derived.key, reference);
                }
            }
            self.expr_codes(&derived.key, &derived.expr);
            self.partition(&derived.key, &derived.range, &derived.bands);
        }
    }

    fn expr_codes(&mut self, owner: &str, expr: &Expr) {
        match expr {
            Expr::Points { field, table } => {
                for (code, _) in table {
                    self.code_in_domain(owner, field, &Value::Code(code.clone()));
                }
            }
            Expr::CountOf { fields, code } => {
                for field in fields {
                    self.code_in_domain(owner, field, &Value::Code(code.clone()));
                }
            }
            Expr::Sum(xs) | Expr::Product(xs) | Expr::Min(xs) | Expr::Max(xs) => {
                for x in xs {
                    self.expr_codes(owner, x);
                }
            }
            Expr::Difference(a, b) | Expr::Quotient(a, b) | Expr::Power(a, b) => {
                self.expr_codes(owner, a);
                self.expr_codes(owner, b);
            }
            Expr::Const(_) | Expr::Var(_) => {}
        }
    }

    fn rules(&mut self) {
        let scheme = self.scheme;
        for rule in &scheme.rules {
            for reference in rule.when.references() {
                if scheme.field(reference).is_none()
                    && scheme.derived_value(reference).is_none()
                {
                    self.unknown(&rule.id, reference);
                }
            }
            self.predicate_codes(&rule.id, &rule.when);

            match &rule.outcome {
                RuleOutcome::Category { code } => {
                    if scheme.category(code).is_none() {
                        self.errors.push(SchemeError::UnknownCategory {
                            scheme: self.name(),
                            rule: rule.id.clone(),
                            code: code.clone(),
                        });
                    }
                }
                RuleOutcome::Adjust {
                    delta,
                    floor,
                    ceiling,
                } => {
                    if let Err(reason) = self.adjustment(*delta, floor, ceiling) {
                        self.errors.push(SchemeError::InvalidAdjustment {
                            scheme: self.name(),
                            rule: rule.id.clone(),
                            reason,
                        });
                    }
                }
            }
        }
    }

    fn adjustment(&self, delta: i32, floor: &str, ceiling: &str) -> Result<(), String> {
        if delta == 0 {
            return Err("delta is zero".to_string());
        }
        if let Some(code) = self
            .scheme
            .scale
            .iter()
            .find(|c| self.scheme.category(c).is_none())
        {
            return Err(format!("scale lists undeclared category '{code}'"));
        }
        let position = |code: &str| self.scheme.scale.iter().position(|c| c == code);
        match (position(floor), position(ceiling)) {
            (Some(lo), Some(hi)) if lo <= hi => Ok(()),
            (Some(_), Some(_)) => Err(format!("floor '{floor}' is above ceiling '{ceiling}'")),
            _ => Err(format!("'{floor}' or '{ceiling}' is not on the scale")),
        }
    }

    fn predicate_codes(&mut self, rule: &str, predicate: &Predicate) {
        match predicate {
            Predicate::Equals { key, value } | Predicate::NotEquals { key, value } => {
                self.code_in_domain(rule, key, value);
            }
            Predicate::OneOf { key, values } => {
                for value in values {
                    self.code_in_domain(rule, key, value);
                }
            }
            Predicate::InBand { key, band } => {
                if !self.scheme.bands_of(key).iter().any(|b| &b.code == band) {
                    self.errors.push(SchemeError::UnknownBand {
                        scheme: self.name(),
                        key: rule.to_string(),
                        band: band.clone(),
                    });
                }
            }
            Predicate::All { of } | Predicate::Any { of } | Predicate::CountAtLeast { of, .. } => {
                for p in of {
                    self.predicate_codes(rule, p);
                }
            }
            Predicate::Not { predicate } => self.predicate_codes(rule, predicate),
            _ => {}
        }
    }

    /// Codes compared against a choice field must be among its options.
    fn code_in_domain(&mut self, owner: &str, key: &str, value: &Value) {
        if let Some(field) = self.scheme.field(key)
            && matches!(field.domain, FieldDomain::Choice { .. })
            && !field.domain.accepts(value)
        {
            self.outside(owner, key, value);
        }
    }

    fn partition(&mut self, key: &str, domain: &Interval, bands: &[Band]) {
        if let Err(reason) = check_partition(domain, bands) {
            self.errors.push(SchemeError::BandPartition {
                scheme: self.name(),
                key: key.to_string(),
                reason,
            });
        }
    }

    fn unknown(&mut self, key: &str, reference: &str) {
        self.errors.push(SchemeError::UnknownReference {
            scheme: self.name(),
            key: key.to_string(),
            reference: reference.to_string(),
        });
    }

    fn outside(&mut self, key: &str, field: &str, value: &Value) {
        self.errors.push(SchemeError::ValueOutsideDomain {
            scheme: self.name(),
            key: key.to_string(),
            field: field.to_string(),
            value: value.to_string(),
        });
    }
}
