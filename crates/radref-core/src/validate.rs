//! Field relevance and domain validation.

use std::collections::BTreeMap;

use crate::models::{AnswerSet, Field, Scheme, Validation, Value};

/// Relevant fields and their effective values (answer, else default).
pub struct Resolved<'a> {
    pub fields: Vec<&'a Field>,
    pub values: BTreeMap<String, Value>,
}

/// Walk the fields in declaration order, following dependency edges.
///
/// A dependent field is relevant only when its dependency is itself
/// relevant, has an effective value, and that value matches the trigger.
pub fn resolve<'a>(scheme: &'a Scheme, answers: &AnswerSet) -> Resolved<'a> {
    let mut fields = Vec::new();
    let mut values = BTreeMap::new();

    for field in &scheme.fields {
        let relevant = match &field.depends_on {
            None => true,
            Some(dep) => values
                .get(&dep.field)
                .is_some_and(|v| dep.trigger.matches(v)),
        };
        if !relevant {
            continue;
        }
        if let Some(value) = answers.get(&field.key).or(field.default.as_ref()) {
            values.insert(field.key.clone(), value.clone());
        }
        fields.push(field);
    }

    Resolved { fields, values }
}

/// Fields currently relevant for `answers`, in declaration order.
pub fn relevant_fields<'a>(scheme: &'a Scheme, answers: &AnswerSet) -> Vec<&'a Field> {
    resolve(scheme, answers).fields
}

/// Check which relevant fields are missing or out of domain.
pub fn validate(scheme: &Scheme, answers: &AnswerSet) -> Validation {
    let resolved = resolve(scheme, answers);

    let mut missing = Vec::new();
    let mut invalid_fields = Vec::new();
    for field in &resolved.fields {
        match resolved.values.get(&field.key) {
            None if field.required => missing.push(field.key.clone()),
            None => {}
            Some(value) if !field.domain.accepts(value) => invalid_fields.push(field.key.clone()),
            Some(_) => {}
        }
    }

    Validation {
        complete: missing.is_empty() && invalid_fields.is_empty(),
        relevant: resolved.fields.iter().map(|f| f.key.clone()).collect(),
        missing,
        invalid_fields,
    }
}
