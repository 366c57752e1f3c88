use std::collections::BTreeMap;

use serde::Serialize;
use tera::{Context, Tera};

use radref_core::compute::compute_derived;
use radref_core::models::{AnswerSet, Category, Scheme};
use radref_core::validate::resolve;

use crate::error::ReportError;
use crate::format::{display_value, format_fixed, sentence, tidy, with_unit};

#[derive(Debug, Clone, Serialize)]
struct Entry {
    key: String,
    label: String,
    value: String,
    /// Raw stored value (code or number as text).
    code: String,
    /// Numeric value for comparisons inside templates.
    number: Option<f64>,
}

#[derive(Debug, Serialize)]
struct ReportContext<'a> {
    scheme: SchemeInfo<'a>,
    fields: BTreeMap<String, Entry>,
    findings: Vec<Entry>,
    derived: BTreeMap<String, Entry>,
    category: &'a Category,
}

#[derive(Debug, Serialize)]
struct SchemeInfo<'a> {
    key: &'a str,
    name: &'a str,
}

/// Assemble the report fragment for a matched category.
///
/// The scheme's Tera template receives `scheme`, `fields`, `findings`,
/// `derived` and `category`. Only relevant answered fields appear in
/// `fields`, so templates omit the rest with `is defined`. Schemes without a
/// template, and templates that fail to render, get the plain sentence form.
/// Never fails.
pub fn assemble_report(scheme: &Scheme, answers: &AnswerSet, category: &Category) -> String {
    let context = build_context(scheme, answers, category);

    if let Some(template) = &scheme.report_template {
        match render(&scheme.key, template, &context) {
            Ok(text) => return text,
            Err(e) => {
                tracing::warn!(scheme = %scheme.key, error = %e, "report template failed, using plain text");
            }
        }
    }
    plain(&context)
}

/// Parse a scheme's template without rendering it.
pub fn check_template(scheme: &Scheme) -> Result<(), ReportError> {
    if let Some(template) = &scheme.report_template {
        let mut tera = Tera::default();
        tera.add_raw_template(&template_name(&scheme.key), template)
            .map_err(|e| ReportError::TemplateParse {
                scheme: scheme.key.clone(),
                message: e.to_string(),
            })?;
    }
    Ok(())
}

fn template_name(key: &str) -> String {
    // A non-HTML extension keeps Tera from autoescaping "<" and ">".
    format!("{key}.txt")
}

fn render(key: &str, template: &str, context: &ReportContext<'_>) -> Result<String, ReportError> {
    let name = template_name(key);
    let mut tera = Tera::default();
    tera.add_raw_template(&name, template)
        .map_err(|e| ReportError::TemplateParse {
            scheme: key.to_string(),
            message: e.to_string(),
        })?;

    let context = Context::from_serialize(context)?;
    let rendered = tera.render(&name, &context)?;
    Ok(tidy(&rendered))
}

fn build_context<'a>(
    scheme: &'a Scheme,
    answers: &AnswerSet,
    category: &'a Category,
) -> ReportContext<'a> {
    let resolved = resolve(scheme, answers);

    let findings: Vec<Entry> = resolved
        .fields
        .iter()
        .filter_map(|field| {
            let value = resolved.values.get(&field.key)?;
            Some(Entry {
                key: field.key.clone(),
                label: field.label.clone(),
                value: display_value(field, value),
                code: match value.as_code() {
                    Some(code) => code.to_string(),
                    None => value.to_string(),
                },
                number: value.as_number(),
            })
        })
        .collect();

    let mut values = resolved.values;
    let computed = compute_derived(scheme, &mut values);
    let derived = scheme
        .derived
        .iter()
        .filter_map(|d| {
            let v = (*computed.get(&d.key)?)?;
            let entry = Entry {
                key: d.key.clone(),
                label: d.label.clone(),
                value: with_unit(format_fixed(v, d.decimals), d.unit.as_deref()),
                code: v.to_string(),
                number: Some(v),
            };
            Some((d.key.clone(), entry))
        })
        .collect();

    ReportContext {
        scheme: SchemeInfo {
            key: &scheme.key,
            name: &scheme.name,
        },
        fields: findings
            .iter()
            .map(|e| (e.key.clone(), e.clone()))
            .collect(),
        findings,
        derived,
        category,
    }
}

/// `<Scheme>: <Label>: <value>; ... <Derived>: <value>. <Category>. <risk>. <management>.`
fn plain(context: &ReportContext<'_>) -> String {
    let mut parts = Vec::new();

    let findings: Vec<String> = context
        .findings
        .iter()
        .map(|e| format!("{}: {}", e.label, e.value))
        .collect();
    if findings.is_empty() {
        parts.push(format!("{}:", context.scheme.name));
    } else {
        parts.push(sentence(&format!("{}: {}", context.scheme.name, findings.join("; "))));
    }

    for entry in context.derived.values() {
        parts.push(sentence(&format!("{}: {}", entry.label, entry.value)));
    }

    parts.push(sentence(&context.category.label));
    if let Some(risk) = &context.category.risk {
        parts.push(sentence(risk));
    }
    if let Some(management) = &context.category.management {
        parts.push(sentence(management));
    }
    parts.join(" ")
}
