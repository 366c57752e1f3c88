use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::category::Category;
use super::field::{Band, Field, FieldDomain};
use super::formula::Derived;
use super::rule::Rule;

/// A clinical scoring system expressed as data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Scheme {
    pub key: String,
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<Field>,
    pub derived: Vec<Derived>,
    pub categories: Vec<Category>,
    pub rules: Vec<Rule>,
    /// Ordered category codes that adjustment rules step along.
    pub scale: Vec<String>,
    /// Tera template for the report fragment.
    pub report_template: Option<String>,
}

impl Scheme {
    pub fn new(key: &str, name: &str) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            description: None,
            fields: Vec::new(),
            derived: Vec::new(),
            categories: Vec::new(),
            rules: Vec::new(),
            scale: Vec::new(),
            report_template: None,
        }
    }

    pub fn describe(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }

    pub fn derived(mut self, derived: Vec<Derived>) -> Self {
        self.derived = derived;
        self
    }

    pub fn categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    pub fn rules(mut self, rules: Vec<Rule>) -> Self {
        self.rules = rules;
        self
    }

    pub fn scale(mut self, codes: &[&str]) -> Self {
        self.scale = codes.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn report(mut self, template: &str) -> Self {
        self.report_template = Some(template.to_string());
        self
    }

    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn derived_value(&self, key: &str) -> Option<&Derived> {
        self.derived.iter().find(|d| d.key == key)
    }

    pub fn category(&self, code: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.code == code)
    }

    /// Bands declared for a numeric field or derived value.
    pub fn bands_of(&self, key: &str) -> &[Band] {
        if let Some(field) = self.field(key) {
            return field.domain.bands();
        }
        self.derived_value(key)
            .map(|d| d.bands.as_slice())
            .unwrap_or(&[])
    }

    /// Report label for an enumerated answer, if `key` is a choice field.
    pub fn choice_label(&self, key: &str, code: &str) -> Option<&str> {
        self.field(key).and_then(|f| match &f.domain {
            FieldDomain::Choice { .. } => f.domain.label_of(code),
            FieldDomain::Numeric { .. } => None,
        })
    }
}
