//! radref-schemes
//!
//! The calculator catalogue. Each scheme is a declarative table consumed by
//! the evaluator in `radref-core`; nothing here branches on clinical logic.

pub mod error;
pub mod registry;
pub mod schemes;

use radref_core::error::EvaluationError;
use radref_core::models::{AnswerSet, Assessment, Category, Evaluation, Scheme, Validation};
use radref_report::assemble_report;

pub use registry::{all_calculators, get_calculator, get_scheme, registry};

/// Trait implemented by each calculator.
pub trait Calculator: Send + Sync {
    /// The scheme definition. Built once and shared.
    fn scheme(&self) -> &Scheme;

    /// Unique key (e.g. "bosniak-v2019").
    fn key(&self) -> &str {
        &self.scheme().key
    }

    /// Human-readable name (e.g. "Bosniak 2019").
    fn name(&self) -> &str {
        &self.scheme().name
    }

    fn validate(&self, answers: &AnswerSet) -> Validation {
        radref_core::validate(self.scheme(), answers)
    }

    fn evaluate(&self, answers: &AnswerSet) -> Result<Evaluation, EvaluationError> {
        radref_core::evaluate(self.scheme(), answers)
    }

    fn report(&self, answers: &AnswerSet, category: &Category) -> String {
        assemble_report(self.scheme(), answers, category)
    }

    /// Validate, evaluate when complete, and assemble the report when a
    /// category matched. Never fails: incompleteness is carried as data.
    fn assess(&self, answers: &AnswerSet) -> Assessment {
        let validation = self.validate(answers);
        let mut assessment = Assessment {
            scheme: self.key().to_string(),
            validation,
            evaluation: None,
            report: None,
        };
        if !assessment.validation.complete {
            return assessment;
        }

        match self.evaluate(answers) {
            Ok(evaluation) => {
                assessment.report = evaluation
                    .outcome
                    .category()
                    .map(|category| self.report(answers, category));
                assessment.evaluation = Some(evaluation);
            }
            Err(e) => {
                tracing::error!(scheme = %self.key(), error = %e, "evaluation rejected a validated answer set");
            }
        }
        assessment
    }
}
