use thiserror::Error;

use radref_core::error::{EvaluationError, SchemeError};
use radref_report::error::ReportError;

#[derive(Debug, Error)]
pub enum CalculatorError {
    #[error("unknown scheme: {0}")]
    UnknownScheme(String),

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),

    #[error(transparent)]
    Definition(#[from] SchemeError),

    #[error(transparent)]
    Report(#[from] ReportError),
}
