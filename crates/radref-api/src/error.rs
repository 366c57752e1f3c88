use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use radref_core::error::EvaluationError;
use radref_schemes::error::CalculatorError;

/// Errors a route handler can return.
#[derive(Debug)]
pub enum ApiError {
    /// No scheme is registered under the requested key.
    UnknownScheme(String),
    /// The answers cannot be evaluated as they stand.
    Incomplete {
        message: String,
        missing: Vec<String>,
        invalid: Vec<String>,
    },
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    missing: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    invalid: Vec<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::UnknownScheme(error) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error,
                    missing: Vec::new(),
                    invalid: Vec::new(),
                },
            ),
            ApiError::Incomplete {
                message,
                missing,
                invalid,
            } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorBody {
                    error: message,
                    missing,
                    invalid,
                },
            ),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "internal server error".to_string(),
                        missing: Vec::new(),
                        invalid: Vec::new(),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<CalculatorError> for ApiError {
    fn from(e: CalculatorError) -> Self {
        match e {
            CalculatorError::UnknownScheme(_) => ApiError::UnknownScheme(e.to_string()),
            CalculatorError::Evaluation(EvaluationError::IncompleteAnswerSet {
                ref missing,
                ref invalid,
                ..
            }) => ApiError::Incomplete {
                missing: missing.clone(),
                invalid: invalid.clone(),
                message: e.to_string(),
            },
            other => ApiError::Internal(other.to_string()),
        }
    }
}
