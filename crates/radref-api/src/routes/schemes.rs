use axum::Json;
use axum::extract::Path;

use radref_core::models::{AnswerSet, Assessment, Scheme, Validation};
use radref_schemes::get_calculator;
use radref_schemes::registry::SchemeSummary;

use crate::error::ApiError;

pub async fn list_schemes() -> Json<Vec<SchemeSummary>> {
    Json(radref_schemes::registry().summaries())
}

/// Full scheme definition: fields, domains, dependencies, categories.
pub async fn get_scheme_detail(Path(key): Path<String>) -> Result<Json<Scheme>, ApiError> {
    let calculator = get_calculator(&key)?;
    Ok(Json(calculator.scheme().clone()))
}

pub async fn validate_answers(
    Path(key): Path<String>,
    Json(answers): Json<AnswerSet>,
) -> Result<Json<Validation>, ApiError> {
    let calculator = get_calculator(&key)?;
    Ok(Json(calculator.validate(&answers)))
}

/// Validate, evaluate and report in one call. An incomplete answer set is
/// a normal response with `validation.complete == false`.
pub async fn evaluate_answers(
    Path(key): Path<String>,
    Json(answers): Json<AnswerSet>,
) -> Result<Json<Assessment>, ApiError> {
    let calculator = get_calculator(&key)?;
    Ok(Json(calculator.assess(&answers)))
}
