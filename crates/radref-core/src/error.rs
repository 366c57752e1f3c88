use thiserror::Error;

/// Contract violations raised while evaluating an answer set.
#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("answer set for '{scheme}' is incomplete (missing: {missing:?}, invalid: {invalid:?})")]
    IncompleteAnswerSet {
        scheme: String,
        missing: Vec<String>,
        invalid: Vec<String>,
    },
}

/// Authoring defects found by [`crate::check::check_scheme`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemeError {
    #[error("{scheme}: duplicate key '{key}'")]
    DuplicateKey { scheme: String, key: String },

    #[error("{scheme}: duplicate category '{code}'")]
    DuplicateCategory { scheme: String, code: String },

    #[error("{scheme}: field '{field}' depends on '{dependency}', which is not declared before it")]
    DependencyOrder {
        scheme: String,
        field: String,
        dependency: String,
    },

    #[error("{scheme}: '{key}' references unknown key '{reference}'")]
    UnknownReference {
        scheme: String,
        key: String,
        reference: String,
    },

    #[error("{scheme}: '{key}' uses value {value} outside the domain of '{field}'")]
    ValueOutsideDomain {
        scheme: String,
        key: String,
        field: String,
        value: String,
    },

    #[error("{scheme}: '{key}' references unknown band '{band}'")]
    UnknownBand {
        scheme: String,
        key: String,
        band: String,
    },

    #[error("{scheme}: bands of '{key}' do not partition its domain: {reason}")]
    BandPartition {
        scheme: String,
        key: String,
        reason: String,
    },

    #[error("{scheme}: rule '{rule}' yields unknown category '{code}'")]
    UnknownCategory {
        scheme: String,
        rule: String,
        code: String,
    },

    #[error("{scheme}: rule '{rule}' has an invalid adjustment: {reason}")]
    InvalidAdjustment {
        scheme: String,
        rule: String,
        reason: String,
    },
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),

    #[error(transparent)]
    Scheme(#[from] SchemeError),
}
