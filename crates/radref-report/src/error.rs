use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("template parse error in '{scheme}': {message}")]
    TemplateParse { scheme: String, message: String },

    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<tera::Error> for ReportError {
    fn from(e: tera::Error) -> Self {
        ReportError::TemplateRender(e.to_string())
    }
}
