use thiserror::Error;

pub type DocumentResult<T> = Result<T, DocumentError>;

/// Reasons a JSON document cannot become the active widget tree.
///
/// Everything below the document level (bad params, unknown types, missing
/// children) degrades silently instead of producing one of these.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Invalid JSON at line {line}, column {column}: {message}")]
    Json {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Root of the document must be a widget object, found {found}")]
    RootNotObject { found: &'static str },

    #[error("Duplicate id '{id}': widget ids must be unique within the document")]
    DuplicateId { id: String },
}

impl From<serde_json::Error> for DocumentError {
    fn from(err: serde_json::Error) -> Self {
        DocumentError::Json {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}
