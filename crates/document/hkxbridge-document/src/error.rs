//! Error type for the document boundary.

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum DocumentError {
    #[error("document parse error: {0}")]
    Parse(String),

    #[error("document serialize error: {0}")]
    Serialize(String),

    #[error("invalid document: {reason}")]
    Invalid { reason: String },
}
