use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModelError {
    /// A field-type tag outside the fixed set; editor and renderer disagree on schema version.
    #[error("unknown field type: {0}")]
    UnknownFieldType(String),
    #[error("unknown conditional operator: {0}")]
    UnknownOperator(String),
    #[error("unknown button style: {0}")]
    UnknownButtonStyle(String),
    #[error("invalid field id: {0:?}")]
    InvalidFieldId(String),
    #[error("invalid form definition: {0}")]
    InvalidDefinition(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
