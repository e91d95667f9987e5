//! Error types for the form engine.

use thiserror::Error;

use formkit_model::ModelError;

/// Boxed failure reported by a host collaborator.
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EngineError {
    // =========================================================================
    // COLLECTION ERRORS
    // =========================================================================
    /// No field with the given id.
    #[error("Field not found: {id}")]
    FieldNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// A field with the same id already exists.
    #[error("Duplicate field id: {id}")]
    DuplicateFieldId {
        /// The colliding id.
        id: String,
    },

    /// Index outside the valid range for the target sequence.
    #[error("Index {index} out of range for {len} item(s)")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Length of the sequence.
        len: usize,
    },

    /// Option edits on a field type that has no option list.
    #[error("Field '{id}' of type {field_type} does not carry options")]
    OptionsNotSupported {
        /// Field id.
        id: String,
        /// The field's type tag.
        field_type: String,
    },

    // =========================================================================
    // SESSION ERRORS
    // =========================================================================
    /// Input or navigation after the session left the page-viewing states.
    #[error("Session is closed for edits (state: {state})")]
    SessionClosed {
        /// Current state name.
        state: &'static str,
    },

    /// A value was entered for a layout field, which carries none.
    #[error("Field '{id}' of type {field_type} does not take a value")]
    NoValue {
        /// Field id.
        id: String,
        /// The field's type tag.
        field_type: String,
    },

    /// A persistence outcome was reported while not submitting.
    #[error("Session is not submitting (state: {state})")]
    NotSubmitting {
        /// Current state name.
        state: &'static str,
    },

    /// The persistence collaborator failed.
    #[error("Failed to persist submission for form '{form_id}': {source}")]
    Persist {
        /// Form the submission belongs to.
        form_id: String,
        /// Collaborator error.
        #[source]
        source: CollaboratorError,
    },

    /// The definition collaborator failed.
    #[error("Failed to load definition for form '{form_id}': {source}")]
    Load {
        /// Requested form.
        form_id: String,
        /// Collaborator error.
        #[source]
        source: CollaboratorError,
    },

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl EngineError {
    pub(crate) fn field_not_found(id: &str) -> Self {
        Self::FieldNotFound { id: id.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
