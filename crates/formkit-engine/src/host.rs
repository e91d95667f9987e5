//! Collaborators supplied by the host application.
//!
//! The engine performs no I/O; persistence and definition loading are
//! delegated through these traits. Both are synchronous from the engine's
//! point of view: the host resolves its own timeouts and retries.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use formkit_model::{FormDefinition, ValueMap};

use crate::builder::ensure_unique_ids;
use crate::error::{CollaboratorError, EngineError, Result};

/// Identifier assigned to a persisted submission by the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(String);

impl SubmissionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Persists a completed value map.
pub trait SubmissionStore {
    fn persist(
        &mut self,
        form_id: &str,
        payload: &ValueMap,
    ) -> std::result::Result<SubmissionId, CollaboratorError>;
}

/// Loads a stored form definition.
pub trait DefinitionSource {
    fn load_definition(&self, form_id: &str)
    -> std::result::Result<FormDefinition, CollaboratorError>;
}

/// Load a definition and reject it if field ids collide.
pub fn load_definition<S>(source: &S, form_id: &str) -> Result<FormDefinition>
where
    S: DefinitionSource + ?Sized,
{
    let definition = source
        .load_definition(form_id)
        .map_err(|error| EngineError::Load {
            form_id: form_id.to_string(),
            source: error,
        })?;
    ensure_unique_ids(&definition.fields)?;
    debug!(form_id, fields = definition.fields.len(), "loaded definition");
    Ok(definition)
}
