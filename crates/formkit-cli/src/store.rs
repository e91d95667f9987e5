//! File-backed collaborators for the engine.
//!
//! Definitions are read from `<root>/<form_id>.json`; submissions are
//! written as one JSON file per payload.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info};
use uuid::Uuid;

use formkit_engine::{CollaboratorError, DefinitionSource, SubmissionId, SubmissionStore};
use formkit_model::{FormDefinition, ValueMap};

/// Reads form definitions from a directory of JSON files.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Split a definition file path into a source and its form id.
    pub fn for_file(path: &Path) -> Result<(Self, String)> {
        let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
            bail!("not a form definition file: {}", path.display());
        };
        let root = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        Ok((Self::new(root), stem.to_string()))
    }

    pub fn path_for(&self, form_id: &str) -> PathBuf {
        self.root.join(format!("{form_id}.json"))
    }
}

impl DefinitionSource for DirectorySource {
    fn load_definition(&self, form_id: &str) -> Result<FormDefinition, CollaboratorError> {
        let path = self.path_for(form_id);
        let json = fs::read_to_string(&path)?;
        let definition = FormDefinition::from_json(&json)?;
        debug!(path = %path.display(), "read definition file");
        Ok(definition)
    }
}

/// Writes each submission to `<dir>/<submission_id>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, submission_id: &SubmissionId) -> PathBuf {
        self.dir.join(format!("{submission_id}.json"))
    }
}

impl SubmissionStore for JsonFileStore {
    fn persist(
        &mut self,
        form_id: &str,
        payload: &ValueMap,
    ) -> Result<SubmissionId, CollaboratorError> {
        fs::create_dir_all(&self.dir)?;
        let submission_id = SubmissionId::new(Uuid::new_v4().to_string());
        let record = serde_json::json!({
            "formId": form_id,
            "submissionId": submission_id,
            "data": payload,
        });
        let path = self.path_for(&submission_id);
        fs::write(&path, serde_json::to_string_pretty(&record)?)?;
        info!(form_id, path = %path.display(), "wrote submission");
        Ok(submission_id)
    }
}

/// Parse a definition without the duplicate-id check, for linting.
pub fn read_definition(path: &Path) -> Result<FormDefinition> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("read form definition {}", path.display()))?;
    FormDefinition::from_json(&json)
        .with_context(|| format!("parse form definition {}", path.display()))
}

/// Read a `{key -> value}` JSON object of respondent entries.
pub fn read_values(path: &Path) -> Result<ValueMap> {
    let json =
        fs::read_to_string(path).with_context(|| format!("read values {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("parse values {}", path.display()))
}
