use serde::{Deserialize, Serialize};

use crate::field::FieldId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// A problem found while checking a form definition at edit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionIssue {
    /// Stable check code (e.g., "FK002").
    pub code: String,
    /// Human-readable message describing the issue.
    pub message: String,
    pub severity: IssueSeverity,
    /// Field the issue is attached to (if applicable).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_id: Option<FieldId>,
}

/// Edit-time report for one form definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionReport {
    pub issues: Vec<DefinitionIssue>,
}

impl DefinitionReport {
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Warning)
            .count()
    }

    /// Errors block saving; warnings are surfaced only.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn issues_for<'a>(&'a self, field_id: &'a str) -> impl Iterator<Item = &'a DefinitionIssue> {
        self.issues
            .iter()
            .filter(move |issue| issue.field_id.as_ref().is_some_and(|id| id.as_str() == field_id))
    }

    pub fn has_code(&self, code: &str) -> bool {
        self.issues.iter().any(|issue| issue.code == code)
    }
}
