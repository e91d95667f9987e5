//! Form definition data model.
//!
//! Plain, JSON-compatible shapes exchanged with the surrounding CRUD
//! layer, plus the static field-type registry used to seed new fields.
//!
//! # Module Organization
//!
//! - [`field_type`]: the fixed set of field-type tags and their categories
//! - [`registry`]: per-type defaults (label, placeholder, properties)
//! - [`field`]: field records, options and identifiers
//! - [`conditional`]: single-level visibility rules
//! - [`values`]: respondent value map and composite sub-keys
//! - [`theme`], [`settings`], [`definition`]: form-level records
//! - [`issue`]: edit-time definition issues

pub mod conditional;
pub mod definition;
pub mod error;
pub mod field;
pub mod field_type;
pub mod issue;
pub mod registry;
pub mod settings;
pub mod theme;
pub mod values;

pub use conditional::{ConditionalRule, Operator};
pub use definition::FormDefinition;
pub use error::{ModelError, Result};
pub use field::{Field, FieldId, FieldOption, NumberBounds, OTHER_OPTION_VALUE, Properties};
pub use field_type::{FieldCategory, FieldType};
pub use issue::{DefinitionIssue, DefinitionReport, IssueSeverity};
pub use registry::FieldTypeInfo;
pub use settings::{FormSettings, PaginationMode};
pub use theme::{ButtonStyle, FormTheme, LogoPosition};
pub use values::ValueMap;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_report_counts() {
        let report = DefinitionReport {
            issues: vec![
                DefinitionIssue {
                    code: "FK004".to_string(),
                    message: "Conditional targets a layout field".to_string(),
                    severity: IssueSeverity::Error,
                    field_id: Some(FieldId::new("c").unwrap()),
                },
                DefinitionIssue {
                    code: "FK002".to_string(),
                    message: "min is greater than max".to_string(),
                    severity: IssueSeverity::Warning,
                    field_id: Some(FieldId::new("n").unwrap()),
                },
            ],
        };
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert!(report.has_errors());
        assert_eq!(report.issues_for("n").count(), 1);
    }
}
