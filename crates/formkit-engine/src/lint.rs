//! Edit-time checks over a field definition list.
//!
//! Checks report problems to the author; none of them repairs the
//! definition. Codes are stable so hosts can filter or translate them.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use formkit_model::{
    DefinitionIssue, DefinitionReport, Field, FieldId, FieldType, IssueSeverity,
};

use crate::builder::orders_dense;
use crate::options::{LintOptions, RangePolicy};

pub const DUPLICATE_ID: &str = "FK001";
pub const INVERTED_RANGE: &str = "FK002";
pub const MISSING_TARGET: &str = "FK003";
pub const LAYOUT_TARGET: &str = "FK004";
pub const SELF_TARGET: &str = "FK005";
pub const NO_OPTIONS: &str = "FK006";
pub const DUPLICATE_OPTION: &str = "FK007";
pub const INVALID_RATING: &str = "FK008";
pub const SPARSE_ORDER: &str = "FK009";

/// Check a field list and collect every issue found.
pub fn lint(fields: &[Field], options: &LintOptions) -> DefinitionReport {
    let mut issues = Vec::new();
    let by_id: HashMap<&str, &Field> = fields
        .iter()
        .map(|field| (field.id.as_str(), field))
        .collect();

    let mut seen = HashSet::new();
    for field in fields {
        if !seen.insert(field.id.as_str()) {
            issues.push(issue(
                DUPLICATE_ID,
                format!("Field id '{}' is used more than once", field.id),
                IssueSeverity::Error,
                Some(&field.id),
            ));
        }
        check_field(field, &by_id, options, &mut issues);
    }

    if !orders_dense(fields) {
        issues.push(issue(
            SPARSE_ORDER,
            "Field orders are not contiguous from 0; display order is re-derived by sorting"
                .to_string(),
            IssueSeverity::Warning,
            None,
        ));
    }

    debug!(fields = fields.len(), issues = issues.len(), "linted definition");
    DefinitionReport { issues }
}

fn check_field(
    field: &Field,
    by_id: &HashMap<&str, &Field>,
    options: &LintOptions,
    issues: &mut Vec<DefinitionIssue>,
) {
    if field.field_type == FieldType::Number && field.number_bounds().is_inverted() {
        let severity = match options.numeric_range {
            RangePolicy::Warn => IssueSeverity::Warning,
            RangePolicy::Block => IssueSeverity::Error,
        };
        issues.push(issue(
            INVERTED_RANGE,
            format!("'{}': minimum is greater than maximum", field.label),
            severity,
            Some(&field.id),
        ));
    }

    if field.field_type == FieldType::Rating
        && field.number_property("maxRating").is_some_and(|max| max < 1.0)
    {
        issues.push(issue(
            INVALID_RATING,
            format!("'{}': maxRating must be at least 1", field.label),
            IssueSeverity::Warning,
            Some(&field.id),
        ));
    }

    if field.field_type.has_options() {
        check_options(field, issues);
    }

    if let Some(rule) = &field.conditional {
        let target = rule.field_id.as_str();
        if target == field.id.as_str() {
            issues.push(issue(
                SELF_TARGET,
                format!("'{}': condition depends on the field itself", field.label),
                IssueSeverity::Error,
                Some(&field.id),
            ));
        } else {
            match by_id.get(target) {
                None => {
                    let severity = if options.dangling_conditional_is_error {
                        IssueSeverity::Error
                    } else {
                        IssueSeverity::Warning
                    };
                    issues.push(issue(
                        MISSING_TARGET,
                        format!(
                            "'{}': condition refers to missing field '{target}'; the field stays hidden",
                            field.label
                        ),
                        severity,
                        Some(&field.id),
                    ));
                }
                Some(target_field) if target_field.field_type.is_layout() => {
                    issues.push(issue(
                        LAYOUT_TARGET,
                        format!(
                            "'{}': condition refers to layout field '{target}', which has no value",
                            field.label
                        ),
                        IssueSeverity::Error,
                        Some(&field.id),
                    ));
                }
                Some(_) => {}
            }
        }
    }
}

fn check_options(field: &Field, issues: &mut Vec<DefinitionIssue>) {
    let options = field.options();
    if options.is_empty() {
        issues.push(issue(
            NO_OPTIONS,
            format!("'{}': no options to choose from", field.label),
            IssueSeverity::Warning,
            Some(&field.id),
        ));
        return;
    }
    let mut values = HashSet::new();
    let mut reported = HashSet::new();
    for option in options {
        if !values.insert(option.value.as_str()) && reported.insert(option.value.as_str()) {
            issues.push(issue(
                DUPLICATE_OPTION,
                format!(
                    "'{}': option value '{}' appears more than once",
                    field.label, option.value
                ),
                IssueSeverity::Warning,
                Some(&field.id),
            ));
        }
    }
}

fn issue(
    code: &str,
    message: String,
    severity: IssueSeverity,
    field_id: Option<&FieldId>,
) -> DefinitionIssue {
    DefinitionIssue {
        code: code.to_string(),
        message,
        severity,
        field_id: field_id.cloned(),
    }
}
