//! Conditional visibility evaluation.
//!
//! Results depend on the current value map and are never cached: every
//! input event can flip a field, so callers re-evaluate after each change.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::trace;

use formkit_model::{ConditionalRule, Field, Operator, ValueMap};

/// Visibility of each field, keyed by field id.
pub type VisibilityMap = BTreeMap<String, bool>;

/// Decide whether a field is shown for the given values.
///
/// Fields without a rule are always visible. A rule whose target has no
/// entry in `values` hides the field (fail-closed), whatever the operator;
/// a dangling target id behaves the same way.
pub fn is_visible(field: &Field, values: &ValueMap) -> bool {
    let Some(rule) = &field.conditional else {
        return true;
    };
    let visible = rule_matches(rule, values);
    trace!(field_id = %field.id, target = %rule.field_id, operator = %rule.operator, visible, "evaluated condition");
    visible
}

/// Evaluate one rule against the values.
pub fn rule_matches(rule: &ConditionalRule, values: &ValueMap) -> bool {
    match values.get(rule.field_id.as_str()) {
        Some(target) => apply_operator(rule.operator, target, &rule.value),
        None => false,
    }
}

/// Visibility of every field in `fields`.
pub fn visibility_map<'a, I>(fields: I, values: &ValueMap) -> VisibilityMap
where
    I: IntoIterator<Item = &'a Field>,
{
    fields
        .into_iter()
        .map(|field| (field.id.to_string(), is_visible(field, values)))
        .collect()
}

/// The subset of `fields` currently shown, preserving input order.
pub fn visible_fields<'a, I>(fields: I, values: &ValueMap) -> Vec<&'a Field>
where
    I: IntoIterator<Item = &'a Field>,
{
    fields
        .into_iter()
        .filter(|field| is_visible(field, values))
        .collect()
}

fn apply_operator(operator: Operator, target: &Value, expected: &Value) -> bool {
    match operator {
        Operator::Equals => strict_equals(target, expected),
        Operator::NotEquals => !strict_equals(target, expected),
        Operator::Contains => contains(target, expected),
        Operator::GreaterThan => compare_numbers(target, expected, |a, b| a > b),
        Operator::LessThan => compare_numbers(target, expected, |a, b| a < b),
    }
}

/// Equality without type coercion; numbers compare by value.
fn strict_equals(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
        _ => left == right,
    }
}

/// Sequence membership for arrays, substring search for strings.
fn contains(target: &Value, expected: &Value) -> bool {
    match target {
        Value::Array(items) => items.iter().any(|item| strict_equals(item, expected)),
        Value::String(text) => match expected {
            Value::String(needle) => text.contains(needle.as_str()),
            Value::Number(_) | Value::Bool(_) => text.contains(&expected.to_string()),
            _ => false,
        },
        _ => false,
    }
}

fn compare_numbers(target: &Value, expected: &Value, cmp: impl Fn(f64, f64) -> bool) -> bool {
    match (as_number(target), as_number(expected)) {
        (Some(a), Some(b)) => cmp(a, b),
        _ => false,
    }
}

/// Numeric view of a value; numeric strings are coerced, blanks are not.
pub(crate) fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_compare_by_value() {
        assert!(strict_equals(&json!(5), &json!(5.0)));
        assert!(!strict_equals(&json!(5), &json!("5")));
    }

    #[test]
    fn contains_handles_arrays_and_strings() {
        assert!(contains(&json!(["a", "b"]), &json!("b")));
        assert!(!contains(&json!(["a", "b"]), &json!("c")));
        assert!(contains(&json!("hello world"), &json!("lo w")));
        assert!(contains(&json!("150"), &json!(5)));
        assert!(!contains(&json!(42), &json!(4)));
    }

    #[test]
    fn numeric_comparison_coerces_strings() {
        assert!(compare_numbers(&json!("10"), &json!(5), |a, b| a > b));
        assert!(!compare_numbers(&json!("ten"), &json!(5), |a, b| a > b));
        assert!(!compare_numbers(&json!(""), &json!(-1), |a, b| a > b));
    }
}
