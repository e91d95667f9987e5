//! Forward-navigation gate for the displayed page.
//!
//! A page may be left forward only when every required, currently visible
//! field holds a non-empty value for its type. Hidden required fields do
//! not block. Backward navigation is never gated.

use serde_json::Value;

use formkit_model::values::{ADDRESS_PARTS, address_part, other_text};
use formkit_model::{Field, FieldType, OTHER_OPTION_VALUE, ValueMap};

use crate::pagination::Page;
use crate::visibility::{as_number, is_visible};

/// Returns true if forward navigation off `page` is permitted.
pub fn can_advance(page: &Page<'_>, values: &ValueMap) -> bool {
    unmet_required(&page.fields, values).is_empty()
}

/// Required, visible fields whose values are still empty.
///
/// The host uses this to explain a disabled "Next".
pub fn unmet_required<'a>(fields: &[&'a Field], values: &ValueMap) -> Vec<&'a Field> {
    fields
        .iter()
        .copied()
        .filter(|field| field.required && field.field_type.carries_value())
        .filter(|field| is_visible(field, values))
        .filter(|field| !is_filled(field, values))
        .collect()
}

/// Whether the field's entry counts as answered for its type.
pub fn is_filled(field: &Field, values: &ValueMap) -> bool {
    let id = field.id.as_str();
    let value = values.get(id);
    match field.field_type {
        FieldType::Text
        | FieldType::Textarea
        | FieldType::Email
        | FieldType::Phone
        | FieldType::Signature => value.is_some_and(has_text),
        FieldType::Number => value.and_then(as_number).is_some(),
        FieldType::Rating => value.and_then(as_number).is_some_and(|rating| rating > 0.0),
        FieldType::Select | FieldType::Radio => match value {
            Some(Value::String(choice)) if choice == OTHER_OPTION_VALUE => {
                values.get(&other_text(id)).is_some_and(has_text)
            }
            Some(choice) => has_text(choice),
            None => false,
        },
        FieldType::Checkbox => match value {
            Some(Value::Array(items)) => !items.is_empty(),
            Some(Value::Bool(checked)) => *checked,
            _ => false,
        },
        FieldType::MultiSelect => matches!(value, Some(Value::Array(items)) if !items.is_empty()),
        FieldType::File => match value {
            Some(Value::Object(_)) => true,
            Some(Value::Array(items)) => !items.is_empty(),
            Some(Value::String(url)) => !url.trim().is_empty(),
            _ => false,
        },
        FieldType::Date | FieldType::Time => {
            matches!(value, Some(Value::String(text)) if !text.trim().is_empty())
        }
        FieldType::Address => address_filled(id, value, values),
        // Not fillable by the respondent; layout types carry nothing.
        FieldType::Hidden | FieldType::Heading | FieldType::Paragraph | FieldType::Divider => {
            true
        }
    }
}

fn has_text(value: &Value) -> bool {
    match value {
        Value::String(text) => !text.trim().is_empty(),
        Value::Number(_) => true,
        _ => false,
    }
}

/// Street, city and zip must all be present, either as sub-keys or as a
/// nested object under the field id.
fn address_filled(id: &str, value: Option<&Value>, values: &ValueMap) -> bool {
    if let Some(Value::Object(parts)) = value {
        return ADDRESS_PARTS
            .iter()
            .all(|part| parts.get(*part).is_some_and(has_text));
    }
    ADDRESS_PARTS
        .iter()
        .all(|part| values.get(&address_part(id, part)).is_some_and(has_text))
}
