//! Static field-type metadata used to seed new fields.
//!
//! The registry is consulted only when a field is created or duplicated.
//! Afterwards a field's label, placeholder and properties are its own.

use serde_json::{Value, json};

use crate::field::Properties;
use crate::field_type::{FieldCategory, FieldType};

/// Metadata describing the defaults of one field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTypeInfo {
    pub field_type: FieldType,
    pub category: FieldCategory,
    pub default_label: &'static str,
    pub default_placeholder: Option<&'static str>,
    pub has_options: bool,
}

impl FieldTypeInfo {
    /// Build the per-type default property map.
    pub fn default_properties(&self) -> Properties {
        let value = match self.field_type {
            FieldType::Textarea => json!({ "rows": 4 }),
            FieldType::Number => json!({ "min": null, "max": null, "step": 1 }),
            FieldType::Rating => json!({ "maxRating": 5 }),
            FieldType::File => json!({ "accept": "*", "maxSizeMb": 10, "multiple": false }),
            FieldType::MultiSelect => json!({ "maxSelections": null }),
            FieldType::Select | FieldType::Radio => json!({ "allowOther": false }),
            FieldType::Hidden => json!({ "defaultValue": "" }),
            FieldType::Heading => json!({ "level": 2 }),
            FieldType::Paragraph => json!({ "content": "" }),
            FieldType::Text
            | FieldType::Email
            | FieldType::Phone
            | FieldType::Checkbox
            | FieldType::Date
            | FieldType::Address
            | FieldType::Signature
            | FieldType::Time
            | FieldType::Divider => json!({}),
        };
        match value {
            Value::Object(map) => map,
            _ => Properties::new(),
        }
    }
}

/// Look up the metadata for a field type.
///
/// Total over [`FieldType`]; unknown tags are rejected earlier, when the
/// tag is parsed.
pub fn lookup(field_type: FieldType) -> FieldTypeInfo {
    let (default_label, default_placeholder) = match field_type {
        FieldType::Text => ("Text Input", Some("Enter text...")),
        FieldType::Textarea => ("Long Text", Some("Enter your answer...")),
        FieldType::Email => ("Email Address", Some("name@example.com")),
        FieldType::Phone => ("Phone Number", Some("+1 (555) 000-0000")),
        FieldType::Number => ("Number", Some("0")),
        FieldType::Select => ("Dropdown", Some("Select an option")),
        FieldType::Checkbox => ("Checkboxes", None),
        FieldType::Radio => ("Multiple Choice", None),
        FieldType::Date => ("Date", None),
        FieldType::File => ("File Upload", None),
        FieldType::Address => ("Address", None),
        FieldType::Signature => ("Signature", None),
        FieldType::Rating => ("Rating", None),
        FieldType::Time => ("Time", None),
        FieldType::Hidden => ("Hidden Field", None),
        FieldType::MultiSelect => ("Multi Select", Some("Select options")),
        FieldType::Heading => ("Section Heading", None),
        FieldType::Paragraph => ("Paragraph text", None),
        FieldType::Divider => ("Divider", None),
    };
    FieldTypeInfo {
        field_type,
        category: field_type.category(),
        default_label,
        default_placeholder,
        has_options: field_type.has_options(),
    }
}

/// Field types belonging to a palette category, in palette order.
pub fn by_category(category: FieldCategory) -> Vec<FieldTypeInfo> {
    FieldType::ALL
        .into_iter()
        .filter(|ty| ty.category() == category)
        .map(lookup)
        .collect()
}
