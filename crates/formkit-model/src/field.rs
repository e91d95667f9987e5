use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ModelError;
use crate::conditional::ConditionalRule;
use crate::field_type::FieldType;
use crate::registry;

/// Type-specific configuration (rows, min/max/step, maxRating, ...).
pub type Properties = serde_json::Map<String, Value>;

/// Option value that switches a select/radio field to its free-text companion.
pub const OTHER_OPTION_VALUE: &str = "__other__";

/// Opaque, immutable field identifier.
///
/// Deserialization goes through [`FieldId::new`], so blank ids never load.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldId(String);

impl FieldId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidFieldId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Mint a fresh random identifier.
    pub fn generate() -> Self {
        Self(format!("field_{}", uuid::Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for FieldId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FieldId> for String {
    fn from(id: FieldId) -> Self {
        id.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for FieldId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FieldId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One selectable choice. Option order is array position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldOption {
    pub label: String,
    pub value: String,
}

impl FieldOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Numeric bounds read from a number field's properties.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumberBounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
}

impl NumberBounds {
    /// Returns true when both bounds are set and `min > max`.
    pub fn is_inverted(&self) -> bool {
        matches!((self.min, self.max), (Some(min), Some(max)) if min > max)
    }
}

/// One schema entry describing a single input or layout element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub id: FieldId,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
    /// Display position; dense `0..n-1` across a well-formed collection.
    pub order: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FieldOption>>,
    #[serde(default)]
    pub properties: Properties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditional: Option<ConditionalRule>,
}

impl Field {
    /// Instantiate a field from registry defaults.
    ///
    /// Options-bearing types are seeded with two placeholder options.
    pub fn from_type_defaults(id: FieldId, field_type: FieldType, order: usize) -> Self {
        let info = registry::lookup(field_type);
        let options = info.has_options.then(|| {
            vec![
                FieldOption::new("Option 1", "option_1"),
                FieldOption::new("Option 2", "option_2"),
            ]
        });
        Self {
            id,
            field_type,
            label: info.default_label.to_string(),
            placeholder: info.default_placeholder.map(str::to_string),
            required: false,
            order,
            options,
            properties: info.default_properties(),
            conditional: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_conditional(mut self, rule: ConditionalRule) -> Self {
        self.conditional = Some(rule);
        self
    }

    pub fn with_options(mut self, options: Vec<FieldOption>) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    pub fn options(&self) -> &[FieldOption] {
        self.options.as_deref().unwrap_or(&[])
    }

    /// Read a numeric property, accepting numbers and numeric strings.
    pub fn number_property(&self, key: &str) -> Option<f64> {
        match self.properties.get(key)? {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn bool_property(&self, key: &str) -> bool {
        matches!(self.properties.get(key), Some(Value::Bool(true)))
    }

    pub fn number_bounds(&self) -> NumberBounds {
        NumberBounds {
            min: self.number_property("min"),
            max: self.number_property("max"),
            step: self.number_property("step"),
        }
    }

    /// Returns true if a select/radio field offers an "Other" free-text choice.
    pub fn allows_other(&self) -> bool {
        self.bool_property("allowOther")
    }

    /// Returns true if a file field accepts several files.
    pub fn accepts_multiple_files(&self) -> bool {
        self.bool_property("multiple")
    }
}
