//! Field type tags and their palette categories.
//!
//! Every consumer (registry defaults, gate, renderer) matches on
//! [`FieldType`] exhaustively, so adding a tag is a compile error until
//! each context handles it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Palette category of a field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldCategory {
    /// Everyday inputs: text, choice, date.
    Basic,
    /// Inputs with richer values or special capture.
    Advanced,
    /// Presentational elements with no value.
    Layout,
}

impl FieldCategory {
    pub const fn all() -> &'static [Self] {
        &[Self::Basic, Self::Advanced, Self::Layout]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldCategory::Basic => "basic",
            FieldCategory::Advanced => "advanced",
            FieldCategory::Layout => "layout",
        }
    }
}

impl fmt::Display for FieldCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed set of field-type tags understood by the editor and renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    Text,
    Textarea,
    Email,
    Phone,
    Number,
    Select,
    Checkbox,
    Radio,
    Date,
    File,
    Address,
    Signature,
    Rating,
    Time,
    Hidden,
    MultiSelect,
    Heading,
    Paragraph,
    Divider,
}

impl FieldType {
    /// All tags in palette order.
    pub const ALL: [FieldType; 19] = [
        FieldType::Text,
        FieldType::Textarea,
        FieldType::Email,
        FieldType::Phone,
        FieldType::Number,
        FieldType::Select,
        FieldType::Checkbox,
        FieldType::Radio,
        FieldType::Date,
        FieldType::File,
        FieldType::Address,
        FieldType::Signature,
        FieldType::Rating,
        FieldType::Time,
        FieldType::Hidden,
        FieldType::MultiSelect,
        FieldType::Heading,
        FieldType::Paragraph,
        FieldType::Divider,
    ];

    /// Returns the wire tag as it appears in definition JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Textarea => "textarea",
            FieldType::Email => "email",
            FieldType::Phone => "phone",
            FieldType::Number => "number",
            FieldType::Select => "select",
            FieldType::Checkbox => "checkbox",
            FieldType::Radio => "radio",
            FieldType::Date => "date",
            FieldType::File => "file",
            FieldType::Address => "address",
            FieldType::Signature => "signature",
            FieldType::Rating => "rating",
            FieldType::Time => "time",
            FieldType::Hidden => "hidden",
            FieldType::MultiSelect => "multiSelect",
            FieldType::Heading => "heading",
            FieldType::Paragraph => "paragraph",
            FieldType::Divider => "divider",
        }
    }

    pub fn category(&self) -> FieldCategory {
        match self {
            FieldType::Text
            | FieldType::Textarea
            | FieldType::Email
            | FieldType::Phone
            | FieldType::Number
            | FieldType::Select
            | FieldType::Checkbox
            | FieldType::Radio
            | FieldType::Date => FieldCategory::Basic,
            FieldType::File
            | FieldType::Address
            | FieldType::Signature
            | FieldType::Rating
            | FieldType::Time
            | FieldType::Hidden
            | FieldType::MultiSelect => FieldCategory::Advanced,
            FieldType::Heading | FieldType::Paragraph | FieldType::Divider => {
                FieldCategory::Layout
            }
        }
    }

    /// Returns true for presentational types (heading, paragraph, divider).
    pub fn is_layout(&self) -> bool {
        self.category() == FieldCategory::Layout
    }

    /// Returns true if the type contributes an entry to the value map.
    ///
    /// Layout types carry nothing, so they are never required, never part
    /// of a payload, and never a valid conditional target.
    pub fn carries_value(&self) -> bool {
        !self.is_layout()
    }

    /// Returns true if the type is configured with a selectable option list.
    pub fn has_options(&self) -> bool {
        matches!(
            self,
            FieldType::Select | FieldType::Checkbox | FieldType::Radio | FieldType::MultiSelect
        )
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = ModelError;

    /// Parse a wire tag. Accepts the camelCase tag case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        FieldType::ALL
            .into_iter()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::UnknownFieldType(s.to_string()))
    }
}
