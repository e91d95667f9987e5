use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::field::Field;
use crate::settings::FormSettings;
use crate::theme::FormTheme;

/// A complete form as exchanged with the CRUD layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDefinition {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub settings: FormSettings,
    #[serde(default)]
    pub theme: FormTheme,
}

impl FormDefinition {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            fields: Vec::new(),
            settings: FormSettings::default(),
            theme: FormTheme::default(),
        }
    }

    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_settings(mut self, settings: FormSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Parse a definition from JSON. Unknown field-type tags are rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Fields sorted by display order. Ties keep their stored position.
    pub fn sorted_fields(&self) -> Vec<&Field> {
        let mut ordered: Vec<&Field> = self.fields.iter().collect();
        ordered.sort_by_key(|field| field.order);
        ordered
    }

    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.id.as_str() == id)
    }
}
