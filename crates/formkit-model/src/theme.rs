use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Visual contract of the submit/navigation buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    /// Solid primary background, white text.
    #[default]
    Filled,
    /// Transparent background, primary border and text.
    Outlined,
    /// No container decoration.
    Minimal,
    /// Filled with a pill radius.
    Rounded,
    /// Primary-to-lighter gradient with an elevated shadow.
    Gradient,
}

impl ButtonStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonStyle::Filled => "filled",
            ButtonStyle::Outlined => "outlined",
            ButtonStyle::Minimal => "minimal",
            ButtonStyle::Rounded => "rounded",
            ButtonStyle::Gradient => "gradient",
        }
    }
}

impl fmt::Display for ButtonStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonStyle {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "filled" => Ok(ButtonStyle::Filled),
            "outlined" => Ok(ButtonStyle::Outlined),
            "minimal" => Ok(ButtonStyle::Minimal),
            "rounded" => Ok(ButtonStyle::Rounded),
            "gradient" => Ok(ButtonStyle::Gradient),
            _ => Err(ModelError::UnknownButtonStyle(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoPosition {
    Left,
    #[default]
    Center,
    Right,
}

/// Author-edited theme snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormTheme {
    pub primary_color: String,
    pub background_color: String,
    pub text_color: String,
    pub accent_color: String,
    pub font_family: String,
    /// Corner radius in pixels.
    pub border_radius: u32,
    pub button_style: ButtonStyle,
    pub logo_position: LogoPosition,
    #[serde(rename = "customCSS", skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,
}

impl Default for FormTheme {
    fn default() -> Self {
        Self {
            primary_color: "#3b82f6".to_string(),
            background_color: "#ffffff".to_string(),
            text_color: "#1f2937".to_string(),
            accent_color: "#10b981".to_string(),
            font_family: "Inter".to_string(),
            border_radius: 8,
            button_style: ButtonStyle::Filled,
            logo_position: LogoPosition::Center,
            custom_css: None,
        }
    }
}

impl FormTheme {
    pub fn with_button_style(mut self, style: ButtonStyle) -> Self {
        self.button_style = style;
        self
    }

    pub fn with_primary_color(mut self, color: impl Into<String>) -> Self {
        self.primary_color = color.into();
        self
    }
}
