//! Theme resolution: maps a theme record to concrete style parameters.
//!
//! Pure mapping with no state. The renderer paints; this only computes.

pub mod color;

use serde::Serialize;

use formkit_model::{ButtonStyle, FormTheme, LogoPosition};

pub use color::lighten;

/// Lightness step (percentage points) from primary to the gradient's end stop.
pub const GRADIENT_LIGHTEN_AMOUNT: f64 = 20.0;

/// Radius forcing a pill shape regardless of the theme radius.
pub const PILL_RADIUS: &str = "9999px";

const WHITE: &str = "#ffffff";
const NONE: &str = "none";
const TRANSPARENT: &str = "transparent";
const ELEVATED_SHADOW: &str = "0 4px 14px 0 rgba(0, 0, 0, 0.15)";

/// CSS-ready parameters for the form's buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonStyleParams {
    pub background: String,
    pub color: String,
    pub border: String,
    pub box_shadow: String,
    pub border_radius: String,
}

/// Everything a renderer needs from the theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTheme {
    pub primary_color: String,
    pub background_color: String,
    pub text_color: String,
    pub accent_color: String,
    pub font_family: String,
    pub border_radius: String,
    /// Flexbox alignment of the logo row.
    pub logo_alignment: String,
    pub button: ButtonStyleParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,
}

pub fn resolve_button_style(theme: &FormTheme) -> ButtonStyleParams {
    let primary = theme.primary_color.as_str();
    let radius = format!("{}px", theme.border_radius);
    match theme.button_style {
        ButtonStyle::Filled => ButtonStyleParams {
            background: primary.to_string(),
            color: WHITE.to_string(),
            border: NONE.to_string(),
            box_shadow: NONE.to_string(),
            border_radius: radius,
        },
        ButtonStyle::Outlined => ButtonStyleParams {
            background: TRANSPARENT.to_string(),
            color: primary.to_string(),
            border: format!("2px solid {primary}"),
            box_shadow: NONE.to_string(),
            border_radius: radius,
        },
        ButtonStyle::Minimal => ButtonStyleParams {
            background: TRANSPARENT.to_string(),
            color: primary.to_string(),
            border: NONE.to_string(),
            box_shadow: NONE.to_string(),
            border_radius: radius,
        },
        ButtonStyle::Rounded => ButtonStyleParams {
            background: primary.to_string(),
            color: WHITE.to_string(),
            border: NONE.to_string(),
            box_shadow: NONE.to_string(),
            border_radius: PILL_RADIUS.to_string(),
        },
        ButtonStyle::Gradient => ButtonStyleParams {
            background: format!(
                "linear-gradient(135deg, {primary} 0%, {} 100%)",
                lighten(primary, GRADIENT_LIGHTEN_AMOUNT)
            ),
            color: WHITE.to_string(),
            border: NONE.to_string(),
            box_shadow: ELEVATED_SHADOW.to_string(),
            border_radius: radius,
        },
    }
}

pub fn resolve_theme(theme: &FormTheme) -> ResolvedTheme {
    ResolvedTheme {
        primary_color: theme.primary_color.clone(),
        background_color: theme.background_color.clone(),
        text_color: theme.text_color.clone(),
        accent_color: theme.accent_color.clone(),
        font_family: font_stack(&theme.font_family),
        border_radius: format!("{}px", theme.border_radius),
        logo_alignment: logo_alignment(theme.logo_position).to_string(),
        button: resolve_button_style(theme),
        custom_css: theme.custom_css.as_deref().and_then(sanitize_css),
    }
}

fn logo_alignment(position: LogoPosition) -> &'static str {
    match position {
        LogoPosition::Left => "flex-start",
        LogoPosition::Center => "center",
        LogoPosition::Right => "flex-end",
    }
}

fn font_stack(family: &str) -> String {
    let family = family.trim();
    if family.is_empty() {
        "system-ui, sans-serif".to_string()
    } else {
        format!("{family}, system-ui, sans-serif")
    }
}

/// Author CSS is injected into a `<style>` element; `<` cannot close it.
fn sanitize_css(css: &str) -> Option<String> {
    let trimmed = css.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.replace('<', "\\3c "))
}
