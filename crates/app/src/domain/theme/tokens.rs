//! Theme Tokens

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// An RGB color with optional alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorToken {
    pub r: u8,
    pub g: u8,
    pub b: u8,

    /// Opacity in `0.0..=1.0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
}

impl ColorToken {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: None }
    }

    /// Space separated channels, the form utility-class frameworks expect
    /// inside `rgb(var(--x) / <alpha>)`. Alpha is not part of the variable.
    #[must_use]
    pub fn to_channels(&self) -> String {
        format!("{} {} {}", self.r, self.g, self.b)
    }
}

/// A token that may be written as a bare number or a CSS string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Number(serde_json::Number),
    Text(String),
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Number(number) => Display::fmt(number, f),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl TokenValue {
    /// Empty text and zero count as unset, so they emit no declaration.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        match self {
            Self::Number(number) => number.as_f64().is_some_and(|value| value == 0.0),
            Self::Text(text) => text.is_empty(),
        }
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<u32> for TokenValue {
    fn from(value: u32) -> Self {
        Self::Number(value.into())
    }
}

/// Theme Config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub colors: ThemeColors,
    pub typography: Typography,
    pub spacing: SpacingScale,
    pub border_radius: RadiusScale,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadows: Option<ShadowScale>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transitions: Option<TransitionScale>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub primary: ColorToken,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<ColorToken>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<ColorToken>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<ColorToken>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<ColorToken>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ColorToken>,

    pub background: ColorVariants,
    pub text: ColorVariants,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<ColorToken>,
}

/// Primary color with optional secondary and tertiary variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorVariants {
    pub primary: ColorToken,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<ColorToken>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tertiary: Option<ColorToken>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: FontFamilies,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<TextStyle>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<TextStyle>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontFamilies {
    pub sans: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mono: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serif: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<TokenValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<TokenValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacingScale {
    pub xs: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,

    #[serde(rename = "2xl", default, skip_serializing_if = "Option::is_none")]
    pub xxl: Option<String>,

    #[serde(rename = "3xl", default, skip_serializing_if = "Option::is_none")]
    pub xxxl: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadiusScale {
    pub sm: String,
    pub md: String,
    pub lg: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowScale {
    pub sm: String,
    pub md: String,
    pub lg: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xl: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionScale {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fast: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slow: Option<String>,
}

impl ThemeConfig {
    /// Every color token in the theme with its location, outermost key first.
    pub fn color_tokens(&self) -> Vec<([&'static str; 2], &ColorToken)> {
        let colors = &self.colors;

        let mut tokens = vec![(["colors", "primary"], &colors.primary)];

        let optional = [
            (["colors", "secondary"], colors.secondary.as_ref()),
            (["colors", "accent"], colors.accent.as_ref()),
            (["colors", "success"], colors.success.as_ref()),
            (["colors", "warning"], colors.warning.as_ref()),
            (["colors", "error"], colors.error.as_ref()),
            (["background", "primary"], Some(&colors.background.primary)),
            (["background", "secondary"], colors.background.secondary.as_ref()),
            (["background", "tertiary"], colors.background.tertiary.as_ref()),
            (["text", "primary"], Some(&colors.text.primary)),
            (["text", "secondary"], colors.text.secondary.as_ref()),
            (["text", "tertiary"], colors.text.tertiary.as_ref()),
            (["colors", "border"], colors.border.as_ref()),
        ];

        tokens.extend(
            optional
                .into_iter()
                .filter_map(|(path, token)| token.map(|token| (path, token))),
        );

        tokens
    }
}
