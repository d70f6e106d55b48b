//! CSS custom property generation.

use crate::domain::theme::tokens::{ColorToken, ThemeConfig, TokenValue};

/// Id of the `<style>` element carrying the theme variables.
pub const STYLE_TAG_ID: &str = "theme-variables";

/// A single CSS custom property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Property name including the leading `--`.
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Default)]
struct Declarations(Vec<Declaration>);

impl Declarations {
    fn push(&mut self, property: &str, value: impl Into<String>) {
        self.0.push(Declaration::new(property, value));
    }

    fn push_color(&mut self, property: &str, color: &ColorToken) {
        self.push(property, color.to_channels());
    }

    fn push_optional_color(&mut self, property: &str, color: Option<&ColorToken>) {
        if let Some(color) = color {
            self.push_color(property, color);
        }
    }

    fn push_optional(&mut self, property: &str, value: Option<&String>) {
        if let Some(value) = value.filter(|value| !value.is_empty()) {
            self.push(property, value.as_str());
        }
    }

    fn push_optional_token(&mut self, property: &str, value: Option<&TokenValue>) {
        if let Some(value) = value.filter(|value| !value.is_unset()) {
            self.push(property, value.to_string());
        }
    }
}

impl ThemeConfig {
    /// Ordered custom properties for this theme.
    ///
    /// Optional tokens that are absent produce no declaration.
    #[must_use]
    pub fn declarations(&self) -> Vec<Declaration> {
        let mut out = Declarations::default();

        let colors = &self.colors;

        out.push_color("--color-primary", &colors.primary);
        out.push_optional_color("--color-secondary", colors.secondary.as_ref());
        out.push_optional_color("--color-accent", colors.accent.as_ref());
        out.push_optional_color("--color-success", colors.success.as_ref());
        out.push_optional_color("--color-warning", colors.warning.as_ref());
        out.push_optional_color("--color-error", colors.error.as_ref());

        out.push_color("--bg-primary", &colors.background.primary);
        out.push_optional_color("--bg-secondary", colors.background.secondary.as_ref());
        out.push_optional_color("--bg-tertiary", colors.background.tertiary.as_ref());

        out.push_color("--text-primary", &colors.text.primary);
        out.push_optional_color("--text-secondary", colors.text.secondary.as_ref());
        out.push_optional_color("--text-tertiary", colors.text.tertiary.as_ref());

        out.push_optional_color("--border-color", colors.border.as_ref());

        let typography = &self.typography;

        out.push("--font-sans", typography.font_family.sans.as_str());
        out.push_optional("--font-mono", typography.font_family.mono.as_ref());
        out.push_optional("--font-serif", typography.font_family.serif.as_ref());

        if let Some(heading) = &typography.heading {
            out.push_optional_token("--font-size-heading", heading.font_size.as_ref());
            out.push_optional_token("--font-weight-heading", heading.font_weight.as_ref());
        }

        if let Some(body) = &typography.body {
            out.push_optional_token("--font-size-body", body.font_size.as_ref());
            out.push_optional_token("--font-weight-body", body.font_weight.as_ref());
        }

        let spacing = &self.spacing;

        out.push("--spacing-xs", spacing.xs.as_str());
        out.push("--spacing-sm", spacing.sm.as_str());
        out.push("--spacing-md", spacing.md.as_str());
        out.push("--spacing-lg", spacing.lg.as_str());
        out.push("--spacing-xl", spacing.xl.as_str());
        out.push_optional("--spacing-2xl", spacing.xxl.as_ref());
        out.push_optional("--spacing-3xl", spacing.xxxl.as_ref());

        let radius = &self.border_radius;

        out.push("--border-radius-sm", radius.sm.as_str());
        out.push("--border-radius-md", radius.md.as_str());
        out.push("--border-radius-lg", radius.lg.as_str());
        out.push_optional("--border-radius-full", radius.full.as_ref());

        if let Some(shadows) = &self.shadows {
            out.push("--shadow-sm", shadows.sm.as_str());
            out.push("--shadow-md", shadows.md.as_str());
            out.push("--shadow-lg", shadows.lg.as_str());
            out.push_optional("--shadow-xl", shadows.xl.as_ref());
        }

        if let Some(transitions) = &self.transitions {
            out.push_optional("--transition-fast", transitions.fast.as_ref());
            out.push_optional("--transition-base", transitions.base.as_ref());
            out.push_optional("--transition-slow", transitions.slow.as_ref());
        }

        out.0
    }
}

/// Render a theme as a `:root` declaration block.
#[must_use]
pub fn tokens_to_declaration_block(theme: &ThemeConfig) -> String {
    let lines: Vec<String> = theme
        .declarations()
        .iter()
        .map(|declaration| format!("{}: {};", declaration.property, declaration.value))
        .collect();

    format!(":root {{\n  {}\n}}", lines.join("\n  "))
}

/// Wrap the declaration block in a `<style>` element for server-side injection.
#[must_use]
pub fn theme_to_style_tag(theme: &ThemeConfig) -> String {
    format!(
        "<style id=\"{STYLE_TAG_ID}\">{}</style>",
        tokens_to_declaration_block(theme)
    )
}

/// Read custom property declarations back out of CSS text.
///
/// Lines that are not `--name: value;` declarations are skipped. Values are
/// read up to the first `;`, so a value holding `;` or a line break does not
/// survive the trip; [`ThemeConfigSchema`](crate::domain::theme::ThemeConfigSchema)
/// rejects such values.
#[must_use]
pub fn parse_declaration_block(block: &str) -> Vec<Declaration> {
    block
        .lines()
        .filter_map(|line| {
            let line = line.trim();

            if !line.starts_with("--") {
                return None;
            }

            let (property, value) = line.split_once(':')?;
            let value = value.trim();
            let value = value.strip_suffix(';').unwrap_or(value).trim_end();

            Some(Declaration::new(property.trim(), value))
        })
        .collect()
}
