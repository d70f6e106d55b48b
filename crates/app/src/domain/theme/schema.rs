//! Theme Schema

use serde_json::Value;

use crate::{
    domain::theme::tokens::ThemeConfig,
    schema::{Schema, ValidationError, ValidationIssue, decode},
};

/// Validates raw JSON into a [`ThemeConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeConfigSchema;

impl Schema for ThemeConfigSchema {
    type Output = ThemeConfig;

    fn parse(&self, value: &Value) -> Result<ThemeConfig, ValidationError> {
        let theme: ThemeConfig = decode(value)?;

        let mut issues: Vec<ValidationIssue> = theme
            .color_tokens()
            .into_iter()
            .filter_map(|([group, name], token)| {
                let alpha = token.alpha?;

                (!(0.0..=1.0).contains(&alpha)).then(|| {
                    ValidationIssue::new(
                        color_path(group, name),
                        format!("alpha must be between 0 and 1, got {alpha}"),
                    )
                })
            })
            .collect();

        unsafe_values(value, &mut Vec::new(), &mut issues);

        if issues.is_empty() {
            Ok(theme)
        } else {
            Err(ValidationError::new(issues))
        }
    }
}

/// Characters that would end a declaration early or break the block.
const FORBIDDEN_IN_VALUES: [char; 5] = [';', '{', '}', '\n', '\r'];

fn unsafe_values(value: &Value, path: &mut Vec<String>, issues: &mut Vec<ValidationIssue>) {
    match value {
        Value::String(text) if text.contains(FORBIDDEN_IN_VALUES) => {
            issues.push(ValidationIssue::new(
                path.clone(),
                "value must not contain `;`, braces or line breaks",
            ));
        }
        Value::Object(fields) => {
            for (key, field) in fields {
                path.push(key.clone());
                unsafe_values(field, path, issues);
                path.pop();
            }
        }
        _ => {}
    }
}

fn color_path(group: &str, name: &str) -> Vec<String> {
    match group {
        "colors" => vec!["colors".to_string(), name.to_string(), "alpha".to_string()],
        nested => vec![
            "colors".to_string(),
            nested.to_string(),
            name.to_string(),
            "alpha".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use crate::test::themes::{full_theme_json, minimal_theme_json};

    use super::*;

    #[test]
    fn accepts_minimal_and_full_themes() -> TestResult {
        ThemeConfigSchema.parse(&minimal_theme_json())?;
        ThemeConfigSchema.parse(&full_theme_json())?;

        Ok(())
    }

    #[test]
    fn rejects_alpha_out_of_range() {
        let mut value = minimal_theme_json();
        value["colors"]["background"]["primary"]["alpha"] = json!(1.5);

        let result = ThemeConfigSchema.parse(&value);

        let Err(error) = result else {
            panic!("expected validation error, got {result:?}");
        };

        assert_eq!(
            error.issues()[0].path,
            vec!["colors", "background", "primary", "alpha"]
        );
    }

    #[test]
    fn rejects_missing_required_tokens() {
        let mut value = minimal_theme_json();

        if let Some(spacing) = value["spacing"].as_object_mut() {
            spacing.remove("md");
        }

        let result = ThemeConfigSchema.parse(&value);

        assert!(result.is_err(), "expected validation error, got {result:?}");
    }

    #[test]
    fn rejects_values_that_would_break_the_declaration_block() {
        let mut value = minimal_theme_json();
        value["typography"]["fontFamily"]["mono"] = json!("Fira;\nMono");
        value["spacing"]["2xl"] = json!("3rem }");

        let result = ThemeConfigSchema.parse(&value);

        let Err(error) = result else {
            panic!("expected validation error, got {result:?}");
        };

        let paths: Vec<String> = error
            .issues()
            .iter()
            .map(|issue| issue.path.join("."))
            .collect();

        assert!(paths.contains(&"typography.fontFamily.mono".to_string()), "{paths:?}");
        assert!(paths.contains(&"spacing.2xl".to_string()), "{paths:?}");
    }

    #[test]
    fn rejects_channels_outside_byte_range() {
        let mut value = minimal_theme_json();
        value["colors"]["primary"]["r"] = json!(256);

        assert!(ThemeConfigSchema.parse(&value).is_err());
    }

    #[test]
    fn shadows_block_requires_its_mandatory_sizes() {
        let mut value = minimal_theme_json();
        value["shadows"] = json!({ "sm": "0 1px 2px black" });

        assert!(ThemeConfigSchema.parse(&value).is_err());
    }
}
