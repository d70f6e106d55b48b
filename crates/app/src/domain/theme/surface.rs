//! Applying themes to a rendering surface.

use std::collections::BTreeMap;

use crate::domain::theme::{declarations::Declaration, tokens::ThemeConfig};

/// Something custom properties can be written onto.
pub trait ThemeSurface {
    /// Whether a live document is attached. Surfaces without one ignore themes.
    fn has_document(&self) -> bool;

    fn set_property(&mut self, property: &str, value: &str);
}

/// A surface with no document, such as a server render pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl ThemeSurface for Headless {
    fn has_document(&self) -> bool {
        false
    }

    fn set_property(&mut self, _property: &str, _value: &str) {}
}

/// Inline style properties of a document root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    properties: BTreeMap<String, String>,
}

impl StyleMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties.get(property).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    #[must_use]
    pub fn into_properties(self) -> BTreeMap<String, String> {
        self.properties
    }
}

impl ThemeSurface for StyleMap {
    fn has_document(&self) -> bool {
        true
    }

    fn set_property(&mut self, property: &str, value: &str) {
        self.properties
            .insert(property.to_string(), value.to_string());
    }
}

/// Write every theme declaration onto `surface`.
///
/// Does nothing when the surface has no live document.
pub fn apply_to_document(theme: &ThemeConfig, surface: &mut dyn ThemeSurface) {
    if !surface.has_document() {
        return;
    }

    for Declaration { property, value } in theme.declarations() {
        surface.set_property(&property, &value);
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::theme::declarations::{parse_declaration_block, tokens_to_declaration_block},
        test::themes::full_theme_json,
    };

    use super::*;

    #[test]
    fn applied_properties_match_the_generated_block() -> TestResult {
        let theme: ThemeConfig = serde_json::from_value(full_theme_json())?;
        let mut style = StyleMap::new();

        apply_to_document(&theme, &mut style);

        let generated = parse_declaration_block(&tokens_to_declaration_block(&theme));

        assert_eq!(style.len(), generated.len());

        for declaration in generated {
            assert_eq!(style.get(&declaration.property), Some(declaration.value.as_str()));
        }

        Ok(())
    }

    #[test]
    fn headless_surface_is_left_untouched() -> TestResult {
        struct Recording(Vec<String>);

        impl ThemeSurface for Recording {
            fn has_document(&self) -> bool {
                false
            }

            fn set_property(&mut self, property: &str, _value: &str) {
                self.0.push(property.to_string());
            }
        }

        let theme: ThemeConfig = serde_json::from_value(full_theme_json())?;
        let mut surface = Recording(Vec::new());

        apply_to_document(&theme, &mut surface);
        apply_to_document(&theme, &mut Headless);

        assert!(surface.0.is_empty());

        Ok(())
    }
}
