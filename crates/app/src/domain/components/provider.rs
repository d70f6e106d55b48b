//! Component Providers
//!
//! A provider plays the part of a module loader: given an import path it
//! returns the module's exports. Modules are registered explicitly when the
//! process starts.

use std::{collections::HashMap, fmt::Debug, sync::Arc};

use async_trait::async_trait;
use mockall::automock;

use crate::domain::components::errors::ComponentResolutionError;

/// A renderable component implementation.
pub trait Component: Send + Sync + Debug {
    fn name(&self) -> &str;
}

/// Shared handle to a loaded component.
pub type ComponentRef = Arc<dyn Component>;

/// A component known only by name, rendered by the host UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticComponent {
    name: String,
}

impl StaticComponent {
    pub fn shared(name: impl Into<String>) -> ComponentRef {
        Arc::new(Self { name: name.into() })
    }
}

impl Component for StaticComponent {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Exports of an imported module.
#[derive(Debug, Clone, Default)]
pub struct ComponentModule {
    pub default: Option<ComponentRef>,

    /// Named exports in declaration order.
    pub exports: Vec<(String, ComponentRef)>,
}

impl ComponentModule {
    #[must_use]
    pub fn with_default(mut self, component: ComponentRef) -> Self {
        self.default = Some(component);
        self
    }

    #[must_use]
    pub fn with_export(mut self, name: impl Into<String>, component: ComponentRef) -> Self {
        self.exports.push((name.into(), component));
        self
    }

    /// Pick the component for `name`: the default export, then the export
    /// called `name`, then the first export.
    #[must_use]
    pub fn select(&self, name: &str) -> Option<ComponentRef> {
        self.default
            .clone()
            .or_else(|| {
                self.exports
                    .iter()
                    .find(|(export, _)| export == name)
                    .map(|(_, component)| Arc::clone(component))
            })
            .or_else(|| {
                self.exports
                    .first()
                    .map(|(_, component)| Arc::clone(component))
            })
    }
}

#[automock]
#[async_trait]
pub trait ComponentProvider: Send + Sync {
    /// Import the module at `import_path`.
    async fn import(&self, import_path: &str) -> Result<ComponentModule, ComponentResolutionError>;
}

/// Provider over a fixed table of modules.
#[derive(Debug, Clone, Default)]
pub struct StaticComponentProvider {
    modules: HashMap<String, ComponentModule>,
}

impl StaticComponentProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the module at `import_path`.
    #[must_use]
    pub fn with_module(mut self, import_path: impl Into<String>, module: ComponentModule) -> Self {
        self.modules.insert(import_path.into(), module);
        self
    }
}

#[async_trait]
impl ComponentProvider for StaticComponentProvider {
    async fn import(&self, import_path: &str) -> Result<ComponentModule, ComponentResolutionError> {
        self.modules
            .get(import_path)
            .cloned()
            .ok_or_else(|| ComponentResolutionError::ModuleNotFound {
                import_path: import_path.to_string(),
            })
    }
}

/// Provider serving the modules referenced by
/// [`default_component_map`](crate::domain::components::default_component_map).
#[must_use]
pub fn builtin_provider() -> StaticComponentProvider {
    StaticComponentProvider::new()
        .with_module(
            "@repo/commerce/ui",
            ComponentModule::default()
                .with_export("ProductList", StaticComponent::shared("ProductList"))
                .with_export("ProductCard", StaticComponent::shared("ProductCard")),
        )
        .with_module(
            "@repo/ai-editor/ui",
            ComponentModule::default()
                .with_export("VisualEditor", StaticComponent::shared("VisualEditor")),
        )
        .with_module(
            "@repo/ui/components/Button",
            ComponentModule::default().with_default(StaticComponent::shared("Button")),
        )
        .with_module(
            "@repo/ui/components/Container",
            ComponentModule::default().with_default(StaticComponent::shared("Container")),
        )
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::components::map::default_component_map;

    use super::*;

    #[test]
    fn select_prefers_default_export() {
        let module = ComponentModule::default()
            .with_export("Hero", StaticComponent::shared("Hero"))
            .with_default(StaticComponent::shared("Fallback"));

        assert_eq!(module.select("Hero").map(|c| c.name().to_string()), Some("Fallback".into()));
    }

    #[test]
    fn select_matches_named_export_before_first() {
        let module = ComponentModule::default()
            .with_export("Banner", StaticComponent::shared("Banner"))
            .with_export("Hero", StaticComponent::shared("Hero"));

        assert_eq!(module.select("Hero").map(|c| c.name().to_string()), Some("Hero".into()));
        assert_eq!(module.select("Other").map(|c| c.name().to_string()), Some("Banner".into()));
    }

    #[test]
    fn select_on_empty_module_is_none() {
        assert!(ComponentModule::default().select("Hero").is_none());
    }

    #[tokio::test]
    async fn unknown_module_is_not_found() {
        let result = StaticComponentProvider::new().import("@missing").await;

        assert_eq!(
            result.err(),
            Some(ComponentResolutionError::ModuleNotFound {
                import_path: "@missing".to_string()
            })
        );
    }

    #[tokio::test]
    async fn builtin_provider_resolves_every_default_entry() -> TestResult {
        let provider = builtin_provider();

        for entry in default_component_map().values() {
            let module = provider.import(&entry.import_path).await?;
            let component = module.select(&entry.name);

            assert_eq!(component.map(|c| c.name().to_string()), Some(entry.name.clone()));
        }

        Ok(())
    }
}
