//! Component provider doubles.

use std::{
    collections::HashMap,
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use async_trait::async_trait;

use crate::domain::components::{
    ComponentModule, ComponentProvider, ComponentResolutionError, StaticComponent,
};

/// Provider that counts imports and can fail the first few.
#[derive(Debug, Default)]
pub struct CountingProvider {
    modules: HashMap<String, ComponentModule>,
    fail_first: usize,
    pub imports: AtomicUsize,
}

impl CountingProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module exporting a single component called `name`.
    pub fn with_component(self, import_path: &str, name: &str) -> Self {
        self.with_module(
            import_path,
            ComponentModule::default().with_export(name, StaticComponent::shared(name)),
        )
    }

    pub fn with_module(mut self, import_path: &str, module: ComponentModule) -> Self {
        self.modules.insert(import_path.to_string(), module);
        self
    }

    pub fn failing_first(mut self, count: usize) -> Self {
        self.fail_first = count;
        self
    }
}

#[async_trait]
impl ComponentProvider for CountingProvider {
    async fn import(&self, import_path: &str) -> Result<ComponentModule, ComponentResolutionError> {
        let attempt = self.imports.fetch_add(1, Ordering::SeqCst);

        // Stay pending long enough for concurrent callers to pile up.
        tokio::time::sleep(Duration::from_millis(10)).await;

        if attempt < self.fail_first {
            return Err(ComponentResolutionError::ImportFailed {
                import_path: import_path.to_string(),
                reason: "simulated failure".to_string(),
            });
        }

        self.modules
            .get(import_path)
            .cloned()
            .ok_or_else(|| ComponentResolutionError::ModuleNotFound {
                import_path: import_path.to_string(),
            })
    }
}
