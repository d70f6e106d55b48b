//! Component Registry
//!
//! Caches loaded components by name and de-duplicates concurrent loads: every
//! caller asking for a component that is already being imported awaits the
//! same shared future.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use futures::{
    FutureExt,
    future::{BoxFuture, Shared},
};
use tracing::{debug, error, info};

use crate::domain::components::{
    errors::ComponentResolutionError,
    map::ComponentMapEntry,
    provider::{ComponentProvider, ComponentRef},
};

type LoadFuture = Shared<BoxFuture<'static, Result<ComponentRef, ComponentResolutionError>>>;

#[derive(Default)]
struct RegistryState {
    loaded: HashMap<String, ComponentRef>,
    in_flight: HashMap<String, LoadFuture>,

    /// Bumped by `clear`, so loads started before it don't write back.
    generation: u64,
}

/// Runtime component cache backed by a [`ComponentProvider`].
#[derive(Clone)]
pub struct ComponentRegistry {
    provider: Arc<dyn ComponentProvider>,
    state: Arc<Mutex<RegistryState>>,
}

impl ComponentRegistry {
    #[must_use]
    pub fn new(provider: Arc<dyn ComponentProvider>) -> Self {
        Self {
            provider,
            state: Arc::new(Mutex::new(RegistryState::default())),
        }
    }

    /// Store `component` under `name`, replacing any previous entry.
    pub fn register(&self, name: impl Into<String>, component: ComponentRef) {
        lock(&self.state).loaded.insert(name.into(), component);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<ComponentRef> {
        lock(&self.state).loaded.get(name).cloned()
    }

    /// Load the component for `entry`, importing it at most once.
    ///
    /// # Errors
    ///
    /// Returns the import or export lookup failure. Failures are not cached;
    /// the next call after a failed load imports again.
    pub async fn load_component(
        &self,
        entry: &ComponentMapEntry,
    ) -> Result<ComponentRef, ComponentResolutionError> {
        let load = {
            let mut state = lock(&self.state);

            if let Some(component) = state.loaded.get(&entry.name) {
                debug!(component = %entry.name, "component cache hit");

                return Ok(Arc::clone(component));
            }

            if let Some(load) = state.in_flight.get(&entry.name) {
                debug!(component = %entry.name, "awaiting in-flight component load");

                load.clone()
            } else {
                let load = self.start_load(entry.clone(), state.generation).shared();

                state.in_flight.insert(entry.name.clone(), load.clone());

                load
            }
        };

        load.await
    }

    /// Drop every cached component and forget in-flight loads.
    pub fn clear(&self) {
        let mut state = lock(&self.state);

        state.loaded.clear();
        state.in_flight.clear();
        state.generation = state.generation.wrapping_add(1);
    }

    fn start_load(
        &self,
        entry: ComponentMapEntry,
        generation: u64,
    ) -> BoxFuture<'static, Result<ComponentRef, ComponentResolutionError>> {
        let provider = Arc::clone(&self.provider);
        let state = Arc::clone(&self.state);

        async move {
            let result = provider
                .import(&entry.import_path)
                .await
                .and_then(|module| {
                    module
                        .select(&entry.name)
                        .ok_or_else(|| ComponentResolutionError::ExportNotFound {
                            name: entry.name.clone(),
                            import_path: entry.import_path.clone(),
                        })
                });

            {
                let mut state = lock(&state);

                if state.generation == generation {
                    state.in_flight.remove(&entry.name);

                    if let Ok(component) = &result {
                        state.loaded.insert(entry.name.clone(), Arc::clone(component));
                    }
                }
            }

            match &result {
                Ok(_) => info!(
                    component = %entry.name,
                    import_path = %entry.import_path,
                    "loaded component"
                ),
                Err(e) => error!(
                    component = %entry.name,
                    import_path = %entry.import_path,
                    error = %e,
                    "failed to load component"
                ),
            }

            result
        }
        .boxed()
    }
}

fn lock(state: &Mutex<RegistryState>) -> MutexGuard<'_, RegistryState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
