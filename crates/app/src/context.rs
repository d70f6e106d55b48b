//! App Context

use std::sync::Arc;

use sqlx::PgPool;
use thiserror::Error;

use crate::{
    actions::ThemeActions,
    database,
    domain::{
        components::{ComponentRegistry, builtin_provider},
        renderer::SiteRenderer,
        sites::{PgSitesService, SitesService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub sites: Arc<dyn SitesService>,
    pub themes: ThemeActions,
    pub renderer: SiteRenderer,
    pub registry: ComponentRegistry,
}

impl AppContext {
    /// Wire the actions and renderer over one sites service and registry.
    #[must_use]
    pub fn new(sites: Arc<dyn SitesService>, registry: ComponentRegistry) -> Self {
        Self {
            themes: ThemeActions::new(Arc::clone(&sites)),
            renderer: SiteRenderer::new(Arc::clone(&sites), registry.clone()),
            sites,
            registry,
        }
    }

    /// Build application context from a database URL, with the builtin
    /// component modules registered.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::from_pool(pool))
    }

    /// Build application context over an existing pool.
    #[must_use]
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgSitesService::new(pool)),
            ComponentRegistry::new(Arc::new(builtin_provider())),
        )
    }
}
