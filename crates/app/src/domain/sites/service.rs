//! Sites service.

use async_trait::async_trait;
use mockall::automock;
use serde_json::Value;
use sqlx::PgPool;

use crate::domain::{
    organizations::OrganizationUuid,
    sites::{
        data::{NewPageLayout, NewSiteConfig},
        errors::SitesServiceError,
        records::{PageLayoutRecord, SiteConfigRecord},
        repository::PgSitesRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgSitesService {
    repository: PgSitesRepository,
}

impl PgSitesService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgSitesRepository::new(pool),
        }
    }
}

#[async_trait]
impl SitesService for PgSitesService {
    async fn get_site_config(
        &self,
        organization: OrganizationUuid,
    ) -> Result<Option<SiteConfigRecord>, SitesServiceError> {
        self.repository
            .get_site_config(organization)
            .await
            .map_err(Into::into)
    }

    async fn get_published_page_layout(
        &self,
        organization: OrganizationUuid,
        path: &str,
    ) -> Result<Option<PageLayoutRecord>, SitesServiceError> {
        self.repository
            .get_published_page_layout(organization, path)
            .await
            .map_err(Into::into)
    }

    async fn save_theme_config(
        &self,
        organization: OrganizationUuid,
        theme: Value,
    ) -> Result<SiteConfigRecord, SitesServiceError> {
        self.repository
            .save_theme_config(organization, theme)
            .await
            .map_err(Into::into)
    }

    async fn save_site_config(
        &self,
        organization: OrganizationUuid,
        config: NewSiteConfig,
    ) -> Result<SiteConfigRecord, SitesServiceError> {
        self.repository
            .save_site_config(organization, config)
            .await
            .map_err(Into::into)
    }

    async fn save_page_layout(
        &self,
        organization: OrganizationUuid,
        layout: NewPageLayout,
    ) -> Result<PageLayoutRecord, SitesServiceError> {
        self.repository
            .save_page_layout(organization, layout)
            .await
            .map_err(Into::into)
    }
}

#[automock]
#[async_trait]
/// Site config and page layout persistence.
pub trait SitesService: Send + Sync {
    /// Fetch the organization's site config, if one exists.
    async fn get_site_config(
        &self,
        organization: OrganizationUuid,
    ) -> Result<Option<SiteConfigRecord>, SitesServiceError>;

    /// Fetch the published layout at `path`. Unpublished layouts are ignored.
    async fn get_published_page_layout(
        &self,
        organization: OrganizationUuid,
        path: &str,
    ) -> Result<Option<PageLayoutRecord>, SitesServiceError>;

    /// Store an already validated theme under `settings.themeConfig`, creating
    /// the site config when missing. Other settings are kept.
    async fn save_theme_config(
        &self,
        organization: OrganizationUuid,
        theme: Value,
    ) -> Result<SiteConfigRecord, SitesServiceError>;

    /// Create or replace the organization's site config.
    async fn save_site_config(
        &self,
        organization: OrganizationUuid,
        config: NewSiteConfig,
    ) -> Result<SiteConfigRecord, SitesServiceError>;

    /// Create or replace the layout at the layout's path.
    async fn save_page_layout(
        &self,
        organization: OrganizationUuid,
        layout: NewPageLayout,
    ) -> Result<PageLayoutRecord, SitesServiceError>;
}
