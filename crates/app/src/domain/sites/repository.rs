//! Sites Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use serde_json::Value;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};

use crate::domain::{
    organizations::OrganizationUuid,
    sites::{
        data::{NewPageLayout, NewSiteConfig},
        records::{PageLayoutRecord, PageLayoutUuid, SiteConfigRecord},
    },
};

const GET_SITE_CONFIG_SQL: &str = include_str!("sql/get_site_config.sql");
const GET_PUBLISHED_PAGE_LAYOUT_SQL: &str = include_str!("sql/get_published_page_layout.sql");
const SAVE_THEME_CONFIG_SQL: &str = include_str!("sql/save_theme_config.sql");
const SAVE_SITE_CONFIG_SQL: &str = include_str!("sql/save_site_config.sql");
const SAVE_PAGE_LAYOUT_SQL: &str = include_str!("sql/save_page_layout.sql");

/// PostgreSQL-backed site configs and page layouts.
#[derive(Debug, Clone)]
pub(crate) struct PgSitesRepository {
    pool: PgPool,
}

impl PgSitesRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn get_site_config(
        &self,
        organization: OrganizationUuid,
    ) -> Result<Option<SiteConfigRecord>, sqlx::Error> {
        query_as::<Postgres, SiteConfigRecord>(GET_SITE_CONFIG_SQL)
            .bind(organization.into_uuid())
            .fetch_optional(&self.pool)
            .await
    }

    pub(crate) async fn get_published_page_layout(
        &self,
        organization: OrganizationUuid,
        path: &str,
    ) -> Result<Option<PageLayoutRecord>, sqlx::Error> {
        query_as::<Postgres, PageLayoutRecord>(GET_PUBLISHED_PAGE_LAYOUT_SQL)
            .bind(organization.into_uuid())
            .bind(path)
            .fetch_optional(&self.pool)
            .await
    }

    pub(crate) async fn save_theme_config(
        &self,
        organization: OrganizationUuid,
        theme: Value,
    ) -> Result<SiteConfigRecord, sqlx::Error> {
        query_as::<Postgres, SiteConfigRecord>(SAVE_THEME_CONFIG_SQL)
            .bind(organization.into_uuid())
            .bind(theme)
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn save_site_config(
        &self,
        organization: OrganizationUuid,
        config: NewSiteConfig,
    ) -> Result<SiteConfigRecord, sqlx::Error> {
        query_as::<Postgres, SiteConfigRecord>(SAVE_SITE_CONFIG_SQL)
            .bind(organization.into_uuid())
            .bind(config.name)
            .bind(config.domain)
            .bind(config.description)
            .bind(Value::Object(config.settings))
            .bind(config.metadata)
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn save_page_layout(
        &self,
        organization: OrganizationUuid,
        layout: NewPageLayout,
    ) -> Result<PageLayoutRecord, sqlx::Error> {
        query_as::<Postgres, PageLayoutRecord>(SAVE_PAGE_LAYOUT_SQL)
            .bind(layout.uuid.into_uuid())
            .bind(organization.into_uuid())
            .bind(layout.path)
            .bind(layout.title)
            .bind(layout.description)
            .bind(layout.schema)
            .bind(layout.is_published)
            .bind(layout.metadata)
            .fetch_one(&self.pool)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for SiteConfigRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            organization: OrganizationUuid::from_uuid(row.try_get("organization_uuid")?),
            name: row.try_get("name")?,
            domain: row.try_get("domain")?,
            description: row.try_get("description")?,
            settings: row.try_get("settings")?,
            metadata: row.try_get("metadata")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for PageLayoutRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: PageLayoutUuid::from_uuid(row.try_get("uuid")?),
            organization: OrganizationUuid::from_uuid(row.try_get("organization_uuid")?),
            path: row.try_get("path")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            schema: row.try_get("schema")?,
            is_published: row.try_get("is_published")?,
            metadata: row.try_get("metadata")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
