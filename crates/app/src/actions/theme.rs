//! Theme actions.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info, warn};

use crate::{
    domain::{
        organizations::OrganizationUuid,
        sites::{SitesService, SitesServiceError},
        theme::{ThemeConfig, ThemeConfigSchema},
    },
    schema::Schema,
};

/// Message returned when a theme is stored.
pub const THEME_SAVED: &str = "Theme saved successfully";

/// Why a theme save failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveThemeFailure {
    /// The theme or the data derived from it was rejected.
    Invalid,

    /// The theme could not be serialized or stored.
    Internal,
}

impl From<&SitesServiceError> for SaveThemeFailure {
    fn from(error: &SitesServiceError) -> Self {
        match error {
            SitesServiceError::InvalidReference
            | SitesServiceError::MissingRequiredData
            | SitesServiceError::InvalidData => Self::Invalid,
            SitesServiceError::AlreadyExists
            | SitesServiceError::NotFound
            | SitesServiceError::Sql(_) => Self::Internal,
        }
    }
}

/// Outcome of [`ThemeActions::save_theme`]. Failures are reported here, not raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveThemeResult {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Set when `success` is false.
    #[serde(skip)]
    pub failure: Option<SaveThemeFailure>,
}

impl SaveThemeResult {
    fn saved() -> Self {
        Self {
            success: true,
            message: Some(THEME_SAVED.to_string()),
            failure: None,
        }
    }

    fn failed(failure: SaveThemeFailure, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            failure: Some(failure),
        }
    }
}

#[derive(Clone)]
pub struct ThemeActions {
    sites: Arc<dyn SitesService>,
}

impl ThemeActions {
    #[must_use]
    pub fn new(sites: Arc<dyn SitesService>) -> Self {
        Self { sites }
    }

    /// Read the organization's theme.
    ///
    /// A missing site config or theme is `None`. So is a stored theme that no
    /// longer validates; the problem is logged.
    ///
    /// # Errors
    ///
    /// Returns an error when the site config cannot be read.
    pub async fn get_theme(
        &self,
        organization: OrganizationUuid,
    ) -> Result<Option<ThemeConfig>, SitesServiceError> {
        let Some(config) = self.sites.get_site_config(organization).await? else {
            return Ok(None);
        };

        let Some(raw) = config.setting("themeConfig") else {
            return Ok(None);
        };

        match ThemeConfigSchema.parse(raw) {
            Ok(theme) => Ok(Some(theme)),
            Err(e) => {
                warn!(%organization, error = %e, "invalid stored theme configuration");

                Ok(None)
            }
        }
    }

    /// Validate and store a theme. Nothing is written when validation fails.
    pub async fn save_theme(&self, organization: OrganizationUuid, theme: &Value) -> SaveThemeResult {
        let validated = match ThemeConfigSchema.parse(theme) {
            Ok(theme) => theme,
            Err(e) => {
                warn!(%organization, error = %e, "rejected theme configuration");

                return SaveThemeResult::failed(SaveThemeFailure::Invalid, e.to_string());
            }
        };

        let value = match serde_json::to_value(&validated) {
            Ok(value) => value,
            Err(e) => {
                error!(%organization, error = %e, "failed to serialize theme configuration");

                return SaveThemeResult::failed(SaveThemeFailure::Internal, e.to_string());
            }
        };

        match self.sites.save_theme_config(organization, value).await {
            Ok(_) => {
                info!(%organization, "saved theme configuration");

                SaveThemeResult::saved()
            }
            Err(e) => {
                error!(%organization, error = %e, "error saving theme");

                SaveThemeResult::failed(SaveThemeFailure::from(&e), e.to_string())
            }
        }
    }
}
