//! Render errors.

use thiserror::Error;

use crate::{
    domain::{components::ComponentResolutionError, sites::SitesServiceError},
    schema::ValidationError,
};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("component resolution failed")]
    Resolution(#[from] ComponentResolutionError),

    #[error("failed to read site data")]
    Store(#[from] SitesServiceError),

    #[error("stored site data is invalid: {0}")]
    InvalidData(#[from] ValidationError),

    #[error("failed to build render context")]
    Context(#[from] serde_json::Error),
}
