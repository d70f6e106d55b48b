//! Get Theme Handler

use salvo::prelude::*;

use cms_app::domain::theme::ThemeConfig;

use crate::{extensions::*, sites::errors::into_status_error};

/// Returns the organization's theme, or 404 when none is stored.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ThemeConfig>, StatusError> {
    let state = depot.state_or_500()?;
    let organization = req.organization_or_400()?;

    state
        .app
        .themes
        .get_theme(organization)
        .await
        .map_err(into_status_error)?
        .map(Json)
        .ok_or_else(|| StatusError::not_found().brief("Theme not found"))
}
