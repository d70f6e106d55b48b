//! Theme Stylesheet Handler

use salvo::prelude::*;

use cms_app::domain::theme::tokens_to_declaration_block;

use crate::{extensions::*, sites::errors::into_status_error};

/// Serves the organization's theme as a CSS declaration block.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.state_or_500()?;
    let organization = req.organization_or_400()?;

    let theme = state
        .app
        .themes
        .get_theme(organization)
        .await
        .map_err(into_status_error)?
        .ok_or_else(|| StatusError::not_found().brief("Theme not found"))?;

    res.render(Text::Css(tokens_to_declaration_block(&theme)));

    Ok(())
}
