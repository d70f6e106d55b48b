//! Save Theme Handler

use cms_app::actions::SaveThemeFailure;
use salvo::prelude::*;
use serde_json::Value;

use crate::extensions::*;

/// Validates and stores the organization's theme.
///
/// Responds with the save result; 400 when the theme was rejected and 500
/// when it could not be stored.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.state_or_500()?;
    let organization = req.organization_or_400()?;
    let theme = req
        .parse_json::<Value>()
        .await
        .or_400("invalid theme payload")?;

    let result = state.app.themes.save_theme(organization, &theme).await;

    match result.failure {
        Some(SaveThemeFailure::Invalid) => res.status_code(StatusCode::BAD_REQUEST),
        Some(SaveThemeFailure::Internal) => res.status_code(StatusCode::INTERNAL_SERVER_ERROR),
        None => res,
    };

    res.render(Json(result));

    Ok(())
}
