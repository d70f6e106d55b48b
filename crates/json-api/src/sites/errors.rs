//! Site Errors

use salvo::http::StatusError;
use tracing::error;

use cms_app::domain::{renderer::RenderError, sites::SitesServiceError};

pub(crate) fn into_status_error(error: SitesServiceError) -> StatusError {
    match error {
        SitesServiceError::AlreadyExists => StatusError::conflict().brief("Site already exists"),
        SitesServiceError::InvalidReference
        | SitesServiceError::MissingRequiredData
        | SitesServiceError::InvalidData => StatusError::bad_request().brief("Invalid site data"),
        SitesServiceError::NotFound => StatusError::not_found(),
        SitesServiceError::Sql(source) => {
            error!("failed to read site data: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn render_status_error(error: RenderError) -> StatusError {
    match error {
        RenderError::Store(source) => into_status_error(source),
        RenderError::Resolution(source) => {
            error!("failed to resolve component: {source}");

            StatusError::internal_server_error()
        }
        RenderError::InvalidData(source) => {
            error!("stored page data is invalid: {source}");

            StatusError::internal_server_error()
        }
        RenderError::Context(source) => {
            error!("failed to build render context: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use cms_app::domain::components::ComponentResolutionError;

    use super::*;

    #[test]
    fn resolution_errors_are_internal() {
        let status = render_status_error(RenderError::Resolution(
            ComponentResolutionError::ModuleNotFound {
                import_path: "@site/hero".to_string(),
            },
        ));

        assert_eq!(status.code, StatusCode::INTERNAL_SERVER_ERROR, "status");
    }

    #[test]
    fn store_not_found_is_404() {
        let status = render_status_error(RenderError::Store(SitesServiceError::NotFound));

        assert_eq!(status.code, StatusCode::NOT_FOUND, "status");
    }
}
