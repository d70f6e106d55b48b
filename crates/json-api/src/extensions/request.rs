//! Request parameter helpers.

use salvo::prelude::{Request, StatusError};

use cms_app::domain::organizations::OrganizationUuid;

pub(crate) trait RequestExt {
    /// The `{organization}` path parameter, or 400 when it is not a UUID.
    fn organization_or_400(&self) -> Result<OrganizationUuid, StatusError>;
}

impl RequestExt for Request {
    fn organization_or_400(&self) -> Result<OrganizationUuid, StatusError> {
        self.param::<String>("organization")
            .and_then(|raw| raw.parse().ok())
            .ok_or_else(|| StatusError::bad_request().brief("invalid organization id"))
    }
}
