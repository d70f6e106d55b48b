//! App Router

use salvo::Router;

use crate::{
    cms::{CmsConfig, cms_router},
    describe, healthcheck, observability, sites,
};

pub(crate) fn app_router() -> Router {
    Router::new()
        .hoop(observability::request_logging)
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("api/ai/describe").post(describe::handler))
        .push(cms_router(CmsConfig::default()))
        .push(sites::router())
}

#[cfg(test)]
mod tests {
    use cms_app::domain::sites::MockSitesService;
    use salvo::{affix_state::inject, prelude::*, test::TestClient};

    use crate::test_helpers::state_with_sites;

    use super::*;

    #[tokio::test]
    async fn unknown_routes_are_404() {
        let res = TestClient::get("http://example.com/nope")
            .send(&Service::new(app_router()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND), "status");
    }

    #[tokio::test]
    async fn responses_carry_a_request_id() {
        let service = Service::new(
            Router::new()
                .hoop(inject(state_with_sites(MockSitesService::new())))
                .push(app_router()),
        );

        let res = TestClient::get("http://example.com/healthcheck")
            .send(&service)
            .await;

        assert!(
            res.headers().contains_key("x-request-id"),
            "request id header"
        );
    }
}
