//! Mountable CMS route handlers.
//!
//! A host application builds the handlers once with [`create_cms_handler`]
//! and mounts them at `api/cms/{**slug}`.

use std::sync::Arc;

use salvo::prelude::*;
use serde::Serialize;

/// Host-supplied settings for the CMS handlers.
#[derive(Debug, Clone, Default)]
pub(crate) struct CmsConfig {}

/// GET and POST handlers sharing one config.
#[derive(Debug, Clone)]
pub(crate) struct CmsHandler {
    pub(crate) get: CmsGetHandler,
    pub(crate) post: CmsPostHandler,
}

#[derive(Debug, Serialize)]
struct CmsStatus {
    status: &'static str,
    service: &'static str,
}

#[derive(Debug, Serialize)]
struct CmsMessage {
    message: &'static str,
}

#[derive(Debug, Clone)]
pub(crate) struct CmsGetHandler {
    _config: Arc<CmsConfig>,
}

#[handler]
impl CmsGetHandler {
    async fn handle(&self, res: &mut Response) {
        res.render(Json(CmsStatus {
            status: "active",
            service: "cms",
        }));
    }
}

#[derive(Debug, Clone)]
pub(crate) struct CmsPostHandler {
    _config: Arc<CmsConfig>,
}

#[handler]
impl CmsPostHandler {
    async fn handle(&self, res: &mut Response) {
        res.render(Json(CmsMessage {
            message: "CMS handler - to be implemented",
        }));
    }
}

pub(crate) fn create_cms_handler(config: CmsConfig) -> CmsHandler {
    let config = Arc::new(config);

    CmsHandler {
        get: CmsGetHandler {
            _config: Arc::clone(&config),
        },
        post: CmsPostHandler { _config: config },
    }
}

/// Route mounting both handlers under `api/cms`.
pub(crate) fn cms_router(config: CmsConfig) -> Router {
    let handler = create_cms_handler(config);

    Router::with_path("api/cms/{**slug}")
        .get(handler.get)
        .post(handler.post)
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use super::*;

    fn service() -> Service {
        Service::new(cms_router(CmsConfig::default()))
    }

    #[tokio::test]
    async fn get_reports_active_service() -> TestResult {
        let body: Value = TestClient::get("http://example.com/api/cms/pages/home")
            .send(&service())
            .await
            .take_json()
            .await?;

        assert_eq!(body, json!({ "status": "active", "service": "cms" }), "body");

        Ok(())
    }

    #[tokio::test]
    async fn post_returns_placeholder_message() -> TestResult {
        let body: Value = TestClient::post("http://example.com/api/cms/anything")
            .json(&json!({ "any": "payload" }))
            .send(&service())
            .await
            .take_json()
            .await?;

        assert_eq!(
            body,
            json!({ "message": "CMS handler - to be implemented" }),
            "body"
        );

        Ok(())
    }
}
