//! Describe Handler
//!
//! `POST /api/ai/describe` accepts `{ "url": "<absolute url>" }` and returns a
//! job id.

use salvo::prelude::*;
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use cms_app::{
    domain::describe::{DescribeRequestSchema, submit_describe},
    schema::{Schema, ValidationIssue},
};

const INTERNAL_SERVER_ERROR: &str = "Internal server error";

#[derive(Debug, Serialize)]
struct InternalErrorResponse {
    error: &'static str,
}

#[derive(Debug, Serialize)]
struct ValidationErrorResponse {
    error: Vec<ValidationIssue>,
}

#[handler]
pub(crate) async fn handler(req: &mut Request, res: &mut Response) {
    let body = match req.parse_json::<Value>().await {
        Ok(body) => body,
        Err(source) => {
            error!("failed to read describe request body: {source}");

            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(InternalErrorResponse {
                error: INTERNAL_SERVER_ERROR,
            }));

            return;
        }
    };

    match DescribeRequestSchema.parse(&body) {
        Ok(request) => {
            let job = submit_describe(&request);

            info!(url = %request.url, job_id = %job.job_id, "describe request accepted");

            res.render(Json(job));
        }
        Err(validation) => {
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Json(ValidationErrorResponse {
                error: validation.into_issues(),
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    fn service() -> Service {
        Service::new(Router::with_path("api/ai/describe").post(handler))
    }

    #[tokio::test]
    async fn valid_url_returns_placeholder_job() -> TestResult {
        let mut res = TestClient::post("http://example.com/api/ai/describe")
            .json(&json!({ "url": "https://shop.example.com/products/1" }))
            .send(&service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK), "status");

        let body: Value = res.take_json().await?;

        assert_eq!(body, json!({ "jobId": "placeholder-job-id" }), "body");

        Ok(())
    }

    #[tokio::test]
    async fn invalid_url_returns_400_with_issues() -> TestResult {
        let mut res = TestClient::post("http://example.com/api/ai/describe")
            .json(&json!({ "url": "not a url" }))
            .send(&service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST), "status");

        let body: Value = res.take_json().await?;

        assert_eq!(
            body,
            json!({ "error": [{ "path": ["url"], "message": "Invalid url" }] }),
            "body"
        );

        Ok(())
    }

    #[tokio::test]
    async fn missing_url_returns_400() {
        let res = TestClient::post("http://example.com/api/ai/describe")
            .json(&json!({}))
            .send(&service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST), "status");
    }

    #[tokio::test]
    async fn unreadable_body_returns_500() -> TestResult {
        let mut res = TestClient::post("http://example.com/api/ai/describe")
            .raw_json("{ not json")
            .send(&service())
            .await;

        assert_eq!(
            res.status_code,
            Some(StatusCode::INTERNAL_SERVER_ERROR),
            "status"
        );

        let body: Value = res.take_json().await?;

        assert_eq!(body, json!({ "error": "Internal server error" }), "body");

        Ok(())
    }
}
