//! Describe requests ask for an AI description of a page at a URL.
//!
//! Jobs are not queued yet; accepted requests get a fixed placeholder id.

use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::{Schema, ValidationError, ValidationIssue, decode};

/// Job id returned for every accepted request until a queue exists.
pub const PLACEHOLDER_JOB_ID: &str = "placeholder-job-id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeRequest {
    pub url: Url,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeJob {
    pub job_id: String,
}

#[derive(Deserialize)]
struct RawDescribeRequest {
    url: String,
}

/// Validates a describe request body.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescribeRequestSchema;

impl Schema for DescribeRequestSchema {
    type Output = DescribeRequest;

    fn parse(&self, value: &Value) -> Result<DescribeRequest, ValidationError> {
        let raw: RawDescribeRequest = decode(value)?;

        let url = Url::parse(&raw.url)
            .map_err(|_| ValidationError::single(ValidationIssue::new(["url"], "Invalid url")))?;

        Ok(DescribeRequest { url })
    }
}

/// Accept a validated request.
#[must_use]
pub fn submit_describe(_request: &DescribeRequest) -> DescribeJob {
    DescribeJob {
        job_id: PLACEHOLDER_JOB_ID.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn accepts_absolute_url() -> TestResult {
        let request = DescribeRequestSchema.parse(&json!({ "url": "https://shop.example.com/p/1" }))?;

        assert_eq!(request.url.host_str(), Some("shop.example.com"));
        assert_eq!(submit_describe(&request).job_id, PLACEHOLDER_JOB_ID);

        Ok(())
    }

    #[test]
    fn rejects_malformed_url() {
        let result = DescribeRequestSchema.parse(&json!({ "url": "not a url" }));

        let Err(error) = result else {
            panic!("expected validation error, got {result:?}");
        };

        assert_eq!(error.issues(), [ValidationIssue::new(["url"], "Invalid url")]);
    }

    #[test]
    fn rejects_missing_url() {
        assert!(DescribeRequestSchema.parse(&json!({})).is_err());
    }
}
