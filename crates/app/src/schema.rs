//! Structural validation of inbound JSON.
//!
//! Every persisted or inbound entity has a schema object that turns raw
//! [`serde_json::Value`] into a typed value. The structural decode stops at
//! the first mismatch; checks that run on a decoded value report every
//! problem they find as a [`ValidationIssue`].

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;

/// A single validation problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Location of the offending value, outermost key first.
    pub path: Vec<String>,

    /// Human-readable description.
    pub message: String,
}

impl ValidationIssue {
    pub fn new<P, S>(path: P, message: impl Into<String>) -> Self
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: path.into_iter().map(Into::into).collect(),
            message: message.into(),
        }
    }

    /// An issue about the value as a whole.
    pub fn root(message: impl Into<String>) -> Self {
        Self {
            path: Vec::new(),
            message: message.into(),
        }
    }
}

/// Inbound data did not match its schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", summarize(.issues))]
pub struct ValidationError {
    issues: Vec<ValidationIssue>,
}

impl ValidationError {
    #[must_use]
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    #[must_use]
    pub fn single(issue: ValidationIssue) -> Self {
        Self::new(vec![issue])
    }

    #[must_use]
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    #[must_use]
    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.issues
    }

    /// Prefix every issue path with `prefix`, for nesting one schema in another.
    #[must_use]
    pub fn nested(self, prefix: &str) -> Self {
        Self::new(
            self.issues
                .into_iter()
                .map(|mut issue| {
                    issue.path.insert(0, prefix.to_string());
                    issue
                })
                .collect(),
        )
    }
}

fn summarize(issues: &[ValidationIssue]) -> String {
    if issues.is_empty() {
        return "validation failed".to_string();
    }

    issues
        .iter()
        .map(|issue| {
            if issue.path.is_empty() {
                issue.message.clone()
            } else {
                format!("{}: {}", issue.path.join("."), issue.message)
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validator for one entity shape.
pub trait Schema {
    /// The typed value produced by a successful parse.
    type Output;

    /// Validate `value` and convert it into [`Self::Output`].
    ///
    /// # Errors
    ///
    /// Returns the issues found when `value` does not match the schema.
    fn parse(&self, value: &Value) -> Result<Self::Output, ValidationError>;
}

/// Structural decode step shared by the concrete schemas.
///
/// Reports only the first mismatch serde encounters.
pub(crate) fn decode<T: DeserializeOwned>(value: &Value) -> Result<T, ValidationError> {
    serde_json::from_value(value.clone())
        .map_err(|error| ValidationError::single(ValidationIssue::root(error.to_string())))
}
