//! Site Records

use jiff::Timestamp;
use serde::Serialize;
use serde_json::Value;

use crate::{domain::organizations::OrganizationUuid, uuids::TypedUuid};

/// Page Layout UUID
pub type PageLayoutUuid = TypedUuid<PageLayoutRecord>;

/// Site Config Record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfigRecord {
    pub organization: OrganizationUuid,

    pub name: Option<String>,
    pub domain: Option<String>,
    pub description: Option<String>,

    /// Settings object holding `themeConfig`, `componentMap` and site-wide
    /// settings such as `logo`.
    pub settings: Value,

    pub metadata: Option<Value>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl SiteConfigRecord {
    /// A top-level key of the settings object, when present and not null.
    #[must_use]
    pub fn setting(&self, key: &str) -> Option<&Value> {
        self.settings.get(key).filter(|value| !value.is_null())
    }
}

/// Page Layout Record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLayoutRecord {
    pub uuid: PageLayoutUuid,
    pub organization: OrganizationUuid,

    /// Request path, always starting with `/`.
    pub path: String,

    pub title: Option<String>,
    pub description: Option<String>,

    /// Raw page tree, validated when rendered.
    pub schema: Value,

    pub is_published: bool,
    pub metadata: Option<Value>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
