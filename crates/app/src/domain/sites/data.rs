//! Site Data

use serde_json::{Map, Value};

use crate::domain::sites::records::PageLayoutUuid;

/// New or replacement site config.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSiteConfig {
    pub name: Option<String>,
    pub domain: Option<String>,
    pub description: Option<String>,
    pub settings: Map<String, Value>,
    pub metadata: Option<Value>,
}

/// New or replacement page layout, keyed by organization and path.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPageLayout {
    /// Used only when no layout exists yet for the path.
    pub uuid: PageLayoutUuid,

    pub path: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub schema: Value,
    pub is_published: bool,
    pub metadata: Option<Value>,
}
