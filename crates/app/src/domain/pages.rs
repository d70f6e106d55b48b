//! Page trees

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    domain::components::Props,
    schema::{Schema, ValidationError, decode},
};

/// One node of a page tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageNode {
    /// Component name, looked up in the component map.
    #[serde(rename = "type")]
    pub component: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<Props>,

    #[serde(default)]
    pub children: Vec<PageNode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl PageNode {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            props: None,
            children: Vec::new(),
            id: None,
        }
    }

    #[must_use]
    pub fn with_props(mut self, props: Props) -> Self {
        self.props = Some(props);
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: PageNode) -> Self {
        self.children.push(child);
        self
    }
}

/// The stored form of a page layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSchema {
    pub root: PageNode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

/// Validates raw JSON into a [`PageSchema`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PageSchemaSchema;

impl Schema for PageSchemaSchema {
    type Output = PageSchema;

    fn parse(&self, value: &Value) -> Result<PageSchema, ValidationError> {
        decode(value)
    }
}

/// Ensure `path` starts with `/`.
#[must_use]
pub fn format_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn format_path_adds_missing_slash() {
        assert_eq!(format_path("about"), "/about");
        assert_eq!(format_path("/about"), "/about");
        assert_eq!(format_path(""), "/");
    }

    #[test]
    fn children_default_to_empty() -> TestResult {
        let schema = PageSchemaSchema.parse(&json!({
            "root": { "type": "Container", "children": [{ "type": "Hero", "id": "hero-1" }] }
        }))?;

        assert_eq!(schema.root.component, "Container");
        assert_eq!(schema.root.children[0].id.as_deref(), Some("hero-1"));
        assert!(schema.root.children[0].children.is_empty());

        Ok(())
    }

    #[test]
    fn rejects_nodes_without_type() {
        assert!(PageSchemaSchema.parse(&json!({ "root": { "props": {} } })).is_err());
    }
}
