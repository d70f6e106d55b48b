//! Component Map

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::schema::{Schema, ValidationError, decode};

/// Component props as a JSON object.
pub type Props = Map<String, Value>;

/// Where to find a component and the defaults it renders with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMapEntry {
    /// Component name, also the export looked up in the module.
    pub name: String,

    /// Module the component is imported from.
    pub import_path: String,

    /// Default props, overridden by page and render context props.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<Props>,

    #[serde(default)]
    pub is_client: bool,
}

impl ComponentMapEntry {
    pub fn new(name: impl Into<String>, import_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            import_path: import_path.into(),
            props: None,
            is_client: false,
        }
    }

    #[must_use]
    pub fn client(mut self) -> Self {
        self.is_client = true;
        self
    }

    #[must_use]
    pub fn with_props(mut self, props: Props) -> Self {
        self.props = Some(props);
        self
    }
}

/// Component name to entry.
pub type ComponentMap = BTreeMap<String, ComponentMapEntry>;

/// Validates raw JSON into a [`ComponentMap`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentMapSchema;

impl Schema for ComponentMapSchema {
    type Output = ComponentMap;

    fn parse(&self, value: &Value) -> Result<ComponentMap, ValidationError> {
        decode(value)
    }
}

/// Components every storefront can use without configuring a map.
#[must_use]
pub fn default_component_map() -> ComponentMap {
    [
        ComponentMapEntry::new("ProductList", "@repo/commerce/ui"),
        ComponentMapEntry::new("ProductCard", "@repo/commerce/ui").client(),
        ComponentMapEntry::new("VisualEditor", "@repo/ai-editor/ui").client(),
        ComponentMapEntry::new("Button", "@repo/ui/components/Button").client(),
        ComponentMapEntry::new("Container", "@repo/ui/components/Container"),
    ]
    .into_iter()
    .map(|entry| (entry.name.clone(), entry))
    .collect()
}
