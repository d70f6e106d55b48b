//! Render Models

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::domain::{
    components::{ComponentRef, Props},
    sites::records::PageLayoutRecord,
    theme::{StyleMap, ThemeConfig, apply_to_document},
};

/// A resolved page node, ready for the UI layer to paint.
///
/// Serializes as `{component, props, children}` with the component by name.
#[derive(Debug, Clone, Serialize)]
pub struct RenderNode {
    #[serde(serialize_with = "component_name")]
    pub component: ComponentRef,

    /// Entry defaults, then node props, then render context.
    pub props: Props,

    pub children: Vec<RenderNode>,
}

fn component_name<S: Serializer>(component: &ComponentRef, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(component.name())
}

/// Output of rendering one page.
///
/// Serializes as `{rendered, theme, metadata}`; the layout row stays server side.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedPage {
    /// `None` when the root component is not in the component map.
    pub rendered: Option<RenderNode>,

    pub theme: Option<ThemeConfig>,
    pub metadata: Option<Value>,

    #[serde(skip)]
    pub page_layout: PageLayoutRecord,
}

impl RenderedPage {
    /// Document root style with the page's theme applied; empty without a theme.
    #[must_use]
    pub fn theme_style(&self) -> StyleMap {
        let mut style = StyleMap::new();

        if let Some(theme) = &self.theme {
            apply_to_document(theme, &mut style);
        }

        style
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use crate::domain::components::StaticComponent;

    use super::*;

    #[test]
    fn render_node_serializes_component_by_name() -> TestResult {
        let mut props = Props::new();
        props.insert("title".to_string(), json!("Hi"));

        let node = RenderNode {
            component: StaticComponent::shared("Container"),
            props: Props::new(),
            children: vec![RenderNode {
                component: StaticComponent::shared("Hero"),
                props,
                children: Vec::new(),
            }],
        };

        assert_eq!(
            serde_json::to_value(&node)?,
            json!({
                "component": "Container",
                "props": {},
                "children": [{ "component": "Hero", "props": { "title": "Hi" }, "children": [] }]
            })
        );

        Ok(())
    }
}
