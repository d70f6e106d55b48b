//! Site renderer service.

use std::sync::Arc;

use futures::{
    FutureExt,
    future::{BoxFuture, try_join_all},
};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    actions::ThemeActions,
    domain::{
        components::{ComponentMap, ComponentMapEntry, ComponentMapSchema, ComponentRegistry, Props},
        organizations::OrganizationUuid,
        pages::{PageNode, PageSchemaSchema, format_path},
        renderer::{
            errors::RenderError,
            models::{RenderNode, RenderedPage},
        },
        sites::SitesService,
        theme::ThemeConfig,
    },
    schema::Schema,
};

/// Context keys every render receives.
const ORGANIZATION_ID: &str = "organizationId";
const THEME: &str = "theme";

/// Resolves stored page trees into component trees.
#[derive(Clone)]
pub struct SiteRenderer {
    sites: Arc<dyn SitesService>,
    themes: ThemeActions,
    registry: ComponentRegistry,
}

impl SiteRenderer {
    #[must_use]
    pub fn new(sites: Arc<dyn SitesService>, registry: ComponentRegistry) -> Self {
        Self {
            themes: ThemeActions::new(Arc::clone(&sites)),
            sites,
            registry,
        }
    }

    /// Look up `name` in `map`, logging a warning when it is missing.
    #[must_use]
    pub fn resolve_component<'a>(name: &str, map: &'a ComponentMap) -> Option<&'a ComponentMapEntry> {
        let entry = map.get(name);

        if entry.is_none() {
            warn!(component = name, "component not found in component map");
        }

        entry
    }

    /// Render `node` and its subtree.
    ///
    /// Nodes whose component is not in `map` render as `None` and are dropped
    /// from their parent's children. Siblings render concurrently and keep
    /// their order.
    ///
    /// # Errors
    ///
    /// Returns an error when a mapped component fails to load.
    pub fn render_node<'a>(
        &'a self,
        node: &'a PageNode,
        map: &'a ComponentMap,
        context: &'a Props,
    ) -> BoxFuture<'a, Result<Option<RenderNode>, RenderError>> {
        async move {
            let Some(entry) = Self::resolve_component(&node.component, map) else {
                return Ok(None);
            };

            let component = self.registry.load_component(entry).await?;

            let props = merge_props([entry.props.as_ref(), node.props.as_ref(), Some(context)]);

            let children = try_join_all(
                node.children
                    .iter()
                    .map(|child| self.render_node(child, map, context)),
            )
            .await?
            .into_iter()
            .flatten()
            .collect();

            Ok(Some(RenderNode {
                component,
                props,
                children,
            }))
        }
        .boxed()
    }

    /// Render the published page at `path` for `organization`.
    ///
    /// `extras` is added to the render context after `organizationId` and
    /// `theme`, and wins on collision.
    ///
    /// # Errors
    ///
    /// Returns an error when site data cannot be read, the stored page tree is
    /// invalid, or a component fails to load.
    pub async fn render_page(
        &self,
        organization: OrganizationUuid,
        path: &str,
        map: &ComponentMap,
        extras: Props,
    ) -> Result<Option<RenderedPage>, RenderError> {
        let path = format_path(path);

        let Some(page_layout) = self
            .sites
            .get_published_page_layout(organization, &path)
            .await?
        else {
            debug!(%organization, path = %path, "no published page layout");

            return Ok(None);
        };

        let theme = self.themes.get_theme(organization).await?;
        let schema = PageSchemaSchema.parse(&page_layout.schema)?;
        let context = render_context(organization, theme.as_ref(), extras)?;

        let rendered = self.render_node(&schema.root, map, &context).await?;

        Ok(Some(RenderedPage {
            rendered,
            theme,
            metadata: page_layout.metadata.clone(),
            page_layout,
        }))
    }

    /// The organization's component map; empty when none is configured.
    ///
    /// # Errors
    ///
    /// Returns an error when the site config cannot be read or the stored map
    /// is malformed.
    pub async fn get_component_map(
        &self,
        organization: OrganizationUuid,
    ) -> Result<ComponentMap, RenderError> {
        let Some(config) = self.sites.get_site_config(organization).await? else {
            return Ok(ComponentMap::new());
        };

        match config.setting("componentMap") {
            Some(map) => Ok(ComponentMapSchema.parse(map)?),
            None => Ok(ComponentMap::new()),
        }
    }
}

fn merge_props<'a>(layers: impl IntoIterator<Item = Option<&'a Props>>) -> Props {
    let mut merged = Props::new();

    for layer in layers.into_iter().flatten() {
        merged.extend(layer.iter().map(|(key, value)| (key.clone(), value.clone())));
    }

    merged
}

fn render_context(
    organization: OrganizationUuid,
    theme: Option<&ThemeConfig>,
    extras: Props,
) -> Result<Props, RenderError> {
    let mut context = Props::new();

    context.insert(
        ORGANIZATION_ID.to_string(),
        Value::String(organization.to_string()),
    );

    if let Some(theme) = theme {
        context.insert(THEME.to_string(), serde_json::to_value(theme)?);
    }

    for key in [ORGANIZATION_ID, THEME] {
        if extras.contains_key(key) {
            warn!(%organization, key, "render context key overridden by caller");
        }
    }

    context.extend(extras);

    Ok(context)
}
