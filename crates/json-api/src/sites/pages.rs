//! Render Page Handler

use std::collections::BTreeMap;

use salvo::prelude::*;
use serde::Serialize;
use serde_json::Value;

use cms_app::domain::{
    components::Props,
    renderer::{RenderNode, RenderedPage},
    theme::ThemeConfig,
};

use crate::{extensions::*, sites::errors::render_status_error};

/// A rendered page as served to the storefront.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageResponse {
    rendered: Option<RenderNode>,
    theme: Option<ThemeConfig>,
    metadata: Option<Value>,

    /// Custom properties to set on the document root.
    theme_variables: BTreeMap<String, String>,
}

impl From<RenderedPage> for PageResponse {
    fn from(page: RenderedPage) -> Self {
        let theme_variables = page.theme_style().into_properties();

        Self {
            rendered: page.rendered,
            theme: page.theme,
            metadata: page.metadata,
            theme_variables,
        }
    }
}

/// Renders the published page at `?path=` (default `/`) with the
/// organization's component map.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<PageResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let organization = req.organization_or_400()?;
    let path = req
        .query::<String>("path")
        .unwrap_or_else(|| "/".to_string());

    let renderer = &state.app.renderer;
    let map = renderer
        .get_component_map(organization)
        .await
        .map_err(render_status_error)?;

    renderer
        .render_page(organization, &path, &map, Props::new())
        .await
        .map_err(render_status_error)?
        .map(|page| Json(page.into()))
        .ok_or_else(|| StatusError::not_found().brief("Page not found"))
}

#[cfg(test)]
mod tests {
    use cms_app::domain::sites::MockSitesService;
    use mockall::predicate::{always, eq};
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::test_helpers::{
        TEST_ORGANIZATION, TEST_ORGANIZATION_PATH, page_layout, site_config, sites_service,
        theme_json,
    };

    use super::*;

    fn settings() -> Value {
        json!({
            "themeConfig": theme_json(),
            "componentMap": {
                "Container": {
                    "name": "Container",
                    "importPath": "@repo/ui/components/Container",
                    "isClient": false
                },
                "Button": {
                    "name": "Button",
                    "importPath": "@repo/ui/components/Button",
                    "props": { "variant": "primary" },
                    "isClient": true
                }
            }
        })
    }

    fn schema() -> Value {
        json!({
            "root": {
                "type": "Container",
                "children": [
                    { "type": "Button", "props": { "label": "Shop" } },
                    { "type": "Unknown" }
                ]
            }
        })
    }

    #[tokio::test]
    async fn renders_published_page() -> TestResult {
        let mut sites = MockSitesService::new();

        sites
            .expect_get_site_config()
            .with(eq(TEST_ORGANIZATION))
            .times(2)
            .returning(|_| Ok(Some(site_config(settings()))));

        sites
            .expect_get_published_page_layout()
            .with(eq(TEST_ORGANIZATION), eq("/about"))
            .once()
            .returning(|_, path| Ok(Some(page_layout(path, schema()))));

        let mut res = TestClient::get(format!("{TEST_ORGANIZATION_PATH}/pages?path=about"))
            .send(&sites_service(sites))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK), "status");

        let body: Value = res.take_json().await?;
        let theme = body.pointer("/theme").cloned();

        assert!(theme.is_some(), "theme echoed");
        assert_eq!(
            body.pointer("/rendered/component"),
            Some(&json!("Container")),
            "root component"
        );
        assert_eq!(
            body.pointer("/rendered/children"),
            Some(&json!([{
                "component": "Button",
                "props": {
                    "variant": "primary",
                    "label": "Shop",
                    "organizationId": TEST_ORGANIZATION.to_string(),
                    "theme": theme
                },
                "children": []
            }])),
            "mapped children only"
        );
        assert_eq!(
            body.pointer("/metadata"),
            Some(&json!({ "title": "Home" })),
            "metadata"
        );
        assert_eq!(
            body.pointer("/themeVariables/--color-primary"),
            Some(&json!("59 130 246")),
            "theme variables"
        );

        Ok(())
    }

    #[tokio::test]
    async fn missing_page_is_404() {
        let mut sites = MockSitesService::new();

        sites
            .expect_get_site_config()
            .returning(|_| Ok(None));

        sites
            .expect_get_published_page_layout()
            .with(always(), eq("/"))
            .once()
            .returning(|_, _| Ok(None));

        let res = TestClient::get(format!("{TEST_ORGANIZATION_PATH}/pages"))
            .send(&sites_service(sites))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND), "status");
    }

    #[tokio::test]
    async fn unresolvable_component_is_500() {
        let mut sites = MockSitesService::new();

        sites.expect_get_site_config().returning(|_| {
            Ok(Some(site_config(json!({
                "componentMap": {
                    "Hero": { "name": "Hero", "importPath": "@site/missing" }
                }
            }))))
        });

        sites
            .expect_get_published_page_layout()
            .once()
            .returning(|_, path| Ok(Some(page_layout(path, json!({ "root": { "type": "Hero" } })))));

        let res = TestClient::get(format!("{TEST_ORGANIZATION_PATH}/pages?path=/"))
            .send(&sites_service(sites))
            .await;

        assert_eq!(
            res.status_code,
            Some(StatusCode::INTERNAL_SERVER_ERROR),
            "status"
        );
    }
}
