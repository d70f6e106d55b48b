//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use serde_json::{Value, json};
use uuid::Uuid;

use cms_app::{
    context::AppContext,
    domain::{
        components::{ComponentRegistry, builtin_provider},
        organizations::OrganizationUuid,
        sites::{
            MockSitesService,
            records::{PageLayoutRecord, PageLayoutUuid, SiteConfigRecord},
        },
    },
};

use crate::state::State;

pub(crate) const TEST_ORGANIZATION: OrganizationUuid = OrganizationUuid::from_uuid(Uuid::nil());

pub(crate) const TEST_ORGANIZATION_PATH: &str =
    "http://example.com/sites/00000000-0000-0000-0000-000000000000";

pub(crate) fn state_with_sites(sites: MockSitesService) -> Arc<State> {
    State::from_app_context(AppContext::new(
        Arc::new(sites),
        ComponentRegistry::new(Arc::new(builtin_provider())),
    ))
}

pub(crate) fn sites_service(sites: MockSitesService) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_sites(sites)))
            .push(crate::sites::router()),
    )
}

pub(crate) fn site_config(settings: Value) -> SiteConfigRecord {
    SiteConfigRecord {
        organization: TEST_ORGANIZATION,
        name: Some("Test Store".to_string()),
        domain: None,
        description: None,
        settings,
        metadata: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn page_layout(path: &str, schema: Value) -> PageLayoutRecord {
    PageLayoutRecord {
        uuid: PageLayoutUuid::from_uuid(Uuid::nil()),
        organization: TEST_ORGANIZATION,
        path: path.to_string(),
        title: None,
        description: None,
        schema,
        is_published: true,
        metadata: Some(json!({ "title": "Home" })),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn theme_json() -> Value {
    json!({
        "colors": {
            "primary": { "r": 59, "g": 130, "b": 246 },
            "background": { "primary": { "r": 255, "g": 255, "b": 255 } },
            "text": { "primary": { "r": 17, "g": 24, "b": 39 } }
        },
        "typography": {
            "fontFamily": { "sans": "Inter, sans-serif" }
        },
        "spacing": {
            "xs": "0.25rem",
            "sm": "0.5rem",
            "md": "1rem",
            "lg": "1.5rem",
            "xl": "2rem"
        },
        "borderRadius": {
            "sm": "0.125rem",
            "md": "0.375rem",
            "lg": "0.5rem"
        }
    })
}
