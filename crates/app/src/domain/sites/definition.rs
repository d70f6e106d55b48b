//! Site definitions: the portable JSON form of a whole site.

use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::{
    domain::{
        components::{ComponentMap, ComponentMapSchema},
        pages::format_path,
        sites::{
            data::{NewPageLayout, NewSiteConfig},
            records::{PageLayoutUuid, SiteConfigRecord},
        },
        theme::{ThemeConfig, ThemeConfigSchema},
    },
    schema::{Schema, ValidationError, ValidationIssue, decode},
};

/// Name used when a stored site config has none.
pub const UNTITLED_SITE: &str = "Untitled Site";

/// Site Definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteDefinition {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_map: Option<ComponentMap>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<SiteSettings>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<PageSummary>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

/// Site-wide settings stored alongside the theme and component map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Absolute URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    /// Absolute URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
}

/// A page bundled in a site definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Page tree, validated when the page is rendered.
    #[serde(default)]
    pub schema: Value,

    #[serde(default)]
    pub is_published: bool,
}

impl SiteDefinition {
    /// Page layouts for every bundled page, with paths normalised.
    #[must_use]
    pub fn page_layouts(&self) -> Vec<NewPageLayout> {
        self.pages
            .iter()
            .flatten()
            .map(|page| NewPageLayout {
                uuid: PageLayoutUuid::new(),
                path: format_path(&page.path),
                title: page.title.clone(),
                description: page.description.clone(),
                schema: page.schema.clone(),
                is_published: page.is_published,
                metadata: None,
            })
            .collect()
    }
}

/// Validates raw JSON into a [`SiteDefinition`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SiteDefinitionSchema;

impl Schema for SiteDefinitionSchema {
    type Output = SiteDefinition;

    fn parse(&self, value: &Value) -> Result<SiteDefinition, ValidationError> {
        let definition: SiteDefinition = decode(value)?;

        let mut issues = Vec::new();

        if let Some(theme) = value.get("theme").filter(|theme| !theme.is_null())
            && let Err(error) = ThemeConfigSchema.parse(theme)
        {
            issues.extend(error.nested("theme").into_issues());
        }

        if let Some(map) = value.get("componentMap").filter(|map| !map.is_null())
            && let Err(error) = ComponentMapSchema.parse(map)
        {
            issues.extend(error.nested("componentMap").into_issues());
        }

        if let Some(settings) = &definition.settings {
            for (field, url) in [("logo", &settings.logo), ("favicon", &settings.favicon)] {
                if let Some(url) = url
                    && Url::parse(url).is_err()
                {
                    issues.push(ValidationIssue::new(["settings", field], "Invalid url"));
                }
            }
        }

        if issues.is_empty() {
            Ok(definition)
        } else {
            Err(ValidationError::new(issues))
        }
    }
}

/// Flatten a site definition into the stored site config shape.
///
/// The settings object becomes `{themeConfig, componentMap, ...settings}`.
///
/// # Errors
///
/// Returns an error if the theme or component map cannot be serialized.
pub fn site_definition_to_site_config(
    definition: &SiteDefinition,
) -> Result<NewSiteConfig, serde_json::Error> {
    let mut settings = Map::new();

    if let Some(theme) = &definition.theme {
        settings.insert("themeConfig".to_string(), serde_json::to_value(theme)?);
    }

    if let Some(map) = &definition.component_map {
        settings.insert("componentMap".to_string(), serde_json::to_value(map)?);
    }

    if let Some(Value::Object(site_settings)) = definition
        .settings
        .as_ref()
        .map(serde_json::to_value)
        .transpose()?
    {
        settings.extend(site_settings);
    }

    Ok(NewSiteConfig {
        name: Some(definition.name.clone()),
        domain: definition.domain.clone(),
        description: definition.description.clone(),
        settings,
        metadata: definition.metadata.clone().map(Value::Object),
    })
}

/// Rebuild a site definition from a stored site config.
///
/// A stored theme or component map that no longer decodes is dropped with a
/// warning. Pages are not part of the site config and are left unset.
#[must_use]
pub fn site_config_to_site_definition(record: &SiteConfigRecord) -> SiteDefinition {
    let theme = record.setting("themeConfig").and_then(|theme| {
        decode::<ThemeConfig>(theme)
            .inspect_err(|error| {
                warn!(organization = %record.organization, %error, "stored theme does not decode");
            })
            .ok()
    });

    let component_map = record.setting("componentMap").and_then(|map| {
        decode::<ComponentMap>(map)
            .inspect_err(|error| {
                warn!(organization = %record.organization, %error, "stored component map does not decode");
            })
            .ok()
    });

    let text = |key: &str| {
        record
            .setting(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    };

    SiteDefinition {
        name: non_empty(record.name.as_ref()).unwrap_or_else(|| UNTITLED_SITE.to_string()),
        domain: non_empty(record.domain.as_ref()),
        description: non_empty(record.description.as_ref()),
        theme,
        component_map,
        settings: Some(SiteSettings {
            logo: text("logo"),
            favicon: text("favicon"),
            footer: text("footer"),
            header: text("header"),
        }),
        pages: None,
        metadata: Some(match &record.metadata {
            Some(Value::Object(metadata)) => metadata.clone(),
            _ => Map::new(),
        }),
    }
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|value| !value.is_empty()).cloned()
}
