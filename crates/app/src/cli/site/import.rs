use std::path::PathBuf;

use clap::Args;
use cms_app::{
    database,
    domain::{
        organizations::OrganizationUuid,
        sites::{
            PgSitesService, SitesService,
            definition::{SiteDefinitionSchema, site_definition_to_site_config},
        },
    },
    schema::Schema,
};

use crate::cli::read_json;

#[derive(Debug, Args)]
pub(crate) struct ImportSiteArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Organization the site belongs to
    #[arg(long)]
    organization: OrganizationUuid,

    /// Path to a site definition JSON document
    #[arg(long)]
    file: PathBuf,
}

pub(crate) async fn run(args: ImportSiteArgs) -> Result<(), String> {
    let raw = read_json(&args.file).await?;

    let definition = SiteDefinitionSchema
        .parse(&raw)
        .map_err(|error| format!("invalid site definition: {error}"))?;

    let config = site_definition_to_site_config(&definition)
        .map_err(|error| format!("failed to build site config: {error}"))?;

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgSitesService::new(pool);

    let site = service
        .save_site_config(args.organization, config)
        .await
        .map_err(|error| format!("failed to save site config: {error}"))?;

    println!("organization: {}", site.organization);
    println!("site_name: {}", site.name.unwrap_or_default());

    for layout in definition.page_layouts() {
        let page = service
            .save_page_layout(args.organization, layout)
            .await
            .map_err(|error| format!("failed to save page layout: {error}"))?;

        println!(
            "page: {} ({})",
            page.path,
            if page.is_published { "published" } else { "draft" }
        );
    }

    Ok(())
}
