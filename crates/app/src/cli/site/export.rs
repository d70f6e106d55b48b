use clap::Args;
use cms_app::{
    database,
    domain::{
        organizations::OrganizationUuid,
        sites::{PgSitesService, SitesService, definition::site_config_to_site_definition},
    },
};

use crate::cli::print_json;

#[derive(Debug, Args)]
pub(crate) struct ExportSiteArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Organization whose site definition should be printed
    #[arg(long)]
    organization: OrganizationUuid,
}

pub(crate) async fn run(args: ExportSiteArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let site = PgSitesService::new(pool)
        .get_site_config(args.organization)
        .await
        .map_err(|error| format!("failed to load site config: {error}"))?
        .ok_or_else(|| format!("no site configured for {}", args.organization))?;

    print_json(&site_config_to_site_definition(&site))
}
