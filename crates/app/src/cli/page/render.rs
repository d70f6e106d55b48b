use clap::Args;
use cms_app::{
    context::AppContext,
    domain::{components::Props, organizations::OrganizationUuid},
};

use crate::cli::print_json;

#[derive(Debug, Args)]
pub(crate) struct RenderPageArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Organization that owns the page
    #[arg(long)]
    organization: OrganizationUuid,

    /// Request path of the page
    #[arg(long)]
    path: String,
}

pub(crate) async fn run(args: RenderPageArgs) -> Result<(), String> {
    let app = AppContext::from_database_url(&args.database_url)
        .await
        .map_err(|error| format!("failed to initialize app: {error}"))?;

    let map = app
        .renderer
        .get_component_map(args.organization)
        .await
        .map_err(|error| format!("failed to load component map: {error}"))?;

    let page = app
        .renderer
        .render_page(args.organization, &args.path, &map, Props::new())
        .await
        .map_err(|error| format!("failed to render page: {error}"))?
        .ok_or_else(|| format!("no published page at {}", args.path))?;

    print_json(&page)
}
