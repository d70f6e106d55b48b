use clap::Args;
use cms_app::{
    context::AppContext,
    domain::{organizations::OrganizationUuid, theme::tokens_to_declaration_block},
};

use crate::cli::print_json;

#[derive(Debug, Args)]
pub(crate) struct GetThemeArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Organization whose theme should be printed
    #[arg(long)]
    organization: OrganizationUuid,

    /// Print the CSS declaration block instead of JSON
    #[arg(long)]
    css: bool,
}

pub(crate) async fn run(args: GetThemeArgs) -> Result<(), String> {
    let app = AppContext::from_database_url(&args.database_url)
        .await
        .map_err(|error| format!("failed to initialize app: {error}"))?;

    let theme = app
        .themes
        .get_theme(args.organization)
        .await
        .map_err(|error| format!("failed to load theme: {error}"))?
        .ok_or_else(|| format!("no theme configured for {}", args.organization))?;

    if args.css {
        println!("{}", tokens_to_declaration_block(&theme));

        return Ok(());
    }

    print_json(&theme)
}
