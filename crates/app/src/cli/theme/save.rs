use std::path::PathBuf;

use clap::Args;
use cms_app::{context::AppContext, domain::organizations::OrganizationUuid};

use crate::cli::read_json;

#[derive(Debug, Args)]
pub(crate) struct SaveThemeArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Organization whose theme should be replaced
    #[arg(long)]
    organization: OrganizationUuid,

    /// Path to a theme JSON document
    #[arg(long)]
    file: PathBuf,
}

pub(crate) async fn run(args: SaveThemeArgs) -> Result<(), String> {
    let theme = read_json(&args.file).await?;

    let app = AppContext::from_database_url(&args.database_url)
        .await
        .map_err(|error| format!("failed to initialize app: {error}"))?;

    let result = app.themes.save_theme(args.organization, &theme).await;
    let message = result.message.unwrap_or_default();

    if !result.success {
        return Err(format!("failed to save theme: {message}"));
    }

    println!("{message}");

    Ok(())
}
