use clap::{Args, Subcommand};

mod export;
mod import;

#[derive(Debug, Args)]
pub(crate) struct SiteCommand {
    #[command(subcommand)]
    command: SiteSubcommand,
}

#[derive(Debug, Subcommand)]
enum SiteSubcommand {
    Import(import::ImportSiteArgs),
    Export(export::ExportSiteArgs),
}

pub(crate) async fn run(command: SiteCommand) -> Result<(), String> {
    match command.command {
        SiteSubcommand::Import(args) => import::run(args).await,
        SiteSubcommand::Export(args) => export::run(args).await,
    }
}
