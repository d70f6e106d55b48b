use clap::{Args, Subcommand};

mod get;
mod save;

#[derive(Debug, Args)]
pub(crate) struct ThemeCommand {
    #[command(subcommand)]
    command: ThemeSubcommand,
}

#[derive(Debug, Subcommand)]
enum ThemeSubcommand {
    Get(get::GetThemeArgs),
    Save(save::SaveThemeArgs),
}

pub(crate) async fn run(command: ThemeCommand) -> Result<(), String> {
    match command.command {
        ThemeSubcommand::Get(args) => get::run(args).await,
        ThemeSubcommand::Save(args) => save::run(args).await,
    }
}
