use clap::{Args, Subcommand};

mod render;

#[derive(Debug, Args)]
pub(crate) struct PageCommand {
    #[command(subcommand)]
    command: PageSubcommand,
}

#[derive(Debug, Subcommand)]
enum PageSubcommand {
    Render(render::RenderPageArgs),
}

pub(crate) async fn run(command: PageCommand) -> Result<(), String> {
    match command.command {
        PageSubcommand::Render(args) => render::run(args).await,
    }
}
