use std::path::Path;

use clap::{Parser, Subcommand};
use serde_json::Value;

mod db;
mod page;
mod site;
mod theme;

#[derive(Debug, Parser)]
#[command(name = "cms-app", about = "Storefront CMS CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Theme(theme::ThemeCommand),
    Site(site::SiteCommand),
    Page(page::PageCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Theme(command) => theme::run(command).await,
            Commands::Site(command) => site::run(command).await,
            Commands::Page(command) => page::run(command).await,
        }
    }
}

/// Read and parse a JSON document from disk.
async fn read_json(path: &Path) -> Result<Value, String> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|error| format!("failed to read {}: {error}", path.display()))?;

    serde_json::from_str(&contents)
        .map_err(|error| format!("failed to parse {}: {error}", path.display()))
}

fn print_json(value: &impl serde::Serialize) -> Result<(), String> {
    let output = serde_json::to_string_pretty(value)
        .map_err(|error| format!("failed to serialize output: {error}"))?;

    println!("{output}");

    Ok(())
}
