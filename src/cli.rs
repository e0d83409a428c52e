use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::{app::App, config::Config, interactive};

#[derive(Debug, Parser)]
#[command(author, version, about = "Find somewhere to eat nearby")]
pub struct Args {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show restaurants around an address
    Search { address: String },
    /// List address suggestions for a partial input
    Suggest { text: String },
    /// Pick a random restaurant near your current location
    ChooseForMe,
    /// Start an interactive session
    Interactive,
}

pub async fn run(cmd: Command, cfg: Config) -> Result<()> {
    let app = App::new(cfg)?;
    match cmd {
        Command::Search { address } => app.search(&address).await,
        Command::Suggest { text } => {
            app.suggest(&text).await;
            Ok(())
        }
        Command::ChooseForMe => app.choose_for_me().await,
        Command::Interactive => interactive::run(&app).await,
    }
}
