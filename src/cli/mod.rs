mod check;

pub use check::CheckArgs;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::server::{self, AppState};
use crate::services::{Config, Logger, StderrLogger};

/// Cheapest car rental deal finder
#[derive(Parser)]
#[command(name = "car-deals")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to ~/.car-deals/config.json when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web app (default)
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the cheapest deals to the terminal
    Check(CheckArgs),
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load(self.config.as_deref())?;
        let logger: Arc<dyn Logger> = Arc::new(StderrLogger::new(config.log_level));

        match self.command {
            None => serve(config, logger),
            Some(Commands::Serve { host, port }) => {
                if let Some(host) = host {
                    config.host = host;
                }
                if let Some(port) = port {
                    config.port = port;
                }
                serve(config, logger)
            }
            Some(Commands::Check(args)) => {
                println!("{}", args.execute(&config, logger)?);
                Ok(())
            }
        }
    }
}

fn serve(config: Config, logger: Arc<dyn Logger>) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(config, logger));
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(server::run(state))?;
    Ok(())
}
