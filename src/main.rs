//! gridtac - unified CLI

use anyhow::Result;
use clap::Parser;
use gridtac::{AppConfig, Cli, Command, PlayArgs, commands, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play(PlayArgs::default())) {
        Command::Play(args) => {
            let config = AppConfig::load(cli.config.as_deref())?.with_overrides(&args);
            run_tui(config).await
        }
        Command::Replay { size, json, moves } => {
            initialize_stderr_tracing();
            println!("{}", commands::replay(size, &moves, json)?);
            Ok(())
        }
        Command::Lines { size } => {
            initialize_stderr_tracing();
            println!("{}", commands::lines(size)?);
            Ok(())
        }
    }
}

#[instrument]
fn initialize_stderr_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,gridtac=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Tracing initialized");
}
