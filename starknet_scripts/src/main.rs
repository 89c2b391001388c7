use clap::Parser;
use conode_scripts::{
    cli::{CliArgs, Commands},
    commands::{deploy::deploy, market},
};
use eyre::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log filter used when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "info";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    match CliArgs::parse().command {
        Commands::Deploy(args) => deploy(args).await.map(|_| ())?,
        Commands::RegisterMarket(args) => market::register(args).await.map(|_| ())?,
        Commands::ListMarkets(args) => market::list(args).await?,
    };

    Ok(())
}
