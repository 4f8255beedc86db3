use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod form;
mod session;


use cli::Cli;

/// Main entry point for the rentpredict command line.
#[tokio::main]
async fn main() -> Result<()> {
    // Secrets may live in .env; load it before clap reads the environment
    dotenvy::dotenv().ok();

    // Initialize tracing; stdout is reserved for the user-facing output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rentpredict=warn,client=warn,render=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    cli.run().await?;

    Ok(())
}
