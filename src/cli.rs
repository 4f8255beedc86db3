use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{payload, predict, PayloadArgs, PredictArgs};

#[derive(Parser)]
#[command(name = "rentpredict")]
#[command(about = "Apartment rent price prediction for Switzerland")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Predict the rent of an apartment and chart the results
    ///
    /// Requests the point prediction, its quarterly development and its dependence on the
    /// building age. Each result is charted independently; a failing request only skips
    /// its own chart.
    ///
    /// Examples:
    ///   rentpredict predict --rooms 3.5 --size 85 --elevator --balcony-terrace
    ///   rentpredict predict --input apartment.yaml --output-dir charts
    Predict(PredictArgs),
    /// Print the request body that would be sent, without contacting the API
    Payload(PayloadArgs),
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Predict(args) => {
                predict(args).await?;
            }
            Commands::Payload(args) => {
                payload(args)?;
            }
        }
        Ok(())
    }
}
