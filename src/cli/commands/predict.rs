use anyhow::Result;
use clap::Args;
use client::PredictionClient;
use render::{ConsoleReporter, HtmlDirectorySink, Renderer};
use tracing::{debug, error, info, trace};

use crate::config::{AppConfig, ConnectionArgs};
use crate::form::FormArgs;
use crate::session::PredictionSession;

#[derive(Args)]
pub struct PredictArgs {
    #[command(flatten)]
    pub form: FormArgs,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Send the three prediction requests concurrently
    #[arg(long)]
    pub parallel: bool,
}

pub async fn predict(args: PredictArgs) -> Result<()> {
    trace!("Entering predict function");
    let request = args.form.resolve()?.to_request()?;
    let config = AppConfig::from(args.connection);
    debug!("API host: {}", config.api_host);
    debug!("Output directory: {}", config.output_dir.display());

    let client = match PredictionClient::new(config.client_settings()) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create prediction client: {}", e);
            return Err(e.into());
        }
    };

    let reporter = ConsoleReporter;
    let sink = HtmlDirectorySink::new(&config.output_dir);
    let session = PredictionSession::new(&client, Renderer::new(&reporter, &sink));

    info!("Requesting predictions for {}", request.address);
    let report = if args.parallel {
        session.run_concurrently(&request).await
    } else {
        session.run(&request).await
    };
    debug!(?report, "Session report");

    Ok(())
}
