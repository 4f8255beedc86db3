use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use client::{ApiKey, ClientSettings, DEFAULT_API_HOST};

/// Connection and output settings, read from flags or the environment (`.env` included).
#[derive(Clone, Args)]
pub struct ConnectionArgs {
    /// API key of the prediction service
    #[arg(long, env = "IMMOLEX_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Base URL of the prediction service
    #[arg(long, env = "RENTPREDICT_API_HOST", default_value = DEFAULT_API_HOST)]
    pub api_host: String,

    /// HTTP timeout per request, in seconds (at least 1)
    #[arg(
        long,
        env = "RENTPREDICT_TIMEOUT_SECS",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    /// Directory the chart documents are written to
    #[arg(short, long, env = "RENTPREDICT_OUTPUT_DIR", default_value = "charts")]
    pub output_dir: PathBuf,
}

/// Application configuration, built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_host: String,
    pub api_key: ApiKey,
    pub timeout: Duration,
    pub output_dir: PathBuf,
}

impl From<ConnectionArgs> for AppConfig {
    fn from(args: ConnectionArgs) -> Self {
        Self {
            api_host: args.api_host,
            api_key: ApiKey::new(args.api_key),
            timeout: Duration::from_secs(args.timeout_secs),
            output_dir: args.output_dir,
        }
    }
}

impl AppConfig {
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings::new(self.api_host.clone(), self.api_key.clone()).with_timeout(self.timeout)
    }
}
