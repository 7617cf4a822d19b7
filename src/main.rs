use anyhow::Result;
use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;
use tracing::{error, info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use song_catalog_server::catalog::{load_catalog, DEFAULT_DATA_FILE};
use song_catalog_server::config::{
    AppConfig, CliConfig, FileConfig, DEFAULT_METRICS_PORT, DEFAULT_PORT,
};
use song_catalog_server::server::{metrics, run_server, RequestsLoggingLevel};

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the JSON file holding the songs array.
    #[clap(default_value = DEFAULT_DATA_FILE)]
    pub data_path: PathBuf,

    /// Path to a TOML config file. Its values override the command line.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// The address to bind to.
    #[clap(long)]
    pub bind_address: Option<IpAddr>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// The port for the metrics server (Prometheus scraping).
    #[clap(long, default_value_t = DEFAULT_METRICS_PORT)]
    pub metrics_port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            data_path: Some(self.data_path.clone()),
            bind_address: self.bind_address,
            port: self.port,
            metrics_port: self.metrics_port,
            logging_level: self.logging_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Reading config file {:?}...", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let app_config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    let catalog = match load_catalog(&app_config.data_path) {
        Ok(catalog) => catalog,
        Err(err) => {
            error!("Error loading songs: {}", err);
            return Err(err.into());
        }
    };

    metrics::init_metrics();
    metrics::init_catalog_metrics(catalog.len());

    tokio::select! {
        result = run_server(app_config.server_config(), catalog, app_config.metrics_port) => {
            info!("Server stopped: {:?}", result);
            result
        },
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down");
            Ok(())
        }
    }
}
