//! leguichet binary entry point

use anyhow::Context;
use clap::Parser;
use leguichet::{GuichetServer, ServerConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// LeGuichet - DeConcierge HTTP front desk
#[derive(Parser, Debug)]
#[command(name = "leguichet")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve intent plans, inventory and timelines over HTTP", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(long = "config", short = 'c')]
    config: Option<PathBuf>,

    /// Host address to bind to
    #[arg(long = "host")]
    host: Option<String>,

    /// Port to listen on
    #[arg(long = "port")]
    port: Option<u16>,

    /// JSON catalog to serve instead of the built-in sample
    #[arg(long = "catalog")]
    catalog: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long = "verbose", short = 'v')]
    verbose: bool,
}

impl Cli {
    /// File, then environment, then flags
    fn resolve_config(&self) -> anyhow::Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_file(path)?,
            None => ServerConfig::default(),
        };
        config.apply_env();

        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(catalog) = &self.catalog {
            config.catalog_path = Some(catalog.clone());
        }
        if self.verbose {
            config.log_level = "debug".to_string();
        }

        Ok(config)
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config().context("Failed to resolve configuration")?;

    init_logging(&config.log_level);

    info!("LeGuichet starting");
    info!("  Host: {}", config.host);
    info!("  Port: {}", config.port);
    info!(
        "  Catalog: {}",
        config
            .catalog_path
            .as_ref()
            .map_or_else(|| "<built-in sample>".to_string(), |p| p.display().to_string())
    );

    let server = GuichetServer::new(config)?;
    server.start().await?;

    info!("LeGuichet stopped");
    Ok(())
}
