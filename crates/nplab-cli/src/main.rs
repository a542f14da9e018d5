//! NP-lab dashboard client - Entry Point

use anyhow::Result;
use clap::Parser;
use nplab_cli::{AppConfig, Application, Cli};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config path: CLI arg > NPLAB_CONFIG env var > default
    let (config_path, explicit) = AppConfig::resolve_path(cli.config);
    let mut config = AppConfig::load(&config_path, explicit)?;
    if let Some(base_url) = cli.base_url {
        config.client.base_url = base_url;
    }

    // Logs go to stderr; stdout carries the JSON result
    nplab_telemetry::init_logging(Some(&config.telemetry.log_level))?;

    info!("Starting nplab-dash v{}", env!("CARGO_PKG_VERSION"));
    info!(config_path = %config_path, explicit, "Configuration loaded");

    let app = Application::new(&config, cli.token)?;
    let output = app.run(cli.command).await?;

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
