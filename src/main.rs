mod config;
mod constants;
mod core_cli;
mod core_ftpcommand;
mod core_log;
mod core_network;
mod core_path;
mod core_storage;
mod core_transfer;
mod server;
mod session;
#[cfg(test)]
mod test_support;

use crate::config::Config;
use crate::constants::DEFAULT_CONFIG_PATH;
use crate::core_cli::Cli;
use anyhow::Result;
use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Cli::parse();

    core_log::logger::init_logger(args.verbose);

    let config_path = if args.config.is_empty() {
        DEFAULT_CONFIG_PATH
    } else {
        args.config.as_str()
    };
    let mut config = Config::load_from_file(config_path)?;
    info!("Loaded configuration from {}", config_path);

    // Override the listening port from CLI if provided
    if let Some(listen_port) = args.listen_port {
        config.server.listen_port = listen_port;
    }

    server::run(config).await?;

    Ok(())
}
