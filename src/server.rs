use crate::config::Config;
use crate::core_network::connector::{DataConnector, TcpConnector};
use crate::core_network::network;
use crate::core_storage::host::HostStorage;
use crate::core_storage::Storage;
use anyhow::Result;
use log::{error, info, warn};
use std::sync::Arc;

/// Runs the FTP server with the provided configuration.
///
/// Builds the host volume layer and the TCP data connector, then hands
/// control to the accept loop. A disabled server returns right away.
///
/// # Arguments
///
/// * `config` - The server configuration.
///
/// # Returns
///
/// Result<(), anyhow::Error> indicating the success or failure of the operation.
pub async fn run(config: Config) -> Result<()> {
    if !config.server.enabled {
        warn!("FTP server is disabled in the configuration, exiting.");
        return Ok(());
    }

    let volumes = config.volume_roots();
    for (letter, root) in &volumes {
        info!("Volume {} mounted from {:?}", letter, root);
    }
    if volumes.is_empty() {
        warn!("No volumes configured, clients will see an empty root.");
    }

    let storage: Arc<dyn Storage> = Arc::new(HostStorage::new(volumes));
    let connector: Arc<dyn DataConnector> = Arc::new(TcpConnector);

    match network::start_server(Arc::new(config), storage, connector).await {
        Ok(_) => info!("Server stopped."),
        Err(e) => {
            error!("Failed to start server: {:?}", e);
            return Err(e);
        }
    }

    Ok(())
}
