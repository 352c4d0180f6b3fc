use crate::config::Config;
use crate::core_network::connector::DataConnector;
use crate::core_storage::Storage;
use crate::session::Session;
use std::sync::Arc;
use tokio::io::AsyncWrite;
use tokio::sync::Mutex;

/// Write half of the control channel.
pub type ControlWriter = Box<dyn AsyncWrite + Unpin + Send>;

/// Everything a command handler may touch for one session.
#[derive(Clone)]
pub struct CommandContext {
    pub writer: Arc<Mutex<ControlWriter>>,
    pub config: Arc<Config>,
    pub session: Arc<Mutex<Session>>,
    pub storage: Arc<dyn Storage>,
    pub connector: Arc<dyn DataConnector>,
}

impl CommandContext {
    pub fn new(
        writer: ControlWriter,
        config: Arc<Config>,
        storage: Arc<dyn Storage>,
        connector: Arc<dyn DataConnector>,
    ) -> Self {
        Self {
            writer: Arc::new(Mutex::new(writer)),
            config,
            session: Arc::new(Mutex::new(Session::new())),
            storage,
            connector,
        }
    }
}
