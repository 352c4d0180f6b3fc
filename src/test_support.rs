//! Shared fixtures for engine tests: in-memory control and data channels.

use crate::config::Config;
use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::dispatcher::CommandDispatcher;
use crate::core_network::connector::{DataConnector, DataStream};
use crate::core_network::port::DataAddress;
use crate::core_storage::memory::MemoryStorage;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{duplex, AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader, DuplexStream};

const CHANNEL_CAPACITY: usize = 256 * 1024;

/// Hands out in-memory data channels and remembers where it was asked to connect.
#[derive(Default)]
pub struct DuplexConnector {
    requested: Mutex<Vec<DataAddress>>,
    clients: Mutex<Vec<DuplexStream>>,
    fail_next: AtomicBool,
}

impl DuplexConnector {
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    pub fn requested(&self) -> Vec<DataAddress> {
        self.requested.lock().unwrap().clone()
    }

    /// Client end of the most recent data connection.
    pub fn take_client(&self) -> Option<DuplexStream> {
        self.clients.lock().unwrap().pop()
    }
}

#[async_trait]
impl DataConnector for DuplexConnector {
    async fn open_data_connection(&self, address: &DataAddress) -> std::io::Result<DataStream> {
        self.requested.lock().unwrap().push(*address);
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            ));
        }
        let (server, client) = duplex(CHANNEL_CAPACITY);
        self.clients.lock().unwrap().push(client);
        Ok(Box::new(server))
    }
}

/// One session wired to memory storage (volumes C and E) and duplex channels.
pub struct TestHarness {
    pub ctx: CommandContext,
    pub storage: Arc<MemoryStorage>,
    pub connector: Arc<DuplexConnector>,
    dispatcher: CommandDispatcher,
    replies: BufReader<DuplexStream>,
}

impl TestHarness {
    pub async fn new() -> Self {
        Self::with_storage(MemoryStorage::with_volumes(&['C', 'E'])).await
    }

    pub async fn with_storage(storage: MemoryStorage) -> Self {
        let (server, replies) = duplex(CHANNEL_CAPACITY);
        let storage = Arc::new(storage);
        let connector = Arc::new(DuplexConnector::default());
        let ctx = CommandContext::new(
            Box::new(server),
            Arc::new(Config::default()),
            storage.clone(),
            connector.clone(),
        );
        Self {
            ctx,
            storage,
            connector,
            dispatcher: CommandDispatcher::new(),
            replies: BufReader::new(replies),
        }
    }

    pub async fn logged_in() -> Self {
        let mut harness = Self::new().await;
        harness.login().await;
        harness
    }

    pub async fn login(&mut self) {
        self.command("USER", "xbox").await;
        assert_eq!(self.reply().await, "331 Password required.");
        self.command("PASS", "xbox").await;
        assert_eq!(self.reply().await, "230 User logged in, proceed.");
    }

    pub async fn send_line(&mut self, line: &str) {
        self.dispatcher.dispatch(&self.ctx, line).await.unwrap();
    }

    pub async fn command(&mut self, verb: &str, arg: &str) {
        self.send_line(&format!("{} {}\r\n", verb, arg)).await;
    }

    /// Next reply line without its CRLF.
    pub async fn reply(&mut self) -> String {
        let mut line = String::new();
        tokio::time::timeout(Duration::from_secs(5), self.replies.read_line(&mut line))
            .await
            .expect("no reply")
            .unwrap();
        assert!(line.ends_with("\r\n"), "reply not CRLF terminated: {:?}", line);
        line.trim_end().to_string()
    }

    pub async fn no_pending_reply(&mut self) -> bool {
        let mut line = String::new();
        tokio::time::timeout(Duration::from_millis(50), self.replies.read_line(&mut line))
            .await
            .is_err()
    }

    /// Plants a data connection in the session as PORT would, returning the client end.
    pub async fn open_data(&mut self) -> DuplexStream {
        let (server, client) = duplex(CHANNEL_CAPACITY);
        self.ctx.session.lock().await.data_stream = Some(Box::new(server));
        client
    }

    pub async fn read_data(mut client: DuplexStream) -> Vec<u8> {
        let mut received = Vec::new();
        client.read_to_end(&mut received).await.unwrap();
        received
    }

    /// Queues an upload and closes the client side of the data channel.
    pub async fn write_data(mut client: DuplexStream, contents: &[u8]) {
        client.write_all(contents).await.unwrap();
        client.shutdown().await.unwrap();
    }
}
