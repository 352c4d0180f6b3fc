use crate::config::Config;
use crate::constants::{
    MAX_COMMAND_LENGTH, REPLY_IDLE_TIMEOUT, REPLY_LINE_TOO_LONG, REPLY_PLEASE_LOGIN,
};
use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::dispatcher::CommandDispatcher;
use crate::core_ftpcommand::utils::send_response;
use crate::core_network::connector::DataConnector;
use crate::core_storage::Storage;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, BufReader};
use tokio::net::TcpListener;

/// Binds the control port and serves clients until the process stops.
pub async fn start_server(
    config: Arc<Config>,
    storage: Arc<dyn Storage>,
    connector: Arc<dyn DataConnector>,
) -> Result<()> {
    let listen_port = config.server.listen_port;
    let listener = TcpListener::bind(("0.0.0.0", listen_port))
        .await
        .with_context(|| format!("Failed to bind control port {}", listen_port))?;
    info!("Server listening on port {}", listen_port);

    accept_connections(listener, config, storage, connector).await
}

/// Accept loop: one task per client, each with its own session.
pub async fn accept_connections(
    listener: TcpListener,
    config: Arc<Config>,
    storage: Arc<dyn Storage>,
    connector: Arc<dyn DataConnector>,
) -> Result<()> {
    loop {
        let (socket, addr) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!("Failed to accept connection: {:?}", e);
                continue;
            }
        };
        info!("New connection from {:?}", addr);

        let config = Arc::clone(&config);
        let storage = Arc::clone(&storage);
        let connector = Arc::clone(&connector);

        tokio::spawn(async move {
            let (reader, writer) = socket.into_split();
            if let Err(e) = serve_session(reader, writer, config, storage, connector).await {
                warn!("Connection error: {:?}", e);
            }
            info!("Connection closed for {:?}", addr);
        });
    }
}

/// Outcome of one bounded read on the control channel.
#[derive(Debug, PartialEq, Eq)]
enum ControlLine {
    Command,
    TooLong,
    Closed,
}

/// Reads one command line of at most `MAX_COMMAND_LENGTH` bytes into `buffer`.
///
/// A line that does not fit is dropped whole, up to and including its `\n`,
/// so none of it ever reaches the dispatcher.
async fn read_control_line<R>(reader: &mut R, buffer: &mut Vec<u8>) -> std::io::Result<ControlLine>
where
    R: AsyncBufRead + Unpin,
{
    buffer.clear();
    let n = (&mut *reader)
        .take(MAX_COMMAND_LENGTH)
        .read_until(b'\n', buffer)
        .await?;

    if n == 0 {
        return Ok(ControlLine::Closed);
    }
    if buffer.ends_with(b"\n") || (n as u64) < MAX_COMMAND_LENGTH {
        return Ok(ControlLine::Command);
    }

    loop {
        let (consumed, found) = {
            let available = reader.fill_buf().await?;
            if available.is_empty() {
                break;
            }
            match available.iter().position(|&b| b == b'\n') {
                Some(idx) => (idx + 1, true),
                None => (available.len(), false),
            }
        };
        reader.consume(consumed);
        if found {
            break;
        }
    }
    Ok(ControlLine::TooLong)
}

/// Runs one control connection: greeting, then one command line at a time
/// until the client goes away, the channel breaks or the idle timeout fires.
pub async fn serve_session<R, W>(
    reader: R,
    writer: W,
    config: Arc<Config>,
    storage: Arc<dyn Storage>,
    connector: Arc<dyn DataConnector>,
) -> Result<(), std::io::Error>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let idle_timeout = config.server.idle_timeout.map(Duration::from_secs);
    let ctx = CommandContext::new(Box::new(writer), config, storage, connector);
    let dispatcher = CommandDispatcher::new();

    send_response(&ctx.writer, REPLY_PLEASE_LOGIN).await?;

    let mut reader = BufReader::new(reader);
    let mut buffer = Vec::new();

    loop {
        let read = read_control_line(&mut reader, &mut buffer);
        let outcome = match idle_timeout {
            Some(limit) => match tokio::time::timeout(limit, read).await {
                Ok(result) => result?,
                Err(_) => {
                    info!("Control connection idle for {:?}, closing", limit);
                    send_response(&ctx.writer, REPLY_IDLE_TIMEOUT).await?;
                    break;
                }
            },
            None => read.await?,
        };

        match outcome {
            ControlLine::Closed => {
                debug!("Client closed the control connection");
                break;
            }
            ControlLine::TooLong => {
                warn!("Dropped a command line over {} bytes", MAX_COMMAND_LENGTH);
                send_response(&ctx.writer, REPLY_LINE_TOO_LONG).await?;
            }
            ControlLine::Command => {
                let line = String::from_utf8_lossy(&buffer);
                dispatcher.dispatch(&ctx, &line).await?;
            }
        }
    }
    Ok(())
}
