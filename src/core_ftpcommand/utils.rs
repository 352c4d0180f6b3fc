use crate::constants::REPLY_NO_DATA_CONNECTION;
use crate::core_ftpcommand::context::{CommandContext, ControlWriter};
use crate::core_network::connector::DataStream;
use crate::core_path::{resolve_argument, to_host_path, HostPath, PathError};
use crate::session::Session;
use log::{debug, warn};
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Sends a response message to the client via the writer.
pub async fn send_response(
    writer: &Arc<Mutex<ControlWriter>>,
    message: &str,
) -> Result<(), std::io::Error> {
    let mut writer = writer.lock().await;
    writer.write_all(message.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}

/// Resolves a command argument against the session and translates it to a
/// host path.
pub fn host_path_for(session: &Session, arg: &str) -> Result<HostPath, PathError> {
    to_host_path(&resolve_argument(&session.working_directory, arg))
}

/// Takes ownership of the session's data connection, replying 425 when
/// PORT/EPRT did not open one.
pub async fn take_data_stream(
    ctx: &CommandContext,
) -> Result<Option<DataStream>, std::io::Error> {
    let data_stream = ctx.session.lock().await.take_data_stream();
    if data_stream.is_none() {
        warn!("Transfer requested without a data connection");
        send_response(&ctx.writer, REPLY_NO_DATA_CONNECTION).await?;
    }
    Ok(data_stream)
}

/// Closes a data connection after its single use.
pub async fn close_data_stream(mut data_stream: DataStream) {
    if let Err(e) = data_stream.shutdown().await {
        debug!("Failed to shutdown data stream: {:?}", e);
    }
}
