use crate::constants::{REPLY_ACTION_NOT_TAKEN, REPLY_TRANSFER_FINISHED};
use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::utils::{
    close_data_stream, host_path_for, send_response, take_data_stream,
};
use crate::core_transfer::stream::receive_file;
use log::{error, info, warn};

/// Handles the STOR (Store File) FTP command.
///
/// The destination is created or truncated, then filled from the data
/// connection until the client closes it. Bytes are stored as received in
/// both transfer modes.
pub async fn handle_stor_command(ctx: CommandContext, arg: String) -> Result<(), std::io::Error> {
    let Some(mut data_stream) = take_data_stream(&ctx).await? else {
        return Ok(());
    };

    let host_path = {
        let session = ctx.session.lock().await;
        host_path_for(&session, &arg)
    };
    let host_path = match host_path {
        Ok(path) => path,
        Err(e) => {
            warn!("STOR rejected: {}", e);
            close_data_stream(data_stream).await;
            return send_response(&ctx.writer, e.to_ftp_response()).await;
        }
    };

    let mut file = match ctx.storage.open_for_write(&host_path).await {
        Ok(file) => file,
        Err(e) => {
            error!("Failed to create file: {}, error: {}", host_path, e);
            close_data_stream(data_stream).await;
            return send_response(&ctx.writer, REPLY_ACTION_NOT_TAKEN).await;
        }
    };

    send_response(&ctx.writer, &format!("150 Receiving file {}\r\n", arg)).await?;
    info!("Receiving file: {}", host_path);
    let result = receive_file(&mut data_stream, &mut file).await;
    drop(file);
    close_data_stream(data_stream).await;

    match result {
        Ok(bytes) => {
            info!("File stored successfully: {} ({} bytes)", host_path, bytes);
            send_response(&ctx.writer, REPLY_TRANSFER_FINISHED).await
        }
        Err(e) => {
            error!("Error receiving {}: {}", host_path, e);
            send_response(&ctx.writer, e.to_ftp_response()).await
        }
    }
}
