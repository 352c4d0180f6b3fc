use crate::constants::{REPLY_ACTION_NOT_TAKEN, REPLY_TRANSFER_FINISHED};
use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::utils::{
    close_data_stream, host_path_for, send_response, take_data_stream,
};
use crate::core_transfer::stream::send_file;
use log::{error, info, warn};

/// Handles the RETR (Retrieve) FTP command.
///
/// Streams the file over the pending data connection using the session's
/// transfer mode, then closes that connection. The control channel gets a
/// 553 if the file cannot be opened and a 426/451 if the transfer breaks off.
///
/// # Arguments
///
/// * `ctx` - The session context.
/// * `arg` - The name of the file to retrieve.
///
/// # Returns
///
/// Result<(), std::io::Error> indicating the success or failure of the operation.
pub async fn handle_retr_command(ctx: CommandContext, arg: String) -> Result<(), std::io::Error> {
    let Some(mut data_stream) = take_data_stream(&ctx).await? else {
        return Ok(());
    };

    let (host_path, mode) = {
        let session = ctx.session.lock().await;
        (host_path_for(&session, &arg), session.transfer_mode)
    };
    let host_path = match host_path {
        Ok(path) => path,
        Err(e) => {
            warn!("RETR rejected: {}", e);
            close_data_stream(data_stream).await;
            return send_response(&ctx.writer, e.to_ftp_response()).await;
        }
    };

    let mut file = match ctx.storage.open_for_read(&host_path).await {
        Ok(file) => file,
        Err(e) => {
            error!("File could not be opened: {}, error: {}", host_path, e);
            close_data_stream(data_stream).await;
            return send_response(&ctx.writer, REPLY_ACTION_NOT_TAKEN).await;
        }
    };

    send_response(&ctx.writer, &format!("150 Sending file {}\r\n", arg)).await?;
    info!("Sending file: {}", host_path);
    let result = send_file(&mut file, &mut data_stream, mode).await;
    close_data_stream(data_stream).await;

    match result {
        Ok(bytes) => {
            info!("File transfer completed successfully: {} ({} bytes)", host_path, bytes);
            send_response(&ctx.writer, REPLY_TRANSFER_FINISHED).await
        }
        Err(e) => {
            error!("Error sending {}: {}", host_path, e);
            send_response(&ctx.writer, e.to_ftp_response()).await
        }
    }
}
