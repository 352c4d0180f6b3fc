use crate::constants::{REPLY_ACTION_NOT_TAKEN, REPLY_FILE_ACTION_OK};
use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::utils::{host_path_for, send_response};
use log::{error, info, warn};

/// Handles the MKD (Make Directory) FTP command.
///
/// Unlike most servers this replies 250 rather than 257, and the parent must
/// already exist.
pub async fn handle_mkd_command(ctx: CommandContext, arg: String) -> Result<(), std::io::Error> {
    let host_path = {
        let session = ctx.session.lock().await;
        host_path_for(&session, &arg)
    };
    let host_path = match host_path {
        Ok(path) => path,
        Err(e) => {
            warn!("MKD rejected: {}", e);
            return send_response(&ctx.writer, e.to_ftp_response()).await;
        }
    };

    match ctx.storage.mkdir(&host_path).await {
        Ok(()) => {
            info!("Created directory: {}", host_path);
            send_response(&ctx.writer, REPLY_FILE_ACTION_OK).await
        }
        Err(e) => {
            error!("Failed to mkdir {}: {}", host_path, e);
            send_response(&ctx.writer, REPLY_ACTION_NOT_TAKEN).await
        }
    }
}
