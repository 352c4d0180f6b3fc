use crate::constants::{REPLY_ACTION_NOT_TAKEN, REPLY_FILE_ACTION_OK};
use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::utils::{host_path_for, send_response};
use log::{error, info, warn};

/// Handles the RMD (Remove Directory) FTP command. Only empty directories can be removed.
pub async fn handle_rmd_command(ctx: CommandContext, arg: String) -> Result<(), std::io::Error> {
    let host_path = {
        let session = ctx.session.lock().await;
        host_path_for(&session, &arg)
    };
    let host_path = match host_path {
        Ok(path) => path,
        Err(e) => {
            warn!("RMD rejected: {}", e);
            return send_response(&ctx.writer, e.to_ftp_response()).await;
        }
    };

    match ctx.storage.rmdir(&host_path).await {
        Ok(()) => {
            info!("Removed directory: {}", host_path);
            send_response(&ctx.writer, REPLY_FILE_ACTION_OK).await
        }
        Err(e) => {
            error!("Failed to rmdir {}: {}", host_path, e);
            send_response(&ctx.writer, REPLY_ACTION_NOT_TAKEN).await
        }
    }
}
