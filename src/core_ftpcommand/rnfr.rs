use crate::constants::REPLY_PENDING_FURTHER_INFORMATION;
use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::utils::{host_path_for, send_response};
use log::{info, warn};

/// Handles the RNFR (Rename From) FTP command.
///
/// Remembers the source path for the following RNTO. Existence is not checked
/// here; a missing source surfaces when RNTO attempts the rename.
///
/// # Arguments
///
/// * `ctx` - The session context.
/// * `arg` - The current name of the file or directory.
///
/// # Returns
///
/// Result<(), std::io::Error> indicating the success or failure of the operation.
pub async fn handle_rnfr_command(ctx: CommandContext, arg: String) -> Result<(), std::io::Error> {
    let mut session = ctx.session.lock().await;
    match host_path_for(&session, &arg) {
        Ok(path) => {
            info!("Rename source set to {}", path);
            session.rename_from = Some(path);
            drop(session);
            send_response(&ctx.writer, REPLY_PENDING_FURTHER_INFORMATION).await
        }
        Err(e) => {
            drop(session);
            warn!("RNFR rejected: {}", e);
            send_response(&ctx.writer, e.to_ftp_response()).await
        }
    }
}
