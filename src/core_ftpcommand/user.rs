use crate::constants::{REPLY_LOGIN_FAILED, REPLY_PASSWORD_REQUIRED};
use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::utils::send_response;
use log::{info, warn};

/// Handles the USER FTP command.
///
/// The name is checked against the configured account. The outcome is only
/// reported; login state is decided by PASS alone.
///
/// # Arguments
///
/// * `ctx` - The session context.
/// * `username` - The username provided by the client.
///
/// # Returns
///
/// Result<(), std::io::Error> indicating the success or failure of the operation.
pub async fn handle_user_command(ctx: CommandContext, username: String) -> Result<(), std::io::Error> {
    info!("Received USER command with username: {}", username);

    if username == ctx.config.server.username {
        info!("Username accepted: {}", username);
        send_response(&ctx.writer, REPLY_PASSWORD_REQUIRED).await
    } else {
        warn!("Unknown username: {}", username);
        send_response(&ctx.writer, REPLY_LOGIN_FAILED).await
    }
}
