use crate::constants::{REPLY_LOGIN_FAILED, REPLY_USER_LOGGED_IN};
use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::utils::send_response;
use log::{info, warn};

/// Handles the PASS FTP command.
///
/// A matching password logs the session in. A preceding USER is not required.
pub async fn handle_pass_command(ctx: CommandContext, password: String) -> Result<(), std::io::Error> {
    if password == ctx.config.server.password {
        ctx.session.lock().await.is_authenticated = true;
        info!("User logged in.");
        send_response(&ctx.writer, REPLY_USER_LOGGED_IN).await
    } else {
        warn!("Login authentication failed.");
        send_response(&ctx.writer, REPLY_LOGIN_FAILED).await
    }
}
