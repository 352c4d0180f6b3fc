use crate::constants::REPLY_DIRECTORY_NOT_FOUND;
use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::utils::send_response;
use crate::core_path::{is_virtual_root, resolve_working_directory, to_host_path};
use log::{info, warn};

/// Handles the CWD FTP command.
///
/// The new directory is committed only once storage confirms it exists. The
/// virtual root always exists.
pub async fn handle_cwd_command(ctx: CommandContext, arg: String) -> Result<(), std::io::Error> {
    let mut session = ctx.session.lock().await;
    let new_dir = resolve_working_directory(&session.working_directory, &arg);

    let exists = is_virtual_root(&new_dir)
        || match to_host_path(&new_dir) {
            Ok(host_path) => ctx.storage.is_directory(&host_path).await,
            Err(_) => false,
        };

    if exists {
        session.working_directory = new_dir;
        info!("Directory successfully changed to: {}", session.working_directory);
        let response = format!(
            "250 \"{}\" is current directory.\r\n",
            session.working_directory
        );
        drop(session);
        send_response(&ctx.writer, &response).await
    } else {
        drop(session);
        warn!("Failed to change directory to: {}", new_dir);
        send_response(&ctx.writer, REPLY_DIRECTORY_NOT_FOUND).await
    }
}
