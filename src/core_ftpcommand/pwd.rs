use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::utils::send_response;

/// Handles the PWD FTP command by quoting the virtual working directory.
pub async fn handle_pwd_command(ctx: CommandContext, _arg: String) -> std::io::Result<()> {
    let working_directory = ctx.session.lock().await.working_directory.clone();
    let response = format!("257 \"{}\" is current directory\r\n", working_directory);
    send_response(&ctx.writer, &response).await
}
