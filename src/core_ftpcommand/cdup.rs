use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::cwd::handle_cwd_command;

/// Handles the CDUP FTP command, which is CWD `..`.
pub async fn handle_cdup_command(ctx: CommandContext, _arg: String) -> Result<(), std::io::Error> {
    handle_cwd_command(ctx, String::from("..")).await
}
