use crate::constants::REPLY_UNIX_TYPE_L8;
use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::utils::send_response;
use log::info;

/// Handles the SYST (System) FTP command.
///
/// Always answers UNIX so clients parse listings the same way on every host.
pub async fn handle_syst_command(ctx: CommandContext, _arg: String) -> Result<(), std::io::Error> {
    info!("Responding to SYST command with system type.");
    send_response(&ctx.writer, REPLY_UNIX_TYPE_L8).await
}
