use crate::constants::REPLY_PARAMETER_NOT_IMPLEMENTED;
use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::utils::send_response;
use crate::session::TransferMode;
use log::info;

/// Handles the TYPE FTP command.
///
/// Only the first character of the argument matters: `A` selects ASCII and
/// `I` selects binary (IMAGE). Anything else leaves the mode unchanged.
///
/// # Arguments
///
/// * `ctx` - The session context.
/// * `arg` - The argument specifying the transfer type.
///
/// # Returns
///
/// Result<(), std::io::Error> indicating the success or failure of the operation.
pub async fn handle_type_command(ctx: CommandContext, arg: String) -> Result<(), std::io::Error> {
    let mode = match arg.chars().next() {
        Some('A') => TransferMode::Ascii,
        Some('I') => TransferMode::Binary,
        _ => return send_response(&ctx.writer, REPLY_PARAMETER_NOT_IMPLEMENTED).await,
    };

    ctx.session.lock().await.transfer_mode = mode;
    info!("Transfer mode set to {}", mode.name());
    let response = format!("200 Type set to {}\r\n", mode.name());
    send_response(&ctx.writer, &response).await
}
