use crate::constants::{
    REPLY_ACTION_NOT_TAKEN, REPLY_OPENING_DATA_CONNECTION_FOR_LS, REPLY_TRANSFER_ABORTED,
    REPLY_TRANSFER_FINISHED,
};
use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::utils::{close_data_stream, send_response, take_data_stream};
use crate::core_path::resolve_working_directory;
use crate::core_transfer::listing;
use log::{error, info};
use tokio::io::AsyncWriteExt;

/// Picks the directory to list. No argument, or only `ls`-style flags, means
/// the working directory.
fn listing_path(working_directory: &str, arg: &str) -> String {
    let arg = arg.trim();
    if arg.is_empty() || arg.starts_with('-') {
        working_directory.to_string()
    } else if arg.starts_with('/') {
        arg.to_string()
    } else {
        resolve_working_directory(working_directory, arg)
    }
}

async fn send_listing(ctx: CommandContext, arg: String, names_only: bool) -> Result<(), std::io::Error> {
    let Some(mut data_stream) = take_data_stream(&ctx).await? else {
        return Ok(());
    };

    let path = {
        let session = ctx.session.lock().await;
        listing_path(&session.working_directory, &arg)
    };

    let lines = match listing::list(ctx.storage.as_ref(), &path, names_only).await {
        Ok(lines) => lines,
        Err(e) => {
            error!("Failed to list {}: {}", path, e);
            close_data_stream(data_stream).await;
            return send_response(&ctx.writer, REPLY_ACTION_NOT_TAKEN).await;
        }
    };

    send_response(&ctx.writer, REPLY_OPENING_DATA_CONNECTION_FOR_LS).await?;
    let mut result = Ok(());
    for line in &lines {
        result = data_stream.write_all(line.as_bytes()).await;
        if result.is_err() {
            break;
        }
    }
    if result.is_ok() {
        result = data_stream.flush().await;
    }
    close_data_stream(data_stream).await;

    match result {
        Ok(()) => {
            info!("Directory listing of {} sent ({} entries).", path, lines.len());
            send_response(&ctx.writer, REPLY_TRANSFER_FINISHED).await
        }
        Err(e) => {
            error!("Failed to send directory listing: {:?}", e);
            send_response(&ctx.writer, REPLY_TRANSFER_ABORTED).await
        }
    }
}

/// Handles the LIST FTP command with `ls -l` style lines.
pub async fn handle_list_command(ctx: CommandContext, arg: String) -> Result<(), std::io::Error> {
    send_listing(ctx, arg, false).await
}

/// Handles the NLST FTP command, one bare name per line.
pub async fn handle_nlst_command(ctx: CommandContext, arg: String) -> Result<(), std::io::Error> {
    send_listing(ctx, arg, true).await
}
