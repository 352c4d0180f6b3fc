use crate::constants::{REPLY_ACTION_NOT_TAKEN, REPLY_BAD_SEQUENCE, REPLY_FILE_ACTION_OK};
use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::utils::{host_path_for, send_response};
use log::{error, info, warn};

/// Handles the RNTO (Rename To) FTP command.
///
/// The pending RNFR source is consumed whatever the outcome. Without one the
/// command is a sequencing error.
pub async fn handle_rnto_command(ctx: CommandContext, arg: String) -> Result<(), std::io::Error> {
    let (old_path, new_path) = {
        let mut session = ctx.session.lock().await;
        let old_path = session.rename_from.take();
        (old_path, host_path_for(&session, &arg))
    };

    let Some(old_path) = old_path else {
        warn!("RNTO without a pending RNFR");
        return send_response(&ctx.writer, REPLY_BAD_SEQUENCE).await;
    };
    let new_path = match new_path {
        Ok(path) => path,
        Err(e) => {
            warn!("RNTO rejected: {}", e);
            return send_response(&ctx.writer, e.to_ftp_response()).await;
        }
    };

    info!("Moving: '{}' to '{}'", old_path, new_path);
    match ctx.storage.rename(&old_path, &new_path).await {
        Ok(()) => send_response(&ctx.writer, REPLY_FILE_ACTION_OK).await,
        Err(e) => {
            error!("Failed to rename {} to {}: {}", old_path, new_path, e);
            send_response(&ctx.writer, REPLY_ACTION_NOT_TAKEN).await
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core_path::to_host_path;
    use crate::test_support::TestHarness;

    #[tokio::test]
    async fn test_rename_round_trip() {
        let mut harness = TestHarness::logged_in().await;
        let from = to_host_path("/C/old.txt").unwrap();
        let to = to_host_path("/E/new.txt").unwrap();
        harness.storage.add_file(&from, b"payload");
        harness.ctx.session.lock().await.working_directory = "/C/".to_string();

        harness.command("RNFR", "old.txt").await;
        assert!(harness.reply().await.starts_with("350"));
        harness.command("RNTO", "/E/new.txt").await;
        assert_eq!(harness.reply().await, "250 Requested file action ok.");

        assert!(harness.storage.file(&from).is_none());
        assert_eq!(harness.storage.file(&to).unwrap(), b"payload");
        assert!(harness.ctx.session.lock().await.rename_from.is_none());
    }

    #[tokio::test]
    async fn test_rnto_without_rnfr() {
        let mut harness = TestHarness::logged_in().await;
        harness.command("RNTO", "/C/x").await;
        assert_eq!(harness.reply().await, "503 Bad sequence of commands.");
    }

    #[tokio::test]
    async fn test_failed_rename_clears_source() {
        let mut harness = TestHarness::logged_in().await;
        harness.command("RNFR", "/C/ghost").await;
        assert!(harness.reply().await.starts_with("350"));
        harness.command("RNTO", "/C/still-ghost").await;
        assert_eq!(harness.reply().await, "553 Requested action not taken.");

        harness.command("RNTO", "/C/again").await;
        assert_eq!(harness.reply().await, "503 Bad sequence of commands.");
    }
}
