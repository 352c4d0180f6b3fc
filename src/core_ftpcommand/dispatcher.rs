use crate::constants::REPLY_NOT_LOGGED_IN;
use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::ftpcommand::FtpCommand;
use crate::core_ftpcommand::handlers::{initialize_command_handlers, CommandHandler};
use crate::core_ftpcommand::utils::send_response;
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::Arc;

/// Splits a control line into verb and argument.
///
/// The verb ends at the first space or carriage return. The argument runs
/// from after that space up to the carriage return; a line without one gets
/// `" "` as argument.
pub fn parse_command(line: &str) -> (&str, &str) {
    let line = line.strip_suffix('\n').unwrap_or(line);
    match line.find(|c: char| c == ' ' || c == '\r') {
        Some(idx) if line.as_bytes()[idx] == b' ' => {
            let rest = &line[idx + 1..];
            let arg = match rest.find('\r') {
                Some(end) => &rest[..end],
                None => rest,
            };
            (&line[..idx], arg)
        }
        Some(idx) => (&line[..idx], " "),
        None => (line, " "),
    }
}

/// Routes control lines to command handlers behind the login gate.
pub struct CommandDispatcher {
    handlers: HashMap<FtpCommand, Arc<CommandHandler>>,
}

impl CommandDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: initialize_command_handlers(),
        }
    }

    /// Runs one control line to completion.
    ///
    /// Returns an error only when the control channel could not be written.
    pub async fn dispatch(&self, ctx: &CommandContext, line: &str) -> Result<(), std::io::Error> {
        let (verb, arg) = parse_command(line);
        if verb == "PASS" {
            debug!("Received command: PASS ****");
        } else {
            debug!("Received command: {} {}", verb, arg.trim_end());
        }

        let command = FtpCommand::from_str(verb);
        let is_authenticated = ctx.session.lock().await.is_authenticated;
        let routable = is_authenticated || command.map_or(false, |c| c.is_pre_auth());
        if !routable {
            warn!("Rejected {} before login", verb);
            return send_response(&ctx.writer, REPLY_NOT_LOGGED_IN).await;
        }

        match command.and_then(|c| self.handlers.get(&c)) {
            Some(handler) => handler(ctx.clone(), arg.to_string()).await,
            None => {
                send_response(&ctx.writer, &format!("502 {} not implemented.\r\n", verb)).await
            }
        }
    }
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
