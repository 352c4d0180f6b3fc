use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::ftpcommand::FtpCommand;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

// Active-mode data connection commands
use crate::core_network::port;

pub type CommandHandler = Box<
    dyn Fn(
            CommandContext,
            String, // Argument, `" "` when the client sent none
        ) -> Pin<Box<dyn Future<Output = Result<(), std::io::Error>> + Send>>
        + Send
        + Sync,
>;

/// Builds the routing table. Recognized verbs missing from the table
/// (AUTH, ABOR, MDTM, PASV, QUIT, SITE, SIZE) get a 502 from the dispatcher.
pub fn initialize_command_handlers() -> HashMap<FtpCommand, Arc<CommandHandler>> {
    let mut handlers: HashMap<FtpCommand, Arc<CommandHandler>> = HashMap::new();

    handlers.insert(
        FtpCommand::USER,
        Arc::new(Box::new(|ctx, arg| {
            Box::pin(crate::core_ftpcommand::user::handle_user_command(ctx, arg))
        })),
    );

    handlers.insert(
        FtpCommand::PASS,
        Arc::new(Box::new(|ctx, arg| {
            Box::pin(crate::core_ftpcommand::pass::handle_pass_command(ctx, arg))
        })),
    );

    handlers.insert(
        FtpCommand::SYST,
        Arc::new(Box::new(|ctx, arg| {
            Box::pin(crate::core_ftpcommand::syst::handle_syst_command(ctx, arg))
        })),
    );

    handlers.insert(
        FtpCommand::TYPE,
        Arc::new(Box::new(|ctx, arg| {
            Box::pin(crate::core_ftpcommand::type_::handle_type_command(ctx, arg))
        })),
    );

    handlers.insert(
        FtpCommand::PWD,
        Arc::new(Box::new(|ctx, arg| {
            Box::pin(crate::core_ftpcommand::pwd::handle_pwd_command(ctx, arg))
        })),
    );

    handlers.insert(
        FtpCommand::CWD,
        Arc::new(Box::new(|ctx, arg| {
            Box::pin(crate::core_ftpcommand::cwd::handle_cwd_command(ctx, arg))
        })),
    );

    handlers.insert(
        FtpCommand::CDUP,
        Arc::new(Box::new(|ctx, arg| {
            Box::pin(crate::core_ftpcommand::cdup::handle_cdup_command(ctx, arg))
        })),
    );

    handlers.insert(
        FtpCommand::LIST,
        Arc::new(Box::new(|ctx, arg| {
            Box::pin(crate::core_ftpcommand::list::handle_list_command(ctx, arg))
        })),
    );

    handlers.insert(
        FtpCommand::NLST,
        Arc::new(Box::new(|ctx, arg| {
            Box::pin(crate::core_ftpcommand::list::handle_nlst_command(ctx, arg))
        })),
    );

    handlers.insert(
        FtpCommand::MKD,
        Arc::new(Box::new(|ctx, arg| {
            Box::pin(crate::core_ftpcommand::mkd::handle_mkd_command(ctx, arg))
        })),
    );

    handlers.insert(
        FtpCommand::RMD,
        Arc::new(Box::new(|ctx, arg| {
            Box::pin(crate::core_ftpcommand::rmd::handle_rmd_command(ctx, arg))
        })),
    );

    handlers.insert(
        FtpCommand::DELE,
        Arc::new(Box::new(|ctx, arg| {
            Box::pin(crate::core_ftpcommand::dele::handle_dele_command(ctx, arg))
        })),
    );

    handlers.insert(
        FtpCommand::RNFR,
        Arc::new(Box::new(|ctx, arg| {
            Box::pin(crate::core_ftpcommand::rnfr::handle_rnfr_command(ctx, arg))
        })),
    );

    handlers.insert(
        FtpCommand::RNTO,
        Arc::new(Box::new(|ctx, arg| {
            Box::pin(crate::core_ftpcommand::rnto::handle_rnto_command(ctx, arg))
        })),
    );

    handlers.insert(
        FtpCommand::RETR,
        Arc::new(Box::new(|ctx, arg| {
            Box::pin(crate::core_ftpcommand::retr::handle_retr_command(ctx, arg))
        })),
    );

    handlers.insert(
        FtpCommand::STOR,
        Arc::new(Box::new(|ctx, arg| {
            Box::pin(crate::core_ftpcommand::stor::handle_stor_command(ctx, arg))
        })),
    );

    handlers.insert(
        FtpCommand::PORT,
        Arc::new(Box::new(|ctx, arg| {
            Box::pin(port::handle_port_command(ctx, arg))
        })),
    );

    handlers.insert(
        FtpCommand::EPRT,
        Arc::new(Box::new(|ctx, arg| {
            Box::pin(port::handle_eprt_command(ctx, arg))
        })),
    );

    handlers
}
