#[derive(Eq, Hash, PartialEq, Debug, Clone, Copy)]
pub enum FtpCommand {
    USER,
    PASS,
    AUTH,
    ABOR,
    CWD,
    CDUP,
    DELE,
    LIST,
    MDTM,
    MKD,
    NLST,
    PASV,
    PORT,
    EPRT,
    PWD,
    QUIT,
    RETR,
    RMD,
    RNFR,
    RNTO,
    SITE,
    SIZE,
    STOR,
    SYST,
    TYPE,
}

impl FtpCommand {
    /// Matches a verb exactly; `user` is not `USER`.
    pub fn from_str(cmd: &str) -> Option<FtpCommand> {
        match cmd {
            "USER" => Some(FtpCommand::USER),
            "PASS" => Some(FtpCommand::PASS),
            "AUTH" => Some(FtpCommand::AUTH),
            "ABOR" => Some(FtpCommand::ABOR),
            "CWD" => Some(FtpCommand::CWD),
            "CDUP" => Some(FtpCommand::CDUP),
            "DELE" => Some(FtpCommand::DELE),
            "LIST" => Some(FtpCommand::LIST),
            "MDTM" => Some(FtpCommand::MDTM),
            "MKD" => Some(FtpCommand::MKD),
            "NLST" => Some(FtpCommand::NLST),
            "PASV" => Some(FtpCommand::PASV),
            "PORT" => Some(FtpCommand::PORT),
            "EPRT" => Some(FtpCommand::EPRT),
            "PWD" => Some(FtpCommand::PWD),
            "QUIT" => Some(FtpCommand::QUIT),
            "RETR" => Some(FtpCommand::RETR),
            "RMD" => Some(FtpCommand::RMD),
            "RNFR" => Some(FtpCommand::RNFR),
            "RNTO" => Some(FtpCommand::RNTO),
            "SITE" => Some(FtpCommand::SITE),
            "SIZE" => Some(FtpCommand::SIZE),
            "STOR" => Some(FtpCommand::STOR),
            "SYST" => Some(FtpCommand::SYST),
            "TYPE" => Some(FtpCommand::TYPE),
            _ => None,
        }
    }

    /// Commands accepted before login.
    pub fn is_pre_auth(&self) -> bool {
        matches!(self, FtpCommand::USER | FtpCommand::PASS | FtpCommand::AUTH)
    }
}
