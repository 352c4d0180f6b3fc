use crate::constants::{
    REPLY_PORT_COMMAND_OK, REPLY_SOCKET_CREATION_FAILED, REPLY_SYNTAX_ERROR,
    REPLY_UNKNOWN_ADDRESS_FAMILY,
};
use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::utils::send_response;
use log::{error, info, warn};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use thiserror::Error;

/// Client endpoint advertised by PORT or EPRT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataAddress {
    pub ip: IpAddr,
    pub port: u16,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AddressError {
    #[error("Expected 6 comma-separated fields, got {0}")]
    FieldCount(usize),

    #[error("Invalid octet: {0:?}")]
    InvalidOctet(String),

    #[error("Unknown address family: {0:?}")]
    UnknownFamily(String),

    #[error("Malformed extended address: {0:?}")]
    Malformed(String),

    #[error("Invalid address: {0:?}")]
    InvalidAddress(String),

    #[error("Invalid port: {0:?}")]
    InvalidPort(String),
}

impl AddressError {
    pub fn to_ftp_response(&self) -> &'static str {
        match self {
            AddressError::UnknownFamily(_) => REPLY_UNKNOWN_ADDRESS_FAMILY,
            _ => REPLY_SYNTAX_ERROR,
        }
    }
}

/// Parses `h1,h2,h3,h4,p1,p2` into an IPv4 endpoint with port `p1 * 256 + p2`.
pub fn parse_port_argument(arg: &str) -> Result<DataAddress, AddressError> {
    let parts: Vec<&str> = arg.trim().split(',').collect();
    if parts.len() != 6 {
        return Err(AddressError::FieldCount(parts.len()));
    }

    let mut octets = [0u8; 6];
    for (octet, part) in octets.iter_mut().zip(&parts) {
        *octet = part
            .trim()
            .parse()
            .map_err(|_| AddressError::InvalidOctet(part.to_string()))?;
    }

    let ip = Ipv4Addr::new(octets[0], octets[1], octets[2], octets[3]);
    let port = (octets[4] as u16) << 8 | octets[5] as u16;
    Ok(DataAddress {
        ip: IpAddr::V4(ip),
        port,
    })
}

/// Parses the RFC 2428 form `<d><family><d><address><d><port><d>`, where the
/// delimiter is whatever character the argument starts with.
pub fn parse_eprt_argument(arg: &str) -> Result<DataAddress, AddressError> {
    let arg = arg.trim();
    let delimiter = arg
        .chars()
        .next()
        .ok_or_else(|| AddressError::Malformed(arg.to_string()))?;
    let fields: Vec<&str> = arg[delimiter.len_utf8()..].split(delimiter).collect();

    let family = fields[0];
    if family != "1" && family != "2" {
        return Err(AddressError::UnknownFamily(family.to_string()));
    }
    if fields.len() < 3 {
        return Err(AddressError::Malformed(arg.to_string()));
    }

    let address = fields[1];
    let ip = if family == "1" {
        address.parse::<Ipv4Addr>().map(IpAddr::V4)
    } else {
        address.parse::<Ipv6Addr>().map(IpAddr::V6)
    }
    .map_err(|_| AddressError::InvalidAddress(address.to_string()))?;

    let port = fields[2]
        .parse::<u16>()
        .map_err(|_| AddressError::InvalidPort(fields[2].to_string()))?;

    Ok(DataAddress { ip, port })
}

/// Opens the data connection and parks it in the session until the next
/// transfer command.
pub async fn open_active(ctx: &CommandContext, address: DataAddress) -> Result<(), std::io::Error> {
    match ctx.connector.open_data_connection(&address).await {
        Ok(data_stream) => {
            info!("Connection established with {}:{}", address.ip, address.port);
            {
                let mut session = ctx.session.lock().await;
                session.data_stream = Some(data_stream);
            }
            send_response(&ctx.writer, REPLY_PORT_COMMAND_OK).await
        }
        Err(e) => {
            error!(
                "Failed to connect to client {}:{}: {}",
                address.ip, address.port, e
            );
            send_response(&ctx.writer, REPLY_SOCKET_CREATION_FAILED).await
        }
    }
}

/// Handles the PORT (Active Mode) FTP command.
pub async fn handle_port_command(ctx: CommandContext, arg: String) -> Result<(), std::io::Error> {
    match parse_port_argument(&arg) {
        Ok(address) => {
            info!("Received PORT command with IP: {} and port: {}", address.ip, address.port);
            open_active(&ctx, address).await
        }
        Err(e) => {
            warn!("Rejected PORT argument {:?}: {}", arg, e);
            send_response(&ctx.writer, e.to_ftp_response()).await
        }
    }
}

/// Handles the EPRT (Extended Port) FTP command.
pub async fn handle_eprt_command(ctx: CommandContext, arg: String) -> Result<(), std::io::Error> {
    match parse_eprt_argument(&arg) {
        Ok(address) => {
            info!("Received EPRT command with IP: {} and port: {}", address.ip, address.port);
            open_active(&ctx, address).await
        }
        Err(e) => {
            warn!("Rejected EPRT argument {:?}: {}", arg, e);
            send_response(&ctx.writer, e.to_ftp_response()).await
        }
    }
}
