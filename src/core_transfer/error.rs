// Errors raised while moving bytes over the data channel
use crate::constants::{REPLY_LOCAL_ERROR, REPLY_TRANSFER_ABORTED};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransferError {
    #[error("Failed to read file: {0}")]
    FileRead(std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(std::io::Error),

    #[error("Short write: {written} of {expected} bytes")]
    ShortWrite { expected: usize, written: usize },

    #[error("Data connection failed: {0}")]
    DataChannel(std::io::Error),
}

impl TransferError {
    pub fn to_ftp_response(&self) -> &'static str {
        match self {
            TransferError::DataChannel(_) => REPLY_TRANSFER_ABORTED,
            _ => REPLY_LOCAL_ERROR,
        }
    }
}
