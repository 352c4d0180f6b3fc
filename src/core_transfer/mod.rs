pub mod error;
pub mod listing;
pub mod stream;

pub use error::TransferError;
