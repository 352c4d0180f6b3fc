pub mod connector;
pub mod network;
pub mod port;
