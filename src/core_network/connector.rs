use crate::core_network::port::DataAddress;
use async_trait::async_trait;
use log::debug;
use std::net::SocketAddr;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;

/// Byte stream usable as a data channel.
pub trait DataIo: AsyncRead + AsyncWrite + Unpin + Send {}

impl<T: AsyncRead + AsyncWrite + Unpin + Send> DataIo for T {}

pub type DataStream = Box<dyn DataIo>;

/// Opens active-mode data connections towards the client.
#[async_trait]
pub trait DataConnector: Send + Sync {
    async fn open_data_connection(&self, address: &DataAddress) -> std::io::Result<DataStream>;
}

/// Connects to the client over TCP.
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpConnector;

#[async_trait]
impl DataConnector for TcpConnector {
    async fn open_data_connection(&self, address: &DataAddress) -> std::io::Result<DataStream> {
        let addr = SocketAddr::new(address.ip, address.port);
        let data_stream = TcpStream::connect(addr).await?;
        debug!("Data connection established with {}", addr);
        Ok(Box::new(data_stream))
    }
}
