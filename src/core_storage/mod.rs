//! Filesystem capability used by the protocol engine.

pub mod host;
#[cfg(test)]
pub mod memory;

use crate::core_path::HostPath;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use tokio::io::{AsyncRead, AsyncWrite};

pub type FileReader = Box<dyn AsyncRead + Unpin + Send>;
pub type FileWriter = Box<dyn AsyncWrite + Unpin + Send>;

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
    pub size: u64,
    pub modified: NaiveDateTime,
}

#[async_trait]
pub trait Storage: Send + Sync {
    /// Whether the volume identified by `volume` is mounted.
    async fn volume_exists(&self, volume: char) -> bool;

    async fn is_directory(&self, path: &HostPath) -> bool;

    async fn list_directory(&self, path: &HostPath) -> std::io::Result<Vec<DirEntry>>;

    async fn open_for_read(&self, path: &HostPath) -> std::io::Result<FileReader>;

    /// Creates the file, truncating existing content.
    async fn open_for_write(&self, path: &HostPath) -> std::io::Result<FileWriter>;

    async fn rename(&self, from: &HostPath, to: &HostPath) -> std::io::Result<()>;

    async fn delete(&self, path: &HostPath) -> std::io::Result<()>;

    async fn mkdir(&self, path: &HostPath) -> std::io::Result<()>;

    async fn rmdir(&self, path: &HostPath) -> std::io::Result<()>;
}
