use crate::core_path::HostPath;
use crate::core_storage::{DirEntry, FileReader, FileWriter, Storage};
use async_trait::async_trait;
use chrono::{DateTime, Local};
use log::{debug, warn};
use std::collections::BTreeMap;
use std::io::{Error, ErrorKind};
use std::path::PathBuf;
use tokio::fs;

/// Storage backed by host directories, one per volume letter.
#[derive(Debug, Clone)]
pub struct HostStorage {
    volumes: BTreeMap<char, PathBuf>,
}

impl HostStorage {
    pub fn new(volumes: BTreeMap<char, PathBuf>) -> Self {
        Self { volumes }
    }

    /// Maps a host path onto the real filesystem, refusing to leave the volume root.
    fn resolve(&self, path: &HostPath) -> std::io::Result<PathBuf> {
        let root = self.volumes.get(&path.volume()).ok_or_else(|| {
            Error::new(
                ErrorKind::NotFound,
                format!("Volume {} is not mounted", path.volume()),
            )
        })?;

        let mut resolved = root.clone();
        for component in path.components() {
            match component {
                "." => continue,
                ".." => {
                    warn!("Path escapes its volume: {}", path);
                    return Err(Error::new(
                        ErrorKind::PermissionDenied,
                        format!("Path escapes its volume: {}", path),
                    ));
                }
                _ => resolved.push(component),
            }
        }
        debug!("Resolved {} to {:?}", path, resolved);
        Ok(resolved)
    }
}

#[async_trait]
impl Storage for HostStorage {
    async fn volume_exists(&self, volume: char) -> bool {
        match self.volumes.get(&volume) {
            Some(root) => fs::metadata(root)
                .await
                .map(|metadata| metadata.is_dir())
                .unwrap_or(false),
            None => false,
        }
    }

    async fn is_directory(&self, path: &HostPath) -> bool {
        match self.resolve(path) {
            Ok(resolved) => fs::metadata(resolved)
                .await
                .map(|metadata| metadata.is_dir())
                .unwrap_or(false),
            Err(_) => false,
        }
    }

    async fn list_directory(&self, path: &HostPath) -> std::io::Result<Vec<DirEntry>> {
        let dir_path = self.resolve(path)?;
        let mut entries = fs::read_dir(&dir_path).await?;
        let mut listing = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let metadata = match entry.metadata().await {
                Ok(metadata) => metadata,
                Err(e) => {
                    warn!(
                        "Failed to get metadata for entry: {:?}, error: {:?}",
                        entry.path(),
                        e
                    );
                    continue;
                }
            };
            let modified = metadata
                .modified()
                .map(|time| DateTime::<Local>::from(time).naive_local())
                .unwrap_or_default();

            listing.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: metadata.is_dir(),
                size: metadata.len(),
                modified,
            });
        }
        Ok(listing)
    }

    async fn open_for_read(&self, path: &HostPath) -> std::io::Result<FileReader> {
        let file = fs::File::open(self.resolve(path)?).await?;
        Ok(Box::new(file))
    }

    async fn open_for_write(&self, path: &HostPath) -> std::io::Result<FileWriter> {
        let file = fs::File::create(self.resolve(path)?).await?;
        Ok(Box::new(file))
    }

    async fn rename(&self, from: &HostPath, to: &HostPath) -> std::io::Result<()> {
        fs::rename(self.resolve(from)?, self.resolve(to)?).await
    }

    async fn delete(&self, path: &HostPath) -> std::io::Result<()> {
        fs::remove_file(self.resolve(path)?).await
    }

    async fn mkdir(&self, path: &HostPath) -> std::io::Result<()> {
        fs::create_dir(self.resolve(path)?).await
    }

    async fn rmdir(&self, path: &HostPath) -> std::io::Result<()> {
        fs::remove_dir(self.resolve(path)?).await
    }
}
