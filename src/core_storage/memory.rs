use crate::core_path::HostPath;
use crate::core_storage::{DirEntry, FileReader, FileWriter, Storage};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::collections::{BTreeMap, BTreeSet};
use std::io::{Cursor, Error, ErrorKind};
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tokio::io::AsyncWrite;

#[derive(Debug, Default)]
struct Tree {
    volumes: BTreeSet<char>,
    dirs: BTreeSet<String>,
    files: BTreeMap<String, Vec<u8>>,
}

/// In-memory volumes for engine tests.
///
/// Keys are normalized host paths (`C:\dir\file`). A write limit makes every
/// writer accept at most that many bytes per file, so short writes can be
/// exercised.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    tree: Arc<Mutex<Tree>>,
    write_limit: Option<usize>,
}

fn key(path: &HostPath) -> String {
    let mut key = format!("{}:", path.volume());
    for component in path.components() {
        key.push('\\');
        key.push_str(component);
    }
    if key.len() == 2 {
        key.push('\\');
    }
    key
}

fn parent_key(key: &str) -> String {
    match key.rfind('\\') {
        Some(2) => key[..3].to_string(),
        Some(idx) => key[..idx].to_string(),
        None => key.to_string(),
    }
}

fn not_found(key: &str) -> Error {
    Error::new(ErrorKind::NotFound, format!("{} not found", key))
}

impl MemoryStorage {
    pub fn with_volumes(volumes: &[char]) -> Self {
        let storage = Self::default();
        {
            let mut tree = storage.tree.lock().unwrap();
            for volume in volumes {
                tree.volumes.insert(*volume);
                tree.dirs.insert(format!("{}:\\", volume));
            }
        }
        storage
    }

    pub fn with_write_limit(mut self, limit: usize) -> Self {
        self.write_limit = Some(limit);
        self
    }

    pub fn add_dir(&self, path: &HostPath) {
        self.tree.lock().unwrap().dirs.insert(key(path));
    }

    pub fn add_file(&self, path: &HostPath, contents: &[u8]) {
        self.tree
            .lock()
            .unwrap()
            .files
            .insert(key(path), contents.to_vec());
    }

    pub fn file(&self, path: &HostPath) -> Option<Vec<u8>> {
        self.tree.lock().unwrap().files.get(&key(path)).cloned()
    }

    pub fn has_dir(&self, path: &HostPath) -> bool {
        self.tree.lock().unwrap().dirs.contains(&key(path))
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn volume_exists(&self, volume: char) -> bool {
        self.tree.lock().unwrap().volumes.contains(&volume)
    }

    async fn is_directory(&self, path: &HostPath) -> bool {
        self.tree.lock().unwrap().dirs.contains(&key(path))
    }

    async fn list_directory(&self, path: &HostPath) -> std::io::Result<Vec<DirEntry>> {
        let tree = self.tree.lock().unwrap();
        let dir = key(path);
        if !tree.dirs.contains(&dir) {
            return Err(not_found(&dir));
        }

        let name_of = |child: &str| child[child.rfind('\\').unwrap_or(0) + 1..].to_string();
        let mut entries = Vec::new();
        for child in tree.dirs.iter().filter(|d| **d != dir && parent_key(d) == dir) {
            entries.push(DirEntry {
                name: name_of(child),
                is_dir: true,
                size: 0,
                modified: NaiveDateTime::default(),
            });
        }
        for (child, contents) in tree.files.iter().filter(|(f, _)| parent_key(f) == dir) {
            entries.push(DirEntry {
                name: name_of(child),
                is_dir: false,
                size: contents.len() as u64,
                modified: NaiveDateTime::default(),
            });
        }
        Ok(entries)
    }

    async fn open_for_read(&self, path: &HostPath) -> std::io::Result<FileReader> {
        let file = key(path);
        let contents = self
            .tree
            .lock()
            .unwrap()
            .files
            .get(&file)
            .cloned()
            .ok_or_else(|| not_found(&file))?;
        Ok(Box::new(Cursor::new(contents)))
    }

    async fn open_for_write(&self, path: &HostPath) -> std::io::Result<FileWriter> {
        let file = key(path);
        let mut tree = self.tree.lock().unwrap();
        if !tree.dirs.contains(&parent_key(&file)) {
            return Err(not_found(&file));
        }
        tree.files.insert(file.clone(), Vec::new());
        Ok(Box::new(MemoryWriter {
            tree: Arc::clone(&self.tree),
            key: file,
            remaining: self.write_limit,
        }))
    }

    async fn rename(&self, from: &HostPath, to: &HostPath) -> std::io::Result<()> {
        let (from, to) = (key(from), key(to));
        let mut tree = self.tree.lock().unwrap();
        if let Some(contents) = tree.files.remove(&from) {
            tree.files.insert(to, contents);
            Ok(())
        } else if tree.dirs.remove(&from) {
            tree.dirs.insert(to);
            Ok(())
        } else {
            Err(not_found(&from))
        }
    }

    async fn delete(&self, path: &HostPath) -> std::io::Result<()> {
        let file = key(path);
        match self.tree.lock().unwrap().files.remove(&file) {
            Some(_) => Ok(()),
            None => Err(not_found(&file)),
        }
    }

    async fn mkdir(&self, path: &HostPath) -> std::io::Result<()> {
        let dir = key(path);
        let mut tree = self.tree.lock().unwrap();
        if tree.dirs.contains(&dir) || !tree.dirs.contains(&parent_key(&dir)) {
            return Err(Error::new(ErrorKind::AlreadyExists, dir));
        }
        tree.dirs.insert(dir);
        Ok(())
    }

    async fn rmdir(&self, path: &HostPath) -> std::io::Result<()> {
        let dir = key(path);
        let mut tree = self.tree.lock().unwrap();
        let occupied = tree.dirs.iter().any(|d| *d != dir && parent_key(d) == dir)
            || tree.files.keys().any(|f| parent_key(f) == dir);
        if occupied {
            return Err(Error::new(ErrorKind::Other, format!("{} is not empty", dir)));
        }
        if tree.dirs.remove(&dir) {
            Ok(())
        } else {
            Err(not_found(&dir))
        }
    }
}

struct MemoryWriter {
    tree: Arc<Mutex<Tree>>,
    key: String,
    remaining: Option<usize>,
}

impl AsyncWrite for MemoryWriter {
    fn poll_write(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<std::io::Result<usize>> {
        let accepted = match self.remaining {
            Some(remaining) => buf.len().min(remaining),
            None => buf.len(),
        };
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= accepted;
        }
        let mut tree = self.tree.lock().unwrap();
        tree.files
            .entry(self.key.clone())
            .or_default()
            .extend_from_slice(&buf[..accepted]);
        Poll::Ready(Ok(accepted))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<std::io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<std::io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_path::to_host_path;

    fn host(path: &str) -> HostPath {
        to_host_path(path).unwrap()
    }

    #[test]
    fn test_keys_are_normalized() {
        assert_eq!(key(&host("/C/")), "C:\\");
        assert_eq!(key(&host("/C")), "C:\\");
        assert_eq!(key(&host("/C/a//b/")), "C:\\a\\b");
        assert_eq!(parent_key("C:\\a\\b"), "C:\\a");
        assert_eq!(parent_key("C:\\a"), "C:\\");
    }

    #[tokio::test]
    async fn test_listing_is_single_level() {
        let storage = MemoryStorage::with_volumes(&['C']);
        storage.add_dir(&host("/C/games"));
        storage.add_file(&host("/C/games/save.bin"), b"1234");
        storage.add_file(&host("/C/readme.txt"), b"hi");

        let mut entries = storage.list_directory(&host("/C/")).await.unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["games", "readme.txt"]);
        assert!(entries[0].is_dir);
        assert_eq!(entries[1].size, 2);
    }
}
