use crate::constants::{
    DRIVE_LETTERS, LISTING_GROUP, LISTING_OWNER, LISTING_PERMISSIONS, VOLUME_TIMESTAMP,
};
use crate::core_path::{is_virtual_root, to_host_path, PathError};
use crate::core_storage::{DirEntry, Storage};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListingError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error("Failed to read directory: {0}")]
    Io(#[from] std::io::Error),
}

fn format_entry(entry: &DirEntry) -> String {
    let file_type = if entry.is_dir { "d" } else { "-" };
    format!(
        "{}{} 1 {} {} {} {} {}\r\n",
        file_type,
        LISTING_PERMISSIONS,
        LISTING_OWNER,
        LISTING_GROUP,
        entry.size,
        entry.modified.format("%Y-%m-%d %H:%M"),
        entry.name
    )
}

fn format_volume(volume: char) -> String {
    format!(
        "d{} 1 {} {} 0 {} {}\r\n",
        LISTING_PERMISSIONS, LISTING_OWNER, LISTING_GROUP, VOLUME_TIMESTAMP, volume
    )
}

/// Builds the listing lines for `virtual_path`.
///
/// The virtual root lists the mounted volumes; anything else lists one level
/// of the host directory, in whatever order the storage yields it.
pub async fn list(
    storage: &dyn Storage,
    virtual_path: &str,
    names_only: bool,
) -> Result<Vec<String>, ListingError> {
    let mut lines = Vec::new();

    if is_virtual_root(virtual_path) {
        for volume in DRIVE_LETTERS {
            if storage.volume_exists(volume).await {
                lines.push(if names_only {
                    format!("{}\r\n", volume)
                } else {
                    format_volume(volume)
                });
            }
        }
        return Ok(lines);
    }

    let host_path = to_host_path(virtual_path)?;
    for entry in storage.list_directory(&host_path).await? {
        lines.push(if names_only {
            format!("{}\r\n", entry.name)
        } else {
            format_entry(&entry)
        });
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_storage::memory::MemoryStorage;
    use chrono::NaiveDate;

    fn host(path: &str) -> crate::core_path::HostPath {
        to_host_path(path).unwrap()
    }

    #[tokio::test]
    async fn test_root_lists_present_volumes_in_order() {
        let storage = MemoryStorage::with_volumes(&['Z', 'C', 'E']);
        assert_eq!(
            list(&storage, "/", true).await.unwrap(),
            vec!["C\r\n", "E\r\n", "Z\r\n"]
        );
        assert_eq!(
            list(&storage, "//", false).await.unwrap()[0],
            "drwxr-xr-x 1 XBOX XBOX 0 2020-03-02 10:41 C\r\n"
        );
    }

    #[tokio::test]
    async fn test_root_with_no_volumes() {
        let storage = MemoryStorage::default();
        assert!(list(&storage, "/", false).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_names_only() {
        let storage = MemoryStorage::with_volumes(&['C']);
        storage.add_dir(&host("/C/dir"));
        storage.add_file(&host("/C/dir/a.txt"), b"abc");

        let lines = list(&storage, "/C/dir/", true).await.unwrap();
        assert_eq!(lines, vec!["a.txt\r\n"]);
        assert!(list(&storage, "/C/", true).await.unwrap().contains(&"dir\r\n".to_string()));
    }

    #[test]
    fn test_format_entry() {
        let modified = NaiveDate::from_ymd_opt(2021, 3, 4)
            .unwrap()
            .and_hms_opt(5, 6, 0)
            .unwrap();
        let file = DirEntry {
            name: "game.xbe".to_string(),
            is_dir: false,
            size: 4096,
            modified,
        };
        assert_eq!(
            format_entry(&file),
            "-rwxr-xr-x 1 XBOX XBOX 4096 2021-03-04 05:06 game.xbe\r\n"
        );

        let dir = DirEntry {
            name: "saves".to_string(),
            is_dir: true,
            size: 0,
            modified,
        };
        assert!(format_entry(&dir).starts_with("drwxr-xr-x 1 XBOX XBOX 0 "));
    }

    #[tokio::test]
    async fn test_missing_directory_is_an_error() {
        let storage = MemoryStorage::with_volumes(&['C']);
        assert!(matches!(
            list(&storage, "/C/nope/", false).await,
            Err(ListingError::Io(_))
        ));
    }
}
