//! Mapping between the client-visible path space and host volume paths.
//!
//! The virtual root `/` holds one directory per volume letter (`/C/`, `/E/`, ...).
//! Everything below a letter maps 1:1 onto that volume's directory tree.

use std::fmt;
use thiserror::Error;

pub const HOST_SEPARATOR: char = '\\';

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PathError {
    #[error("Path does not name a volume: {0:?}")]
    NoVolume(String),
}

impl PathError {
    pub fn to_ftp_response(&self) -> &'static str {
        crate::constants::REPLY_ACTION_NOT_TAKEN
    }
}

/// A path on a host volume, displayed as `C:\dir\file`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPath {
    volume: char,
    rest: String,
}

impl HostPath {
    pub fn volume(&self) -> char {
        self.volume
    }

    /// Path segments below the volume root, empty segments skipped.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.rest
            .split(HOST_SEPARATOR)
            .filter(|segment| !segment.is_empty())
    }
}

impl fmt::Display for HostPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.volume, self.rest)
    }
}

fn collapse_double_root(path: &str) -> &str {
    if path.starts_with("//") {
        &path[1..]
    } else {
        path
    }
}

pub fn is_virtual_root(path: &str) -> bool {
    collapse_double_root(path) == "/"
}

/// Applies a CWD argument to the current working directory.
///
/// `..` drops the last segment, an absolute argument replaces the directory and
/// anything else is appended. The result always starts and ends with `/`.
pub fn resolve_working_directory(current: &str, arg: &str) -> String {
    if arg.starts_with("..") {
        let trimmed = current.strip_suffix('/').unwrap_or(current);
        match trimmed.rfind('/') {
            Some(idx) => trimmed[..=idx].to_string(),
            None => String::from("/"),
        }
    } else if arg.starts_with('/') {
        with_trailing_separator(arg.to_string())
    } else {
        with_trailing_separator(format!("{}{}", current, arg))
    }
}

fn with_trailing_separator(mut path: String) -> String {
    if !path.ends_with('/') {
        path.push('/');
    }
    path
}

/// Resolves a command argument: absolute arguments are taken as-is, anything
/// else is relative to the working directory.
pub fn resolve_argument(working_directory: &str, arg: &str) -> String {
    if arg.starts_with('/') {
        arg.to_string()
    } else {
        format!("{}{}", working_directory, arg)
    }
}

/// Translates a virtual absolute path such as `/C/foo/bar` into `C:\foo\bar`.
pub fn to_host_path(virtual_path: &str) -> Result<HostPath, PathError> {
    let path = collapse_double_root(virtual_path);
    let mut chars = path.chars();
    let volume = match (chars.next(), chars.next()) {
        (Some(_), Some(volume)) => volume,
        _ => return Err(PathError::NoVolume(virtual_path.to_string())),
    };
    let rest = chars.as_str().replace('/', &HOST_SEPARATOR.to_string());
    Ok(HostPath { volume, rest })
}
