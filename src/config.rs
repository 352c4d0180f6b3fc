use crate::constants::{DRIVE_LETTERS, USERNAME_REGEX};
use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Unknown volume letter: {0}")]
    UnknownVolume(String),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub enabled: bool,
    pub listen_port: u16,
    pub username: String,
    pub password: String,
    /// Seconds a control connection may stay silent, `None` to wait forever.
    pub idle_timeout: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    /// Volume letter to host directory.
    #[serde(default)]
    pub volumes: BTreeMap<String, PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            listen_port: 21,
            username: String::from("xbox"),
            password: String::from("xbox"),
            idle_timeout: None,
        }
    }
}

impl Config {
    pub fn load_from_file(path: &str) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path))?;
        Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse configuration file: {}", path))
    }

    pub fn from_toml(config_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let username_re = Regex::new(USERNAME_REGEX)?;
        if !username_re.is_match(&self.server.username) {
            return Err(ConfigError::InvalidUsername(self.server.username.clone()));
        }

        for key in self.volumes.keys() {
            if volume_letter(key).is_none() {
                return Err(ConfigError::UnknownVolume(key.clone()));
            }
        }
        Ok(())
    }

    /// Configured volumes keyed by their letter.
    pub fn volume_roots(&self) -> BTreeMap<char, PathBuf> {
        self.volumes
            .iter()
            .filter_map(|(key, root)| volume_letter(key).map(|letter| (letter, root.clone())))
            .collect()
    }
}

fn volume_letter(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            let letter = c.to_ascii_uppercase();
            DRIVE_LETTERS.contains(&letter).then_some(letter)
        }
        _ => None,
    }
}
