use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration, read from `Rocket.toml` and `ROCKET_*`
/// environment variables through Rocket's figment. Everything defaults, so
/// the service runs with no config file at all.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageKind,
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// Process-memory state; resets on restart.
    Memory,
    /// Flat-file state under `data_dir`; survives restarts.
    #[default]
    File,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageKind::default(),
            data_dir: default_data_dir(),
        }
    }
}
