//! Application configuration management.
//!
//! This module handles loading and saving the client configuration, which
//! today is just the backend origin and an optional override for where the
//! credential file lives.
//!
//! Configuration is stored at `~/.config/shopwire/config.json`; the
//! `SHOPWIRE_API_URL` environment variable wins over the file.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config/storage directory paths
const APP_NAME: &str = "shopwire";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Backend origin used when neither the environment nor the config file
/// names one.
pub const DEFAULT_API_BASE_URL: &str = "https://api.shopwire.store";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_base_url: Option<String>,
    pub storage_dir: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// The backend origin every request is sent to, without a trailing
    /// slash. Precedence: environment, then config file, then default.
    pub fn base_url(&self) -> String {
        let url = std::env::var("SHOPWIRE_API_URL")
            .ok()
            .filter(|value| !value.is_empty())
            .or_else(|| self.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        url.trim_end_matches('/').to_string()
    }

    /// Directory holding the credential file.
    pub fn storage_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.storage_dir {
            return Ok(dir.clone());
        }
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find data directory"))?;
        Ok(data_dir.join(APP_NAME))
    }
}
