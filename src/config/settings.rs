//! Application settings and paths.
//!
//! Paths follow the XDG Base Directory Specification. Settings live in the
//! same key-value backend as the scan history, under their own key, so a
//! single data directory holds the whole application state.

use crate::error::{ConfigError, ConfigResult};
use crate::store::{KeyValueBackend, APP_SETTINGS_KEY};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Global paths singleton.
static PATHS: OnceLock<Paths> = OnceLock::new();

/// Application directory paths following XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/cocoknock)
    pub config_dir: PathBuf,
    /// Data directory (~/.local/share/cocoknock)
    pub data_dir: PathBuf,
    /// Cache directory (~/.cache/cocoknock)
    pub cache_dir: PathBuf,
}

impl Paths {
    /// Get the global paths instance.
    pub fn get() -> &'static Paths {
        PATHS.get_or_init(|| Self::new().expect("Failed to initialize paths"))
    }

    /// Initialize paths using XDG directories.
    fn new() -> ConfigResult<Self> {
        let project = ProjectDirs::from("com", "cocoknock", "cocoknock")
            .ok_or(ConfigError::DirectoryNotFound)?;

        let paths = Self {
            config_dir: project.config_dir().to_path_buf(),
            data_dir: project.data_dir().to_path_buf(),
            cache_dir: project.cache_dir().to_path_buf(),
        };

        // Ensure directories exist
        fs::create_dir_all(&paths.config_dir)?;
        fs::create_dir_all(&paths.data_dir)?;
        fs::create_dir_all(&paths.cache_dir)?;

        Ok(paths)
    }

    /// Get the directory backing the key-value store.
    pub fn store_dir(&self) -> PathBuf {
        self.data_dir.join("store")
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Base URL of the robot's HTTP service.
    pub robot_url: String,
    /// Default export format (json or csv).
    pub default_output_format: String,
    /// Default date range for history listings.
    pub default_date_range: String,
    /// Automatically save completed analyses.
    pub auto_save_scans: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            robot_url: "http://192.168.1.118:5000".to_string(),
            default_output_format: "json".to_string(),
            default_date_range: "all".to_string(),
            auto_save_scans: true,
        }
    }
}

impl AppSettings {
    /// Load settings from the backend, falling back to defaults when the
    /// key is absent.
    pub async fn load(backend: &dyn KeyValueBackend) -> ConfigResult<Self> {
        match backend.get(APP_SETTINGS_KEY).await? {
            None => Ok(Self::default()),
            Some(blob) => {
                serde_json::from_str(&blob).map_err(|e| ConfigError::InvalidFormat(e.to_string()))
            }
        }
    }

    /// Save settings to the backend.
    pub async fn save(&self, backend: &dyn KeyValueBackend) -> ConfigResult<()> {
        let blob = serde_json::to_string_pretty(self)?;
        backend.set(APP_SETTINGS_KEY, &blob).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryBackend;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.default_output_format, "json");
        assert!(settings.auto_save_scans);
    }

    #[tokio::test]
    async fn test_settings_roundtrip_through_backend() {
        let backend = MemoryBackend::new();
        let mut settings = AppSettings::default();
        settings.robot_url = "http://10.0.0.5:5000".to_string();

        settings.save(&backend).await.unwrap();
        let loaded = AppSettings::load(&backend).await.unwrap();
        assert_eq!(loaded, settings);
    }

    #[tokio::test]
    async fn test_settings_absent_key_yields_defaults() {
        let backend = MemoryBackend::new();
        let loaded = AppSettings::load(&backend).await.unwrap();
        assert_eq!(loaded, AppSettings::default());
    }

    #[tokio::test]
    async fn test_settings_invalid_blob_is_an_error() {
        let backend = MemoryBackend::new();
        backend.seed(APP_SETTINGS_KEY, "not json");
        assert!(AppSettings::load(&backend).await.is_err());
    }
}
