// ==========================================
// Poultry Farm Records - Configuration
// ==========================================
// Responsibility: application configuration (database location)
// Storage: JSON file in the platform data directory
// Override: POULTRY_RECORDS_DB environment variable
// ==========================================

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "poultry-records";
const CONFIG_FILE: &str = "config.json";
const DB_FILE: &str = "farm.db";
const DB_ENV_VAR: &str = "POULTRY_RECORDS_DB";

// ==========================================
// AppConfig
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to the SQLite database file.
    pub db_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

impl AppConfig {
    /// Load the config file, falling back to defaults when it does not
    /// exist or cannot be parsed. The environment variable wins over
    /// both.
    pub fn load() -> Self {
        let mut config = Self::read_file(&default_config_path()).unwrap_or_default();
        if let Ok(db_path) = std::env::var(DB_ENV_VAR) {
            if !db_path.trim().is_empty() {
                config.db_path = db_path;
            }
        }
        config
    }

    /// Persist the config to the platform data directory.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = default_config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    fn read_file(path: &Path) -> Option<Self> {
        let raw = fs::read_to_string(path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!("ignoring malformed config at {}: {err}", path.display());
                None
            }
        }
    }
}

/// Default database path: <data_dir>/poultry-records/farm.db, with the
/// current directory as a last resort.
pub fn default_db_path() -> String {
    data_dir().join(DB_FILE).to_string_lossy().into_owned()
}

fn default_config_path() -> PathBuf {
    data_dir().join(CONFIG_FILE)
}

fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}
