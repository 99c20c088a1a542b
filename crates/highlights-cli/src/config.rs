//! Spreadsheet configuration loaded from `highlights.toml`.
//!
//! The file lives in the platform-specific configuration folder:
//! - macOS: ~/Library/Application Support/com.book-highlights.Book-Highlights/
//! - Windows: %APPDATA%/book-highlights/config/
//! - Linux: ~/.config/book-highlights/

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use highlights_fetch::{ClientOptions, DEFAULT_BASE_URL};
use highlights_model::{SheetRole, SheetSpec};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "book-highlights";
const APP_NAME: &str = "Book Highlights";
const CONFIG_FILENAME: &str = "highlights.toml";

/// Spreadsheet read when nothing else is configured.
pub const DEFAULT_SPREADSHEET_ID: &str = "1Hwu1Dk8RBD5ospxLfKt_L4HO0NO_KRL-S3znt28E814";

/// Errors reading an explicitly requested configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// One `[[sheets]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetConfig {
    pub id: String,
    pub name: String,
    /// Inferred from `name` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<SheetRole>,
}

impl SheetConfig {
    fn to_spec(&self) -> SheetSpec {
        let spec = SheetSpec::new(self.id.clone(), self.name.clone());
        match self.role {
            Some(role) => spec.with_role(role),
            None => spec,
        }
    }
}

/// Which spreadsheet to read and which of its sheets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub spreadsheet_id: String,
    pub base_url: String,
    /// Per-request timeout in seconds. Absent means no timeout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    pub sheets: Vec<SheetConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spreadsheet_id: DEFAULT_SPREADSHEET_ID.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            sheets: vec![SheetConfig {
                id: "0".to_string(),
                name: "Book Highlights".to_string(),
                role: None,
            }],
        }
    }
}

impl Config {
    /// Sheet specs in configured order.
    #[must_use]
    pub fn specs(&self) -> Vec<SheetSpec> {
        self.sheets.iter().map(SheetConfig::to_spec).collect()
    }

    #[must_use]
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            base_url: self.base_url.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Default location of the configuration file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Loads configuration.
///
/// An explicit path must exist and parse. Without one, the default
/// location is tried and any problem there falls back to defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config path, using defaults");
        return Ok(Config::default());
    };

    if !path.exists() {
        tracing::debug!("No config file found at {:?}, using defaults", path);
        return Ok(Config::default());
    }

    match read_config(&path) {
        Ok(config) => Ok(config),
        Err(e) => {
            tracing::warn!("{e}, using defaults");
            Ok(Config::default())
        }
    }
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Loaded config from {:?}", path);
    Ok(config)
}
