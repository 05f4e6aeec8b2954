//! Catalog configuration
//!
//! Loads the service configuration from YAML and applies environment
//! overrides. Every section is optional; an empty document yields the
//! defaults below.
//!
//! ```yaml
//! server:
//!   bind_addr: "0.0.0.0:8000"
//! browser:
//!   enabled: true
//!   fail_on_error: false
//! datasets:
//!   data_dir: "data"
//!   udemy:
//!     path: udemy_courses.csv
//!     key_column: course_id
//!     url_column: url
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::types::Platform;

/// Environment variable naming the YAML config file.
pub const CONFIG_PATH_ENV: &str = "COURSE_CATALOG_CONFIG";
pub const BIND_ADDR_ENV: &str = "COURSE_CATALOG_BIND_ADDR";
pub const DATA_DIR_ENV: &str = "COURSE_CATALOG_DATA_DIR";
pub const OPEN_BROWSER_ENV: &str = "COURSE_CATALOG_OPEN_BROWSER";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Root configuration structure for the catalog service
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub server: ServerConfig,
    pub browser: BrowserConfig,
    pub datasets: DatasetsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

/// Behaviour of the "open course page" side effect on single-record lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Launch the system browser at all
    pub enabled: bool,
    /// Fail the lookup with `SideEffectFailed` when the launch fails
    pub fail_on_error: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            fail_on_error: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatasetsConfig {
    /// Base directory for relative dataset paths
    pub data_dir: PathBuf,
    pub udemy: DatasetConfig,
    pub coursera_clean: DatasetConfig,
    pub coursera_original: DatasetConfig,
    pub edx: DatasetConfig,
}

impl Default for DatasetsConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            udemy: DatasetConfig::default(),
            coursera_clean: DatasetConfig::default(),
            coursera_original: DatasetConfig::default(),
            edx: DatasetConfig::default(),
        }
    }
}

/// Per-dataset overrides. Unset fields fall back to the platform defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub path: Option<PathBuf>,
    pub key_column: Option<String>,
    pub url_column: Option<String>,
}

/// Fully resolved location and key columns of one dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSource {
    pub path: PathBuf,
    pub key_column: String,
    pub url_column: String,
}

impl DatasetSource {
    /// Stock file name and columns of each platform's export.
    pub fn default_for(platform: Platform) -> Self {
        let (path, key_column, url_column) = match platform {
            Platform::Udemy => ("udemy_courses.csv", "course_id", "url"),
            Platform::CourseraClean => ("CourseraDataset-Clean.csv", "Course Title", "Course Url"),
            Platform::CourseraOriginal => ("coursea_data.csv", "course_id", "url"),
            Platform::Edx => ("EdX.csv", "course_title", "url"),
        };
        Self {
            path: PathBuf::from(path),
            key_column: key_column.to_string(),
            url_column: url_column.to_string(),
        }
    }
}

impl DatasetsConfig {
    fn entry(&self, platform: Platform) -> &DatasetConfig {
        match platform {
            Platform::Udemy => &self.udemy,
            Platform::CourseraClean => &self.coursera_clean,
            Platform::CourseraOriginal => &self.coursera_original,
            Platform::Edx => &self.edx,
        }
    }

    /// Resolve a platform's dataset, joining relative paths onto `data_dir`.
    pub fn source(&self, platform: Platform) -> DatasetSource {
        let defaults = DatasetSource::default_for(platform);
        let entry = self.entry(platform);
        let path = entry.path.clone().unwrap_or(defaults.path);
        DatasetSource {
            path: if path.is_absolute() {
                path
            } else {
                self.data_dir.join(path)
            },
            key_column: entry.key_column.clone().unwrap_or(defaults.key_column),
            url_column: entry.url_column.clone().unwrap_or(defaults.url_column),
        }
    }
}

impl CatalogConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// File named by `COURSE_CATALOG_CONFIG` (defaults when unset), then env overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => {
                tracing::info!(path = %path, "Loading configuration file");
                Self::from_file(&path)?
            }
            Err(_) => Self::default(),
        };
        config.apply_overrides(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    /// Apply `COURSE_CATALOG_*` overrides read through `get`.
    pub fn apply_overrides(
        &mut self,
        get: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(addr) = get(BIND_ADDR_ENV) {
            self.server.bind_addr = addr;
        }
        if let Some(dir) = get(DATA_DIR_ENV) {
            self.datasets.data_dir = PathBuf::from(dir);
        }
        if let Some(value) = get(OPEN_BROWSER_ENV) {
            self.browser.enabled = match value.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ConfigError::InvalidEnv {
                        var: OPEN_BROWSER_ENV,
                        value,
                    })
                }
            };
        }
        Ok(())
    }
}
