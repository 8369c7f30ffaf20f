//! Configuration system for GreenCity.
//!
//! Load optimizer, catalog and report settings from TOML (or YAML) files
//! without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use greencity_config::GreenCityConfig;
//!
//! let config = GreenCityConfig::from_toml_str(r#"
//!     [optimizer]
//!     max_table_bytes = 1048576
//!     progress_interval = 10
//!
//!     [report]
//!     output_dir = "reports"
//! "#).unwrap();
//!
//! assert_eq!(config.optimizer.max_table_bytes, 1_048_576);
//! assert_eq!(config.report.output_dir.to_str(), Some("reports"));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use greencity_config::GreenCityConfig;
//!
//! let config = GreenCityConfig::load("greencity.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default DP memory ceiling: 512 MiB.
pub const DEFAULT_MAX_TABLE_BYTES: u64 = 512 * 1024 * 1024;

/// Default number of items between progress notifications.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 50;

/// Catalog path used when neither the CLI nor the config names one.
pub const DEFAULT_CATALOG_PATH: &str = "dataset/green_city_devices.csv";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct GreenCityConfig {
    /// Knapsack optimizer settings.
    #[serde(default)]
    pub optimizer: OptimizerConfig,

    /// Catalog ingestion settings.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Report output settings.
    #[serde(default)]
    pub report: ReportConfig,
}

impl GreenCityConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, picking the format by extension.
    ///
    /// `.yaml`/`.yml` files are parsed as YAML, everything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, fails to parse, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path)?,
            _ => Self::from_toml_file(path)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Checks values that parse fine but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.optimizer.max_table_bytes == 0 {
            return Err(ConfigError::Invalid(
                "optimizer.max_table_bytes must be greater than zero".to_string(),
            ));
        }
        if self.catalog.delimiter.chars().count() != 1 {
            return Err(ConfigError::Invalid(format!(
                "catalog.delimiter must be a single character, got {:?}",
                self.catalog.delimiter
            )));
        }
        Ok(())
    }

    /// Sets the DP memory ceiling.
    pub fn with_max_table_bytes(mut self, bytes: u64) -> Self {
        self.optimizer.max_table_bytes = bytes;
        self
    }

    /// Sets the progress notification interval.
    pub fn with_progress_interval(mut self, items: usize) -> Self {
        self.optimizer.progress_interval = items;
        self
    }

    /// Sets the catalog path.
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog.path = Some(path.into());
        self
    }

    /// Sets the report output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.report.output_dir = dir.into();
        self
    }

    /// Returns the catalog path, falling back to [`DEFAULT_CATALOG_PATH`].
    pub fn catalog_path(&self) -> PathBuf {
        self.catalog
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH))
    }
}

/// Knapsack optimizer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct OptimizerConfig {
    /// Upper bound on the bytes the DP tables may occupy.
    pub max_table_bytes: u64,

    /// Items processed between progress notifications (0 disables them).
    pub progress_interval: usize,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_table_bytes: DEFAULT_MAX_TABLE_BYTES,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl OptimizerConfig {
    /// Creates a config with the given memory ceiling and default interval.
    pub fn with_max_table_bytes(bytes: u64) -> Self {
        Self {
            max_table_bytes: bytes,
            ..Self::default()
        }
    }
}

/// Catalog ingestion configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct CatalogConfig {
    /// Catalog file; the CLI argument takes precedence.
    pub path: Option<PathBuf>,

    /// Field separator, a single character.
    pub delimiter: String,

    /// Whether the first line is a header row.
    pub has_header: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            delimiter: ",".to_string(),
            has_header: true,
        }
    }
}

impl CatalogConfig {
    /// Returns the delimiter as a char, `,` if the configured one is empty.
    pub fn delimiter_char(&self) -> char {
        self.delimiter.chars().next().unwrap_or(',')
    }
}

/// Report output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ReportConfig {
    /// Directory reports are written to.
    pub output_dir: PathBuf,

    /// Symbol printed before amounts in the report body.
    pub currency_symbol: String,

    /// Currency code used in report file names.
    pub currency_code: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("outputs"),
            currency_symbol: "₺".to_string(),
            currency_code: "TL".to_string(),
        }
    }
}
