use crate::errors::{ExplorerError, ExplorerResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Console output configuration
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Use emoji status indicators instead of bracketed text tags
    pub glyphs: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { glyphs: true }
    }
}

/// Permission report configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PermissionsConfig {
    /// Only render the owner `rwx` triplet, omitting group and other bits
    pub owner_only: bool,
}

/// Recursive search configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// Descend into symbolic links that point at directories.
    /// Directories already visited (by canonical path) are skipped.
    pub follow_symlinks: bool,
    /// Maximum recursion depth below the starting directory, unlimited when unset
    pub max_depth: Option<usize>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub enabled: bool,
    pub file_path: String,
    pub level: String,
    /// Maximum log file size (bytes)
    pub max_size: u64,
    /// Log rotation count
    pub rotation_count: u32,
    /// Entries queued before they are written out
    pub batch_size: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            file_path: "fexplorer-audit.log".to_string(),
            level: "info".to_string(),
            max_size: 1024 * 1024, // 1MB
            rotation_count: 3,
            batch_size: 16,
        }
    }
}

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

impl LogConfig {
    /// Validate the audit log settings
    pub fn validate(&self) -> ExplorerResult<()> {
        if self.enabled {
            if self.file_path.is_empty() {
                return Err(ExplorerError::Config(
                    "Log file path cannot be empty when logging is enabled".to_string(),
                ));
            }
            if self.max_size == 0 {
                return Err(ExplorerError::Config(
                    "Log max size must be greater than 0".to_string(),
                ));
            }
            if self.rotation_count == 0 {
                return Err(ExplorerError::Config(
                    "Log rotation count must be greater than 0".to_string(),
                ));
            }
            if self.batch_size == 0 {
                return Err(ExplorerError::Config(
                    "Log batch size must be greater than 0".to_string(),
                ));
            }
        }

        if !LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ExplorerError::Config(format!(
                "Unknown log level: {}",
                self.level
            )));
        }

        Ok(())
    }
}

/// Explorer configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Starting directory, the process working directory when unset
    pub start_dir: Option<String>,
    /// Console output configuration
    pub output: OutputConfig,
    /// Permission report configuration
    pub permissions: PermissionsConfig,
    /// Search configuration
    pub search: SearchConfig,
    /// Audit log configuration
    pub logging: LogConfig,
}

impl ExplorerConfig {
    /// Load configuration from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> ExplorerResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ExplorerError::Config(format!("Failed to read config file: {e}")))?;

        serde_json::from_str(&contents)
            .map_err(|e| ExplorerError::Config(format!("Failed to parse config: {e}")))
    }

    /// Load configuration from file, falling back to defaults when the file is absent
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> ExplorerResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            log::debug!("No config file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> ExplorerResult<()> {
        let path = path.as_ref();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ExplorerError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents)
            .map_err(|e| ExplorerError::Config(format!("Failed to write config file: {e}")))
    }

    /// Validate configuration
    pub fn validate(&self) -> ExplorerResult<()> {
        if let Some(dir) = &self.start_dir
            && dir.is_empty()
        {
            return Err(ExplorerError::Config(
                "Start directory cannot be empty when set".to_string(),
            ));
        }

        if self.search.max_depth == Some(0) {
            return Err(ExplorerError::Config(
                "Search max depth must be greater than 0".to_string(),
            ));
        }

        self.logging.validate()
    }
}

/// Configuration builder
#[derive(Default)]
pub struct ExplorerConfigBuilder {
    config: ExplorerConfig,
}

impl ExplorerConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration, typically one loaded from disk
    pub fn from_config(config: ExplorerConfig) -> Self {
        Self { config }
    }

    pub fn start_dir(mut self, dir: String) -> Self {
        self.config.start_dir = Some(dir);
        self
    }

    pub fn glyphs(mut self, glyphs: bool) -> Self {
        self.config.output.glyphs = glyphs;
        self
    }

    pub fn permissions(mut self, permissions: PermissionsConfig) -> Self {
        self.config.permissions = permissions;
        self
    }

    pub fn search(mut self, search: SearchConfig) -> Self {
        self.config.search = search;
        self
    }

    pub fn logging(mut self, logging: LogConfig) -> Self {
        self.config.logging = logging;
        self
    }

    pub fn build(self) -> ExplorerResult<ExplorerConfig> {
        let config = self.config;
        config.validate()?;
        Ok(config)
    }
}
