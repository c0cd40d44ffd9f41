//! CLI configuration.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use pathcat_extract::ExtractorConfig;
use pathcat_types::S3ModelVersion;

use crate::error::{CliError, CliResult};

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "PATHCAT_CONFIG_DIR";

const ENV_VAR_PATTERN: &str = r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}";

/// Expand environment variables in a string.
/// Supports `${VAR_NAME}` syntax. Unset variables are left as written.
fn expand_env_vars(input: &str) -> CliResult<String> {
    let re = Regex::new(ENV_VAR_PATTERN)
        .map_err(|e| CliError::config(format!("Invalid variable pattern: {}", e)))?;
    Ok(re
        .replace_all(input, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| caps[0].to_string())
        })
        .to_string())
}

/// CLI configuration loaded from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Extractor settings.
    pub extractor: ExtractorConfig,
    /// Display settings.
    pub display: DisplayConfig,
}

impl CliConfig {
    /// Load configuration from a file.
    /// Environment variables in `${VAR}` format are expanded in the namespace
    /// and name service addresses.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&contents)?;

        config.extractor.namespace = expand_env_vars(&config.extractor.namespace)?;
        for addresses in config.extractor.name_services.values_mut() {
            for address in addresses.iter_mut() {
                *address = expand_env_vars(address)?;
            }
        }

        if config.extractor.namespace.trim().is_empty() {
            return Err(CliError::config("extractor.namespace must not be empty"));
        }

        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> CliResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Apply command-line overrides on top of file values.
    pub fn with_overrides(
        mut self,
        namespace: Option<String>,
        lower_case: bool,
        s3_model_version: Option<S3ModelVersion>,
    ) -> Self {
        if let Some(namespace) = namespace {
            self.extractor.namespace = namespace;
        }
        if lower_case {
            self.extractor.lower_case = true;
        }
        if let Some(version) = s3_model_version {
            self.extractor.s3_model_version = version;
        }
        self
    }
}

/// Display configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Colorize human output.
    pub color: bool,
    /// Print ancestor chains in human output.
    pub show_ancestors: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_ancestors: true,
        }
    }
}

/// Get the directory holding `config.toml`.
pub fn default_config_dir() -> PathBuf {
    // Check environment variable first
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return PathBuf::from(dir);
    }

    // Use platform-specific config directory
    directories::ProjectDirs::from("io", "pathcat", "pathcat")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| {
            // Fallback to home directory
            std::env::var("HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(".pathcat")
        })
}

/// Get the default config file path.
pub fn default_config_path() -> PathBuf {
    default_config_dir().join("config.toml")
}
