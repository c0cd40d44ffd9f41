//! Command-line interface for pathcat.
//!
//! This crate provides the `pathcat` binary, which runs the storage path
//! extractor over a batch of paths and prints the resulting catalog
//! entities.
//!
//! # Quick Start
//!
//! ```bash
//! # Write a default config file
//! pathcat init
//!
//! # Extract a few paths in one shared context
//! pathcat extract abfss://data@acct.dfs.core.windows.net/tmp/a.csv s3a://bkt/logs/x.json
//!
//! # Extract a list of paths, skipping bad ones
//! pathcat extract --input paths.txt --keep-going --s3-model-version v2
//! ```
//!
//! # Output Formats
//!
//! All commands support `--format` for output control:
//!
//! - `human` (default): Human-readable with colors
//! - `json`: Machine-readable JSON
//!
//! # Configuration
//!
//! Configuration is loaded from `config.toml` in the platform config
//! directory, or `$PATHCAT_CONFIG_DIR` when set. Override with `--config`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

// Re-export main types
pub use cli::{Cli, Commands, OutputFormatArg};
pub use config::CliConfig;
pub use error::{CliError, CliResult};
pub use output::{OutputFormat, Render};
