//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use pathcat_types::S3ModelVersion;

use crate::output::OutputFormat;

/// Storage path to catalog entity extractor.
#[derive(Parser, Debug)]
#[command(name = "pathcat")]
#[command(author = "Pathcat Contributors")]
#[command(version)]
#[command(about = "Turn storage paths into catalog entities")]
#[command(
    long_about = "pathcat decomposes HDFS, Ozone, ADLS Gen2 and S3 paths into the catalog entities that describe them.\n\nRun 'pathcat init' to write a default config file."
)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (human or json).
    #[arg(short, long, global = true, default_value = "human")]
    pub format: OutputFormatArg,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Output format argument for clap.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormatArg {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract catalog entities for one or more paths.
    ///
    /// All paths share one extraction context, so common ancestors are
    /// created once.
    Extract {
        /// Storage paths to extract.
        paths: Vec<String>,

        /// Read additional paths from a file, one per line ('-' for stdin).
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Metadata namespace (overrides config).
        #[arg(short, long, env = "PATHCAT_NAMESPACE")]
        namespace: Option<String>,

        /// Fold HDFS paths to lower case.
        #[arg(long)]
        lower_case: bool,

        /// S3 entity model: v1 or v2 (overrides config).
        #[arg(long)]
        s3_model_version: Option<S3ModelVersion>,

        /// Skip paths that fail instead of stopping at the first one.
        #[arg(short, long)]
        keep_going: bool,

        /// Also print every entity known after the batch.
        #[arg(long)]
        known: bool,
    },

    /// Show which storage family a path belongs to.
    Classify {
        /// Storage path to classify.
        path: String,
    },

    /// Write a default configuration file.
    Init {
        /// Overwrite an existing config file.
        #[arg(long)]
        force: bool,
    },
}
