//! Write a default config file.

use std::path::Path;

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{InitOutput, OutputFormat, Render};

/// Execute the init command.
pub fn init(config_path: &Path, format: OutputFormat, force: bool) -> CliResult<String> {
    let exists = config_path.exists();
    if exists && !force {
        return Err(CliError::ConfigExists(
            config_path.to_string_lossy().to_string(),
        ));
    }

    CliConfig::default().save(config_path)?;

    let output = InitOutput {
        config_path: config_path.to_string_lossy().to_string(),
        overwritten: exists,
    };

    Ok(output.render(format))
}
