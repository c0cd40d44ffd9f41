//! Classify a path's scheme.

use pathcat_extract::{SchemeFamily, StoragePath};

use crate::error::CliResult;
use crate::output::{ClassifyOutput, OutputFormat, Render};

/// Execute the classify command.
pub fn classify(format: OutputFormat, raw: &str) -> CliResult<String> {
    let path = StoragePath::parse(raw)?;
    let family = SchemeFamily::of(&path)?;

    let output = ClassifyOutput {
        path: path.to_string(),
        scheme: path.scheme().to_string(),
        family: family.to_string(),
        schemes: family.schemes().iter().map(|s| s.to_string()).collect(),
    };

    Ok(output.render(format))
}
