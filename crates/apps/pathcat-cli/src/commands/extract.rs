//! Extract entities for a batch of paths.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{ExtractOutput, ExtractedPath, OutputFormat, Render, SkippedPath};

/// Inputs of one extract invocation.
#[derive(Debug, Clone, Default)]
pub struct ExtractRequest {
    /// Paths given on the command line.
    pub paths: Vec<String>,
    /// File with more paths, `-` for stdin.
    pub input: Option<PathBuf>,
    /// Skip failing paths instead of aborting.
    pub keep_going: bool,
    /// Include every known entity in the output.
    pub show_known: bool,
}

/// Read one path per line. Blank lines and `#` comments are ignored.
pub fn read_paths<R: BufRead>(reader: R) -> CliResult<Vec<String>> {
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        paths.push(trimmed.to_string());
    }
    Ok(paths)
}

fn collect_paths(request: &ExtractRequest) -> CliResult<Vec<String>> {
    let mut paths = request.paths.clone();

    if let Some(input) = &request.input {
        let extra = if input.as_os_str() == "-" {
            read_paths(io::stdin().lock())?
        } else {
            let file = File::open(input).map_err(|e| {
                CliError::user(format!("Cannot read {}: {}", input.display(), e))
            })?;
            read_paths(BufReader::new(file))?
        };
        paths.extend(extra);
    }

    if paths.is_empty() {
        return Err(CliError::NoPaths);
    }
    Ok(paths)
}

/// Execute the extract command.
pub fn extract(config: CliConfig, format: OutputFormat, request: ExtractRequest) -> CliResult<String> {
    let paths = collect_paths(&request)?;
    let mut ctx = config.extractor.to_context();
    debug!(
        count = paths.len(),
        namespace = ctx.namespace(),
        "Extracting batch"
    );

    let mut results = Vec::with_capacity(paths.len());
    let mut skipped = Vec::new();

    for raw in paths {
        match ctx.extract(&raw) {
            Ok(result) => results.push(ExtractedPath { path: raw, result }),
            Err(e) if request.keep_going => {
                warn!(path = %raw, error = %e, "Skipping path");
                skipped.push(SkippedPath {
                    path: raw,
                    error: e.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        }
    }

    let known_count = ctx.len();
    let known_entities = request
        .show_known
        .then(|| ctx.into_known_entities().into_values().collect());

    let output = ExtractOutput {
        namespace: config.extractor.namespace,
        results,
        skipped,
        known_count,
        known_entities,
        show_ancestors: config.display.show_ancestors,
    };

    Ok(output.render(format))
}
