//! Output formatting for CLI.

use colored::Colorize;
use serde::Serialize;
use std::sync::Arc;

use pathcat_types::{Entity, EntityWithExtInfo};

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use 'human' or 'json'.", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Trait for renderable output.
pub trait Render {
    /// Render as human-readable string.
    fn render_human(&self) -> String;

    /// Render as JSON string.
    fn render_json(&self) -> String;

    /// Render in the specified format.
    fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Human => self.render_human(),
            OutputFormat::Json => self.render_json(),
        }
    }
}

fn entity_line(entity: &Entity) -> String {
    format!(
        "{} {}",
        entity.type_name.as_str().cyan(),
        entity.qualified_name().unwrap_or_default()
    )
}

// =============================================================================
// Output Types
// =============================================================================

/// One successfully extracted path.
#[derive(Debug, Serialize)]
pub struct ExtractedPath {
    pub path: String,
    #[serde(flatten)]
    pub result: EntityWithExtInfo,
}

/// One path skipped under `--keep-going`.
#[derive(Debug, Serialize)]
pub struct SkippedPath {
    pub path: String,
    pub error: String,
}

/// Output for extract command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractOutput {
    pub namespace: String,
    pub results: Vec<ExtractedPath>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedPath>,
    pub known_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub known_entities: Option<Vec<Arc<Entity>>>,
    #[serde(skip)]
    pub show_ancestors: bool,
}

impl Render for ExtractOutput {
    fn render_human(&self) -> String {
        let mut lines = Vec::new();

        for extracted in &self.results {
            let result = &extracted.result;
            lines.push(format!("{} {}", "Extracted:".green().bold(), extracted.path));
            lines.push(format!("  {} {}", "Entity:".bold(), entity_line(&result.entity)));

            if self.show_ancestors && !result.ancestors().is_empty() {
                lines.push(format!("  {}", "Ancestors:".bold()));
                for ancestor in result.ancestors() {
                    lines.push(format!("    {}", entity_line(ancestor)));
                }
            }

            let referred = match result.referred_entities() {
                Some(map) => map.len().to_string(),
                None => "none".dimmed().to_string(),
            };
            lines.push(format!("  {} {}", "Referred:".bold(), referred));
        }

        for skipped in &self.skipped {
            lines.push(format!(
                "{} {} ({})",
                "Skipped:".yellow().bold(),
                skipped.path,
                skipped.error
            ));
        }

        if let Some(known) = &self.known_entities {
            lines.push(format!("{}", "Known entities:".bold()));
            for entity in known {
                lines.push(format!("  {}", entity_line(entity)));
            }
        }

        lines.push(format!(
            "{} extracted, {} skipped, {} known entities in namespace {}",
            self.results.len(),
            self.skipped.len(),
            self.known_count,
            self.namespace.bold()
        ));
        lines.join("\n")
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Output for classify command.
#[derive(Debug, Serialize)]
pub struct ClassifyOutput {
    pub path: String,
    pub scheme: String,
    pub family: String,
    pub schemes: Vec<String>,
}

impl Render for ClassifyOutput {
    fn render_human(&self) -> String {
        format!(
            "{} {}\n{} {} ({})",
            "Scheme:".bold(),
            self.scheme,
            "Family:".bold(),
            self.family.green(),
            self.schemes.join(", ")
        )
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Output for init command.
#[derive(Debug, Serialize)]
pub struct InitOutput {
    pub config_path: String,
    pub overwritten: bool,
}

impl Render for InitOutput {
    fn render_human(&self) -> String {
        let verb = if self.overwritten {
            "Configuration overwritten:"
        } else {
            "Configuration saved to:"
        };
        format!("{} {}", verb.green().bold(), self.config_path)
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
