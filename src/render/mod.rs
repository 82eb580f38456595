//! Result rendering
//!
//! Serializes a successful result for terminal consumption: JSON, YAML, or a
//! flat table, with an optional JMESPath projection applied first. Binary
//! results bypass formatting entirely and are copied to the requested path.

pub mod table;

use std::path::Path;

use clap::ValueEnum;

use crate::error::{CliError, CliResult};

/// Output format for value results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Canonical JSON encoding
    Json,
    /// Equivalent structural encoding in YAML
    Yaml,
    /// Flat tabulation of top-level fields (default)
    #[default]
    Table,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}

/// Render a result value in the selected format.
///
/// When `query` is present the value is projected through it first and the
/// projection result feeds the formatter.
pub fn render_value(
    value: &serde_json::Value,
    format: OutputFormat,
    query: Option<&str>,
) -> CliResult<String> {
    let projected;
    let value = match query {
        Some(q) => {
            projected = project(value, q)?;
            &projected
        }
        None => value,
    };

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        OutputFormat::Table => table::render(value),
    }
}

/// Project a value through a JMESPath expression
fn project(value: &serde_json::Value, query: &str) -> CliResult<serde_json::Value> {
    let expression = jmespath::compile(query)
        .map_err(|e| CliError::Render(format!("Invalid JMESPath query: {}", e)))?;
    let data = jmespath::Variable::from_json(&value.to_string())
        .map_err(|e| CliError::Render(format!("Projection input error: {}", e)))?;
    let result = expression
        .search(data)
        .map_err(|e| CliError::Render(format!("Projection failed: {}", e)))?;
    serde_json::to_value(result.as_ref())
        .map_err(|e| CliError::Render(format!("Projection result error: {}", e)))
}

/// Copy a downloaded byte stream to its destination path.
///
/// The file is created or truncated. On a failed write the partial file is
/// left in place and the error is surfaced.
pub fn write_binary(data: &[u8], path: &Path) -> CliResult<()> {
    std::fs::write(path, data)
        .map_err(|e| CliError::Io(format!("Cannot write '{}': {}", path.display(), e)))
}
