//! TOML parser with helpful error messages

use super::schema::InstallerConfig;
use anyhow::{Context, Result};
use std::path::Path;

/// Parse stubdeps.toml with detailed error messages
pub fn parse_config(path: &Path) -> Result<InstallerConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_config_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse stubdeps.toml content from string
pub fn parse_config_str(content: &str) -> Result<InstallerConfig> {
    let config: InstallerConfig = toml::from_str(content)
        .map_err(|e| anyhow::anyhow!(describe_toml_error(&e, content)))?;

    config.validate()?;

    Ok(config)
}

/// Describe a TOML error, quoting the lines around it when the position is known
pub(crate) fn describe_toml_error(error: &toml::de::Error, content: &str) -> String {
    let message = error.message();

    match error.span() {
        Some(span) => {
            let offset = span.start.min(content.len());
            let line_num = content[..offset].matches('\n').count() + 1;
            format!(
                "TOML parsing error at line {}:\n{}\n\nError: {}",
                line_num,
                get_line_context(content, line_num),
                message
            )
        }
        None => format!("TOML parsing error: {}", message),
    }
}

/// Get context lines around an error
fn get_line_context(content: &str, line_num: usize) -> String {
    let lines: Vec<&str> = content.lines().collect();
    let end = (line_num + 2).min(lines.len());
    let start = line_num.saturating_sub(2).min(end);

    lines[start..end]
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let num = start + i + 1;
            let marker = if num == line_num { ">>>" } else { "   " };
            format!("{} {:4} | {}", marker, num, line)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Serialize a configuration to TOML string
pub fn to_toml(config: &InstallerConfig) -> Result<String> {
    toml::to_string_pretty(config).with_context(|| "Failed to serialize configuration to TOML")
}
