//! Configuration file support for fraction-resolver.
//!
//! Provides YAML-based configuration through `fraction-resolver.config.yml`
//! files, including data structures, file loading, and validation. Values
//! given on the command line take precedence over the file.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::OutputFormat;
use crate::shared::error::ResolverError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "fraction-resolver.config.yml";

/// Configuration requested when neither the CLI nor the file names one
pub const DEFAULT_CONFIGURATION: &str = "runtimeClasspath";

/// Group whose artifacts the runtime supplies itself
pub const DEFAULT_GROUP: &str = "io.thorntail";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Configuration to resolve, e.g. `runtimeClasspath`
    pub configuration: Option<String>,
    /// Promote fraction subtrees (true) or keep direct children only
    pub transitive_children: Option<bool>,
    /// Skip default-group specs that are not projects of the build
    pub exclude_defaults: Option<bool>,
    pub default_group: Option<String>,
    pub format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed output format, if one was configured
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format.as_deref().and_then(|format| format.parse().ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> std::result::Result<(), ResolverError> {
    let non_empty = [
        ("configuration", config.configuration.as_deref()),
        ("default_group", config.default_group.as_deref()),
    ];
    for (field, value) in non_empty {
        if value.is_some_and(|v| v.trim().is_empty()) {
            return Err(ResolverError::invalid_configuration(format!(
                "{} must not be empty.\n\n💡 Hint: Remove the '{}' field to use the default.",
                field, field
            )));
        }
    }

    if let Some(format) = config.format.as_deref() {
        format
            .parse::<OutputFormat>()
            .map_err(ResolverError::invalid_configuration)?;
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        tracing::warn!("Unknown config field '{}' will be ignored", key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::ExitCode;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("config.yml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
configuration: compileClasspath
transitive_children: false
exclude_defaults: true
default_group: org.wildfly.swarm
format: text
"#,
        );

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.configuration.as_deref(), Some("compileClasspath"));
        assert_eq!(config.transitive_children, Some(false));
        assert_eq!(config.exclude_defaults, Some(true));
        assert_eq!(config.default_group.as_deref(), Some("org.wildfly.swarm"));
        assert_eq!(config.output_format(), Some(OutputFormat::Text));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_unknown_fields_are_kept_for_warnings() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "check_cve: true\nformat: json\n");

        let config = load_config_from_path(&path).unwrap();
        assert!(config.unknown_fields.contains_key("check_cve"));
        assert_eq!(config.output_format(), Some(OutputFormat::Json));
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "exclude_defaults: true\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.exclude_defaults, Some(true));
        assert!(config.configuration.is_none());
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config_from_path(Path::new("/nonexistent/config.yml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "invalid: yaml: [[[broken");

        let err = load_config_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_empty_configuration_is_invalid() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "configuration: \"  \"\n");

        let err = load_config_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("configuration must not be empty"));
        assert_eq!(ExitCode::for_error(&err), ExitCode::InvalidConfiguration);
    }

    #[test]
    fn test_invalid_format_is_invalid() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "format: markdown\n");

        let err = load_config_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid format"));
    }
}
