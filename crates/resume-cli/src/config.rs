//! Configuration file handling for resume-cli

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default parse service base URL
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:8000/api/v1";

/// Configuration for the CLI tool
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Default parse service base URL
    pub server: Option<String>,
    /// Default output format
    pub output: Option<String>,
    /// Disable colored output
    pub no_color: Option<bool>,
}

impl Config {
    /// Load configuration from the default config file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path).with_context(|| {
                format!("Failed to read config file: {}", config_path.display())
            })?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", config_path.display()))
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Get the default config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("resume-cli");

        Ok(config_dir.join("config.toml"))
    }

    /// Merge CLI arguments over config file values
    pub fn merge_with_args(
        &self,
        server: Option<&str>,
        output: Option<&str>,
        no_color: bool,
    ) -> MergedConfig {
        MergedConfig {
            server: server
                .map(String::from)
                .or_else(|| self.server.clone())
                .unwrap_or_else(|| DEFAULT_SERVER.to_string()),
            output: output
                .map(String::from)
                .or_else(|| self.output.clone())
                .unwrap_or_else(|| "pretty".to_string()),
            no_color: no_color || self.no_color.unwrap_or(false),
        }
    }
}

/// Fully resolved configuration after merging CLI args
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct MergedConfig {
    pub server: String,
    pub output: String,
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_prefers_cli_args() {
        let config = Config {
            server: Some("http://example.com/api/v1".to_string()),
            output: Some("compact".to_string()),
            no_color: Some(false),
        };

        let merged = config.merge_with_args(Some("http://cli.example/api/v1"), None, true);
        assert_eq!(merged.server, "http://cli.example/api/v1");
        assert_eq!(merged.output, "compact");
        assert!(merged.no_color);
    }

    #[test]
    fn test_merge_falls_back_to_defaults() {
        let merged = Config::default().merge_with_args(None, None, false);
        assert_eq!(merged.server, DEFAULT_SERVER);
        assert_eq!(merged.output, "pretty");
        assert!(!merged.no_color);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "server = \"http://10.0.0.5:8000/api/v1\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(
            config.server.as_deref(),
            Some("http://10.0.0.5:8000/api/v1")
        );
        assert!(config.output.is_none());
    }
}
