use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use super::cli::CliConfig;
use super::constants::{CONFIG_FILE_NAME, DEFAULT_HOST, DEFAULT_PORT};

// =============================================================================
// File Config Structs (optional JSON overlay)
// =============================================================================

/// Server configuration section (from JSON config file)
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ServerFileConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// File-based configuration (JSON)
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub server: Option<ServerFileConfig>,
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

impl FileConfig {
    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "Loading config file");
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Warn about unknown fields in the config
    fn warn_unknown_fields(&self) {
        if let serde_json::Value::Object(map) = &self.extra
            && !map.is_empty()
        {
            let keys_str: String = map
                .keys()
                .map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            tracing::warn!(
                fields = %keys_str,
                "Unknown fields in config file (possible typos)"
            );
        }
    }
}

// =============================================================================
// Runtime Config Structs (final merged configuration)
// =============================================================================

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Final merged application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load configuration from all sources
    ///
    /// Priority (lowest to highest):
    /// 1. Defaults
    /// 2. Local directory config OR CLI-specified config path
    /// 3. CLI arguments (which include env var fallbacks via clap)
    pub fn load(cli: &CliConfig) -> Result<Self> {
        tracing::debug!("Loading application configuration");

        let overlay_path = if let Some(ref path) = cli.config {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            Some(path.clone())
        } else {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            if local.exists() { Some(local) } else { None }
        };

        let file_config = match overlay_path {
            Some(path) => {
                let config = FileConfig::load_from_file(&path)?;
                config.warn_unknown_fields();
                tracing::debug!(path = %path.display(), "Config file loaded");
                config
            }
            None => FileConfig::default(),
        };

        let file_server = file_config.server.unwrap_or_default();

        let host = cli
            .host
            .clone()
            .or(file_server.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = cli.port.or(file_server.port).unwrap_or(DEFAULT_PORT);

        Ok(Self {
            server: ServerConfig { host, port },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_file_or_cli() {
        let config = AppConfig::load(&CliConfig::default()).unwrap();
        assert_eq!(config.server.host, DEFAULT_HOST);
        assert_eq!(config.server.port, DEFAULT_PORT);
    }

    #[test]
    fn cli_overrides_defaults() {
        let cli = CliConfig {
            host: Some("0.0.0.0".into()),
            port: Some(8080),
            config: None,
        };
        let config = AppConfig::load(&cli).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn missing_config_path_is_an_error() {
        let cli = CliConfig {
            host: None,
            port: None,
            config: Some(PathBuf::from("/nonexistent/plantdesk.json")),
        };
        assert!(AppConfig::load(&cli).is_err());
    }
}
