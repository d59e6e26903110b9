//! Binary configuration.
//!
//! TOML file with full defaults; CLI flags override individual values.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use mailsmith_composer::ComposerConfig;

/// `[api]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiSection {
    pub host: String,
    pub port: u16,
    /// Bearer credential required by the generation endpoint; unset
    /// disables the check.
    pub auth_token: Option<String>,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8787,
            auth_token: None,
        }
    }
}

/// `[composer]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ComposerSection {
    /// Browser debugging endpoint.
    pub browser_endpoint: String,
    /// Generation service root the composer calls.
    pub generate_endpoint: String,
    /// Bearer credential presented to the generation service.
    pub auth_token: Option<String>,
    /// URL opened by the overlay's "Open Dashboard" action.
    pub dashboard_url: String,
    /// Timing knobs, `[composer.timing]`.
    pub timing: ComposerConfig,
}

impl Default for ComposerSection {
    fn default() -> Self {
        Self {
            browser_endpoint: "http://localhost:9222".to_string(),
            generate_endpoint: "http://127.0.0.1:8787".to_string(),
            auth_token: None,
            dashboard_url: "http://localhost:5173/dashboard.html".to_string(),
            timing: ComposerConfig::default(),
        }
    }
}

/// Complete binary configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiSection,
    pub composer: ComposerSection,
}

impl Config {
    /// Load from a TOML file; a missing path yields all defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.api.port, 8787);
        assert_eq!(config.composer.browser_endpoint, "http://localhost:9222");
        assert!(config.api.auth_token.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[api]\nport = 9000\n\n[composer.timing]\nfield_timeout_ms = 250\n"
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.api.port, 9000);
        assert_eq!(config.api.host, "127.0.0.1");
        assert_eq!(config.composer.timing.field_timeout_ms, 250);
        assert_eq!(config.composer.timing.probe_interval_ms, 100);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = Config::load(Some(Path::new("/nonexistent/mailsmith.toml")));
        assert!(result.is_err());
    }
}
