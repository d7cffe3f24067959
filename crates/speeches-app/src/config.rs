// File: src/config.rs
// Purpose: Deployment configuration from speeches.toml and the environment

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable carrying the deployment base URL
pub const BASE_URL_ENV: &str = "BASE_URL";

/// Default configuration file name
pub const CONFIG_FILE: &str = "speeches.toml";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub router: RouterConfig,
}

/// Routing configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouterConfig {
    /// Prefix the app is served under (e.g., "/archive/")
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Whether literal segments ignore case (default: false)
    #[serde(default)]
    pub case_insensitive: bool,
}

fn default_base_path() -> String {
    "/".to_string()
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            case_insensitive: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// A missing or empty file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load from ./speeches.toml, then apply `BASE_URL` if set
    pub fn load_default() -> Result<Self> {
        let config = Self::load(CONFIG_FILE)?;
        Ok(config.with_base_url(std::env::var(BASE_URL_ENV).ok()))
    }

    /// Overrides the base path with a deployment-supplied value
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(base) = base_url.filter(|b| !b.trim().is_empty()) {
            self.router.base_path = base;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.router.base_path, "/");
        assert!(!config.router.case_insensitive);
    }

    #[test]
    fn test_load_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_whitespace_only_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "  \n\t\n").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_router_section() {
        let toml = r#"
            [router]
            base_path = "/archive/"
            case_insensitive = true
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.router.base_path, "/archive/");
        assert!(config.router.case_insensitive);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("speeches.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[router]\nbase_path = \"/talks\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.router.base_path, "/talks");
        assert!(!config.router.case_insensitive);
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[router\nbase_path = ").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_base_url_override() {
        let config = Config::default().with_base_url(Some("/speeches-archive/".to_string()));
        assert_eq!(config.router.base_path, "/speeches-archive/");

        let config = Config::default().with_base_url(Some("  ".to_string()));
        assert_eq!(config.router.base_path, "/");

        let config = Config::default().with_base_url(None);
        assert_eq!(config.router.base_path, "/");
    }
}
