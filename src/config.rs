//! Resolver configuration loaded from `icon-resolver.toml`

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// File name looked up by [`ResolverConfig::discover`]
pub const DEFAULT_CONFIG_FILE: &str = "icon-resolver.toml";

/// Errors that can occur when loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Configuration for the resolver binary
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    /// Catalog manifest to serve
    pub catalog: Option<PathBuf>,

    /// Default fallback policy for requests
    pub fallback: bool,

    /// Simulated provider latency in milliseconds
    pub latency_ms: u64,

    /// Memoize catalog fetches per icon name
    pub cache: bool,

    /// Log filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            fallback: true,
            latency_ms: 0,
            cache: true,
            log_filter: "warn".to_string(),
        }
    }
}

impl ResolverConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    ///
    /// A relative `catalog` path is taken relative to the file's directory.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_str(&content)?;

        if let (Some(catalog), Some(dir)) = (&config.catalog, path.parent()) {
            if catalog.is_relative() {
                config.catalog = Some(dir.join(catalog));
            }
        }
        Ok(config)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load `icon-resolver.toml` from a directory, or defaults when absent
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::from_file(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Set the catalog manifest
    pub fn with_catalog(mut self, catalog: PathBuf) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Set the default fallback policy
    pub fn with_fallback(mut self, fallback: bool) -> Self {
        self.fallback = fallback;
        self
    }

    /// Set the simulated provider latency
    pub fn with_latency_ms(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    /// Enable or disable fetch caching
    pub fn with_cache(mut self, cache: bool) -> Self {
        self.cache = cache;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = ResolverConfig::default();
        assert_eq!(config.catalog, None);
        assert!(config.fallback);
        assert_eq!(config.latency_ms, 0);
        assert!(config.cache);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = ResolverConfig::from_str("fallback = false").expect("Should parse");
        assert_eq!(config, ResolverConfig::new().with_fallback(false));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result = ResolverConfig::from_str("fallbak = false");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_catalog_relative_to_config_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "catalog = \"icons.toml\"\nlatency_ms = 250\n",
        )
        .expect("write config");

        let config = ResolverConfig::discover(dir.path()).expect("Should load");
        assert_eq!(config.catalog, Some(dir.path().join("icons.toml")));
        assert_eq!(config.latency_ms, 250);
    }

    #[test]
    fn test_discover_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = ResolverConfig::discover(dir.path()).expect("Should default");
        assert_eq!(config, ResolverConfig::default());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ResolverConfig::new()
            .with_catalog(PathBuf::from("icons.toml"))
            .with_latency_ms(10)
            .with_cache(false);

        assert_eq!(config.catalog, Some(PathBuf::from("icons.toml")));
        assert_eq!(config.latency_ms, 10);
        assert!(!config.cache);
    }
}
