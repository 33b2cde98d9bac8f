//! Configuration loading and management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::paginate::DEFAULT_PAGE_SIZE;

/// Runtime configuration for the server binary.
///
/// Sources, in precedence order: a YAML file named by `LEXMATCH_CONFIG`,
/// individual `LEXMATCH_*` environment variables, built-in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,

    /// Bind port
    pub port: u16,

    /// Listing page size
    pub page_size: usize,

    /// Whether to seed the starter catalog into an empty store at startup
    pub seed: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            page_size: DEFAULT_PAGE_SIZE,
            seed: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path))?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).context("failed to parse config")?;
        Ok(config)
    }

    /// Apply `LEXMATCH_*` environment overrides over the defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("LEXMATCH_HOST") {
            config.host = host;
        }
        if let Ok(port) = std::env::var("LEXMATCH_PORT") {
            config.port = port
                .parse()
                .with_context(|| format!("invalid LEXMATCH_PORT '{}'", port))?;
        }
        if let Ok(page_size) = std::env::var("LEXMATCH_PAGE_SIZE") {
            config.page_size = page_size
                .parse()
                .with_context(|| format!("invalid LEXMATCH_PAGE_SIZE '{}'", page_size))?;
        }
        if let Ok(seed) = std::env::var("LEXMATCH_SEED") {
            config.seed = seed
                .parse()
                .with_context(|| format!("invalid LEXMATCH_SEED '{}'", seed))?;
        }

        Ok(config)
    }

    /// Resolve configuration from the environment: a config file when
    /// `LEXMATCH_CONFIG` is set, environment variable overrides otherwise.
    pub fn load() -> Result<Self> {
        match std::env::var("LEXMATCH_CONFIG") {
            Ok(path) => Self::from_yaml_file(&path),
            Err(_) => Self::from_env(),
        }
    }

    /// The address to bind, as `host:port`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
