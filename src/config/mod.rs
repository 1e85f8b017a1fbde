//! Configuration loading and management

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_per_page() -> usize {
    5
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Address the server binds to
    pub bind_addr: String,

    /// Accepted bearer tokens. Empty means every request is rejected.
    pub api_tokens: Vec<String>,

    /// Page size used when a listing omits `per_page`
    pub default_per_page: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            api_tokens: Vec::new(),
            default_per_page: default_per_page(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        if config.default_per_page < 1 {
            bail!("default_per_page must be at least 1");
        }
        Ok(config)
    }

    /// Build configuration from `FOLIO_*` environment variables,
    /// falling back to defaults for anything unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(addr) = std::env::var("FOLIO_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Ok(tokens) = std::env::var("FOLIO_API_TOKENS") {
            config.api_tokens = parse_tokens(&tokens);
        }
        if let Ok(per_page) = std::env::var("FOLIO_DEFAULT_PER_PAGE") {
            if let Ok(n) = per_page.parse::<usize>() {
                if n >= 1 {
                    config.default_per_page = n;
                }
            }
        }
        config
    }
}

/// Split a comma-separated token list, dropping empty entries
pub fn parse_tokens(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
