use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use log::info;

const DEFAULT_CONFIG_PATH: &str = "~/.config/pkgsearch-bot/config.yaml";
const DEFAULT_REGISTRY_URL: &str = "https://azuresearch-usnc.nuget.org";

/// Package registry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Base URL of the registry search service (no trailing `/query`)
    #[serde(default = "default_registry_url")]
    pub base_url: String,
    /// Include pre-release versions in results
    #[serde(default = "default_true")]
    pub include_prerelease: bool,
    /// Upper bound for one search request, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl RegistryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: default_registry_url(),
            include_prerelease: true,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// HTTP host configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_workers")]
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
        }
    }
}

/// Outbound connector (reply channel) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Static bearer token attached to outbound replies
    #[serde(default)]
    pub bearer_token: Option<String>,
}

impl ConnectorConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            bearer_token: None,
        }
    }
}

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub registry: RegistryConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub connector: ConnectorConfig,
}

fn default_registry_url() -> String {
    DEFAULT_REGISTRY_URL.to_string()
}

fn default_true() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3978
}

fn default_workers() -> usize {
    4
}

impl Config {
    /// Load configuration from default path or create default
    pub fn load() -> Result<Self, anyhow::Error> {
        let config_path = Self::default_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            info!("Configuration not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit path; the file must exist
    pub fn load_from(path: &Path) -> Result<Self, anyhow::Error> {
        info!("Loading configuration from: {:?}", path);
        let content = fs::read_to_string(path)?;
        // serde's #[serde(default)] handles all defaults during deserialization
        let mut config: Config = serde_yaml::from_str(&content)?;

        config.registry.base_url = config.registry.base_url.trim_end_matches('/').to_string();

        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), anyhow::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;

        info!("Configuration saved to: {:?}", path);
        Ok(())
    }

    pub fn default_path() -> PathBuf {
        expand_path(DEFAULT_CONFIG_PATH)
    }
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_is_expanded() {
        let path = Config::default_path();
        assert!(!path.to_string_lossy().starts_with('~'));
        assert!(path.ends_with("pkgsearch-bot/config.yaml"));
    }
}
