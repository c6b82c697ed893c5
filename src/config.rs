use anyhow::{Context, Result};
use reqwest::Url;
use serde::Deserialize;
use std::net::IpAddr;
use std::path::Path;
use std::time::Duration;
use tokio::fs;

/// Identifying User-Agent sent with every API request.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LookupConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_api_base() -> String {
    "https://ipinfo.io".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl LookupConfig {
    /// Build the per-run config: an optional JSON file named by IPINFO_CONFIG,
    /// with IPINFO_API_BASE / IPINFO_TIMEOUT_MS overrides on top.
    pub async fn load() -> Result<Self> {
        let mut config = match std::env::var("IPINFO_CONFIG") {
            Ok(path) => Self::load_file(&path).await?,
            Err(_) => Self::default(),
        };

        if let Ok(base) = std::env::var("IPINFO_API_BASE") {
            config.api_base = base;
        }
        if let Ok(timeout) = std::env::var("IPINFO_TIMEOUT_MS") {
            config.timeout_ms = timeout
                .parse()
                .with_context(|| format!("Invalid IPINFO_TIMEOUT_MS: {timeout}"))?;
        }

        // Catch an unusable base URL at startup, not on the first lookup
        Url::parse(&config.api_base)
            .with_context(|| format!("Invalid API base URL: {}", config.api_base))?;

        Ok(config)
    }

    async fn load_file(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Err(anyhow::anyhow!("Config file not found: {}", path));
        }
        let content = fs::read_to_string(path).await?;
        let config: LookupConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// API endpoint for one IP, built from path segments rather than string
    /// substitution so the address can never rewrite the URL shape.
    pub fn info_url(&self, ip: IpAddr) -> Result<Url> {
        let mut url = Url::parse(&self.api_base)?;
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("API base does not accept a path: {}", self.api_base))?
            .pop_if_empty()
            .push(&ip.to_string())
            .push("json");
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LookupConfig::default();
        assert_eq!(config.api_base, "https://ipinfo.io");
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_info_url_joins_path_segments() {
        let config = LookupConfig::default();
        let url = config.info_url("8.8.8.8".parse().unwrap()).unwrap();
        assert_eq!(url.as_str(), "https://ipinfo.io/8.8.8.8/json");
    }

    #[test]
    fn test_info_url_keeps_existing_base_path() {
        let config = LookupConfig {
            api_base: "https://geo.example/api/".to_string(),
            ..Default::default()
        };
        let url = config.info_url("::1".parse().unwrap()).unwrap();
        assert_eq!(url.as_str(), "https://geo.example/api/::1/json");
    }

    #[test]
    fn test_config_file_fields_are_optional() {
        let config: LookupConfig = serde_json::from_str(r#"{"timeout_ms": 2500}"#).unwrap();
        assert_eq!(config.timeout(), Duration::from_millis(2500));
        assert_eq!(config.api_base, "https://ipinfo.io");
    }
}
