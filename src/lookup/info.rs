use crate::config::LookupConfig;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use std::net::IpAddr;

/// Decoded API response. The five recognized fields drive the output; any
/// other keys land in `extra` so an unrecognized-only response still counts
/// as an answer.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct InfoRecord {
    pub hostname: Option<String>,
    pub org: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl InfoRecord {
    /// True only for a decoded `{}`: no recognized field and no other key.
    pub fn is_empty(&self) -> bool {
        self.hostname.is_none()
            && self.org.is_none()
            && self.city.is_none()
            && self.region.is_none()
            && self.country.is_none()
            && self.extra.is_empty()
    }
}

pub async fn fetch_info(client: &Client, config: &LookupConfig, ip: IpAddr) -> Result<InfoRecord> {
    let url = config.info_url(ip)?;
    let resp = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Request to {} failed", config.api_base))?;
    let record = resp
        .json::<InfoRecord>()
        .await
        .context("Response was not a JSON object")?;
    Ok(record)
}
