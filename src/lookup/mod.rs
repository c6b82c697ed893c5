pub mod dns;
pub mod info;

use crate::config::{LookupConfig, USER_AGENT};
use crate::output;
use crate::util;

use anyhow::{Context, Result};
use reqwest::Client;
use std::net::IpAddr;
use tracing::debug;
use trust_dns_resolver::TokioAsyncResolver;

/// One input string, classified. The variants are mutually exclusive:
/// anything that parses as an address literal never touches DNS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Ip(IpAddr),
    Domain(String),
}

impl Target {
    pub fn classify(input: &str) -> Self {
        let input = input.trim();
        match input.parse::<IpAddr>() {
            Ok(ip) => Target::Ip(ip),
            Err(_) => Target::Domain(input.to_string()),
        }
    }
}

/// Shared lookup state: the immutable config plus the HTTP client and
/// resolver built once at startup. Lookups themselves carry no state and
/// are fully independent of each other.
pub struct Lookup {
    config: LookupConfig,
    client: Client,
    resolver: TokioAsyncResolver,
}

impl Lookup {
    pub fn new(config: LookupConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()
            .context("Failed to build HTTP client")?;
        let resolver = dns::resolver();
        Ok(Self {
            config,
            client,
            resolver,
        })
    }

    /// Process one item. Every failure turns into a single printed line
    /// right here and nothing propagates to the caller, so a failed item
    /// never disturbs the ones after it.
    pub async fn run(&self, input: &str) {
        match Target::classify(input) {
            Target::Ip(ip) => self.run_ip(ip).await,
            Target::Domain(domain) => self.run_domain(&domain).await,
        }
    }

    async fn run_ip(&self, ip: IpAddr) {
        let record = match info::fetch_info(&self.client, &self.config, ip).await {
            Ok(record) => record,
            Err(err) => {
                debug!("info fetch for {} failed: {:?}", ip, err);
                output::connection_error();
                return;
            }
        };
        if record.is_empty() {
            output::no_info_found(ip);
            return;
        }
        output::print_record(&record);
    }

    async fn run_domain(&self, domain: &str) {
        let host = util::extract_host(domain).unwrap_or_else(|| domain.to_string());
        output::domain_line(&host);

        let ips = match dns::resolve(&self.resolver, &host).await {
            Ok(ips) => ips,
            Err(err) => {
                debug!("forward lookup for {} failed: {:?}", host, err);
                output::domain_not_found(&host);
                return;
            }
        };
        let Some(ip) = ips.first().copied() else {
            output::no_ips_found(domain);
            return;
        };
        output::ip_line(ip);

        if let Some(name) = dns::reverse(&self.resolver, ip).await {
            output::reverse_dns_line(&name);
        }

        self.run_ip(ip).await;
    }
}
