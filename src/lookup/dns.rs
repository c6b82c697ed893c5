use anyhow::{Context, Result};
use std::net::IpAddr;
use tracing::debug;
use trust_dns_resolver::TokioAsyncResolver;
use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};

pub fn resolver() -> TokioAsyncResolver {
    TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default())
}

/// Forward lookup. Resolver-returned order is preserved; callers pick the
/// first entry.
pub async fn resolve(resolver: &TokioAsyncResolver, host: &str) -> Result<Vec<IpAddr>> {
    let lookup = resolver
        .lookup_ip(host)
        .await
        .with_context(|| format!("Forward lookup failed for {host}"))?;
    Ok(lookup.iter().collect())
}

/// PTR lookup for display. An unanswered or failed query is an expected
/// outcome, modeled as None.
pub async fn reverse(resolver: &TokioAsyncResolver, ip: IpAddr) -> Option<String> {
    let lookup = match resolver.reverse_lookup(ip).await {
        Ok(lookup) => lookup,
        Err(err) => {
            debug!("reverse lookup for {} failed: {}", ip, err);
            return None;
        }
    };
    lookup.iter().next().map(|name| {
        let name = name.to_string();
        name.strip_suffix('.').unwrap_or(&name).to_string()
    })
}
