use relay_dns_domain::{CliOverrides, Config, UpstreamAddr};
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

/// Installs the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            let level = config.logging.normalized_level();
            EnvFilter::new(level.as_deref().unwrap_or("info"))
        });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if let Some(path) = Config::get_config_path() {
        info!(path = %path, "Configuration file found");
    }
}

/// Turns the configured upstream into a socket address, resolving hostnames
/// through the system resolver once at startup.
pub async fn resolve_upstream(addr: &UpstreamAddr) -> anyhow::Result<SocketAddr> {
    if let Some(socket_addr) = addr.socket_addr() {
        return Ok(socket_addr);
    }

    let (hostname, port) = addr
        .unresolved_parts()
        .ok_or_else(|| anyhow::anyhow!("Upstream address {} has no host part", addr))?;

    let mut candidates: Vec<SocketAddr> = tokio::net::lookup_host((hostname, port)).await?.collect();
    if candidates.is_empty() {
        anyhow::bail!("Upstream hostname {} did not resolve to any address", hostname);
    }
    if candidates.len() > 1 {
        warn!(
            hostname,
            candidates = candidates.len(),
            "Upstream hostname has several addresses, using the first IPv4 one if any"
        );
    }

    let position = candidates.iter().position(SocketAddr::is_ipv4).unwrap_or(0);
    let chosen = candidates.swap_remove(position);
    info!(hostname, resolved = %chosen, "Upstream hostname resolved");
    Ok(chosen)
}
