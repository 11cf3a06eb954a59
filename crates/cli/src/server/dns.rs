use relay_dns_infrastructure::dns::{DnsServerHandler, UdpDnsServer};
use tracing::{error, info};

pub async fn start_dns_server(bind_addr: String, handler: DnsServerHandler) -> anyhow::Result<()> {
    let server = UdpDnsServer::bind(bind_addr.as_str(), handler)
        .await
        .map_err(|e| {
            error!(bind_address = %bind_addr, error = %e, "Failed to bind DNS socket");
            anyhow::anyhow!("failed to bind {}: {}", bind_addr, e)
        })?;

    info!(bind_address = %server.local_addr()?, "Starting DNS server");

    server
        .run(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(error = %e, "Failed to listen for shutdown signal");
                std::future::pending::<()>().await;
            }
            info!("Shutdown signal received");
        })
        .await?;
    Ok(())
}
