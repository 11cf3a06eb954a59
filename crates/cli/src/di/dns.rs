use crate::bootstrap;
use relay_dns_application::use_cases::ForwardQueryUseCase;
use relay_dns_domain::Config;
use relay_dns_infrastructure::dns::{DnsServerHandler, UdpTransport};
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub handler: DnsServerHandler,
}

impl DnsServices {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let upstream = config.upstream.resolver_addr()?;
        let upstream_addr = bootstrap::resolve_upstream(&upstream).await?;
        let decode_options = config.upstream.decode_options();

        info!(
            upstream = %upstream_addr,
            max_pointer_hops = decode_options.max_pointer_hops,
            "Initializing DNS forwarding"
        );

        let transport = Arc::new(UdpTransport::new(upstream_addr));
        let forward_use_case =
            Arc::new(ForwardQueryUseCase::new(transport).with_decode_options(decode_options));
        let handler = DnsServerHandler::new(forward_use_case).with_decode_options(decode_options);

        Ok(Self { handler })
    }
}
