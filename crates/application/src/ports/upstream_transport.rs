use async_trait::async_trait;
use relay_dns_domain::DomainError;

/// One request/reply exchange with the upstream resolver.
///
/// Implementations acquire whatever connection they need for a single call
/// and release it before returning, on success and on error alike.
#[async_trait]
pub trait UpstreamTransport: Send + Sync {
    /// Sends one encoded query and returns the single reply datagram.
    async fn exchange(&self, query: &[u8]) -> Result<Vec<u8>, DomainError>;

    /// Human-readable upstream address for logs.
    fn server(&self) -> String;
}
