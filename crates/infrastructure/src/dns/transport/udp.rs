//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing) and limited to 512 bytes. Every
//! exchange binds its own ephemeral socket, connects it to the upstream,
//! performs one send and one receive, and drops it on return.

use async_trait::async_trait;
use relay_dns_application::ports::UpstreamTransport;
use relay_dns_domain::wire::MAX_UDP_MESSAGE_SIZE;
use relay_dns_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use tokio::net::UdpSocket;
use tracing::debug;

/// DNS over UDP transport to a single upstream resolver
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    fn bind_addr(&self) -> SocketAddr {
        // Bind to ephemeral port (0 = OS assigns)
        if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        }
    }
}

#[async_trait]
impl UpstreamTransport for UdpTransport {
    async fn exchange(&self, query: &[u8]) -> Result<Vec<u8>, DomainError> {
        let server = self.server_addr;

        let socket = UdpSocket::bind(self.bind_addr())
            .await
            .map_err(|e| DomainError::transport(server, format!("Failed to bind UDP socket: {}", e)))?;

        // A connected socket only accepts datagrams from the upstream address.
        socket
            .connect(server)
            .await
            .map_err(|e| DomainError::transport(server, format!("Failed to connect: {}", e)))?;

        let bytes_sent = socket
            .send(query)
            .await
            .map_err(|e| DomainError::transport(server, format!("Failed to send UDP query: {}", e)))?;

        if bytes_sent != query.len() {
            return Err(DomainError::EncodeFailure(format!(
                "short write to {}: {} of {} bytes",
                server,
                bytes_sent,
                query.len()
            )));
        }

        debug!(server = %server, bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_MESSAGE_SIZE];
        let bytes_received = socket.recv(&mut recv_buf).await.map_err(|e| {
            DomainError::transport(server, format!("Failed to receive UDP response: {}", e))
        })?;
        recv_buf.truncate(bytes_received);

        debug!(server = %server, bytes_received, "UDP response received");

        validate_response_id(query, &recv_buf, server)?;
        Ok(recv_buf)
    }

    fn server(&self) -> String {
        self.server_addr.to_string()
    }
}

/// Rejects replies whose transaction ID differs from the query's.
pub(crate) fn validate_response_id(
    query: &[u8],
    response: &[u8],
    server: SocketAddr,
) -> Result<(), DomainError> {
    if query.len() < 2 || response.len() < 2 {
        return Err(DomainError::transport(
            server,
            "message too short to carry a transaction ID",
        ));
    }
    let query_id = u16::from_be_bytes([query[0], query[1]]);
    let response_id = u16::from_be_bytes([response[0], response[1]]);
    if query_id != response_id {
        return Err(DomainError::transport(
            server,
            format!(
                "transaction ID mismatch: sent {:#06x}, got {:#06x}",
                query_id, response_id
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "udp_test.rs"]
mod tests;
