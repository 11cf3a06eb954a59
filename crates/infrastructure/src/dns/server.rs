use super::handler::DnsServerHandler;
use relay_dns_domain::wire::MAX_UDP_MESSAGE_SIZE;
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use tokio::net::{ToSocketAddrs, UdpSocket};
use tracing::{error, info, warn};

/// Sequential UDP front end: receive, handle, reply, repeat.
///
/// Requests are handled one at a time; a slow upstream stalls every waiting
/// client until its round trips complete.
pub struct UdpDnsServer {
    socket: UdpSocket,
    handler: DnsServerHandler,
}

impl UdpDnsServer {
    pub async fn bind<A: ToSocketAddrs>(addr: A, handler: DnsServerHandler) -> io::Result<Self> {
        let socket = UdpSocket::bind(addr).await?;
        Ok(Self { socket, handler })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Serves until `shutdown` resolves.
    pub async fn run<F>(self, shutdown: F) -> io::Result<()>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let local_addr = self.local_addr()?;
        let mut recv_buf = [0u8; MAX_UDP_MESSAGE_SIZE];

        info!(bind_address = %local_addr, "DNS server ready");

        loop {
            let received = tokio::select! {
                _ = &mut shutdown => {
                    info!(bind_address = %local_addr, "DNS server shutting down");
                    return Ok(());
                }
                result = self.socket.recv_from(&mut recv_buf) => result,
            };

            let (len, client) = match received {
                Ok(received) => received,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    error!(error = %e, "UDP recv error");
                    continue;
                }
            };

            if let Some(response) = self.handler.handle_raw_udp(&recv_buf[..len], client).await {
                if let Err(e) = self.socket.send_to(&response, client).await {
                    warn!(client = %client, error = %e, "Failed to send response");
                }
            }
        }
    }
}
