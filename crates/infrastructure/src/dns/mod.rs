pub mod handler;
pub mod server;
pub mod transport;

pub use handler::DnsServerHandler;
pub use server::UdpDnsServer;
pub use transport::UdpTransport;
