use relay_dns_application::use_cases::ForwardQueryUseCase;
use relay_dns_domain::{DecodeOptions, Message};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Turns one inbound datagram into at most one outbound datagram.
///
/// Any decode, forwarding or encode failure drops the request: no response is
/// produced and the failure is logged.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<ForwardQueryUseCase>,
    decode_options: DecodeOptions,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<ForwardQueryUseCase>) -> Self {
        Self {
            use_case,
            decode_options: DecodeOptions::default(),
        }
    }

    pub fn with_decode_options(mut self, decode_options: DecodeOptions) -> Self {
        self.decode_options = decode_options;
        self
    }

    pub async fn handle_raw_udp(&self, packet: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        let request = match Message::decode_query(packet, &self.decode_options) {
            Ok(request) => request,
            Err(e) => {
                warn!(client = %client, bytes = packet.len(), error = %e, "Dropping undecodable packet");
                return None;
            }
        };

        if let Some(question) = request.questions.first() {
            info!(
                id = request.header.id,
                domain = %question.name,
                record_type = %question.qtype,
                class = %question.qclass,
                questions = request.questions.len(),
                client = %client,
                "DNS query received"
            );
        }

        let response = match self.use_case.execute(&request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(id = request.header.id, client = %client, error = %e, "Query forwarding failed, dropping request");
                return None;
            }
        };

        match response.encode() {
            Ok(bytes) => {
                debug!(
                    id = response.header.id,
                    answers = response.answers.len(),
                    rcode = response.header.rcode(),
                    "Response encoded"
                );
                Some(bytes)
            }
            Err(e) => {
                error!(id = response.header.id, error = %e, "Failed to encode response");
                None
            }
        }
    }
}
