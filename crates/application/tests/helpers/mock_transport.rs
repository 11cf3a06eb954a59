#![allow(dead_code)]

use async_trait::async_trait;
use relay_dns_application::ports::UpstreamTransport;
use relay_dns_domain::{DomainError, Message, Record};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::Mutex;

/// Upstream stand-in that answers from a table keyed by question name and
/// records every query it receives.
pub struct MockUpstreamTransport {
    answers: Mutex<HashMap<String, Vec<Ipv4Addr>>>,
    failing: Mutex<Option<String>>,
    raw_reply: Mutex<Option<Vec<u8>>>,
    received: Mutex<Vec<Vec<u8>>>,
}

impl MockUpstreamTransport {
    pub fn new() -> Self {
        Self {
            answers: Mutex::new(HashMap::new()),
            failing: Mutex::new(None),
            raw_reply: Mutex::new(None),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn set_answers(&self, domain: &str, addresses: Vec<Ipv4Addr>) {
        self.answers
            .lock()
            .unwrap()
            .insert(domain.to_string(), addresses);
    }

    /// Queries for `domain` fail with a transport error.
    pub fn fail_for(&self, domain: &str) {
        *self.failing.lock().unwrap() = Some(domain.to_string());
    }

    /// Every query gets `bytes` back verbatim.
    pub fn reply_with_raw(&self, bytes: Vec<u8>) {
        *self.raw_reply.lock().unwrap() = Some(bytes);
    }

    pub fn received(&self) -> Vec<Message> {
        self.received
            .lock()
            .unwrap()
            .iter()
            .map(|bytes| Message::decode(bytes).unwrap())
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.received.lock().unwrap().len()
    }
}

#[async_trait]
impl UpstreamTransport for MockUpstreamTransport {
    async fn exchange(&self, query: &[u8]) -> Result<Vec<u8>, DomainError> {
        self.received.lock().unwrap().push(query.to_vec());

        if let Some(raw) = self.raw_reply.lock().unwrap().clone() {
            return Ok(raw);
        }

        let query = Message::decode(query)?;
        let domain = query.questions[0].name.to_string();

        if self.failing.lock().unwrap().as_deref() == Some(domain.as_str()) {
            return Err(DomainError::transport(self.server(), "connection refused"));
        }

        let addresses = self
            .answers
            .lock()
            .unwrap()
            .get(&domain)
            .cloned()
            .unwrap_or_default();
        let answers: Vec<Record> = addresses
            .into_iter()
            .map(|ip| Record::a(query.questions[0].name.clone(), 60, ip))
            .collect();

        let reply = Message {
            header: query
                .header
                .with_response(true)
                .with_recursion_available(true)
                .with_answer_count(answers.len() as u16),
            questions: query.questions,
            answers,
        };
        reply.encode()
    }

    fn server(&self) -> String {
        "mock-upstream:53".to_string()
    }
}
