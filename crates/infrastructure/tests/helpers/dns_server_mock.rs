#![allow(dead_code)]
use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

#[derive(Default)]
struct MockState {
    answers: HashMap<String, Vec<Ipv4Addr>>,
    wrong_id: bool,
    silent: bool,
}

/// Upstream resolver stand-in on 127.0.0.1.
///
/// Answers every single-question query with the A records configured for its
/// name, using a compression pointer to the question (like real resolvers do).
pub struct MockDnsServer {
    addr: SocketAddr,
    state: Arc<Mutex<MockState>>,
    queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start() -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;

        let state = Arc::new(Mutex::new(MockState::default()));
        let queries = Arc::new(AtomicUsize::new(0));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let task_state = Arc::clone(&state);
        let task_queries = Arc::clone(&queries);
        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            task_queries.fetch_add(1, Ordering::SeqCst);
                            let response = {
                                let state = task_state.lock().unwrap();
                                if state.silent {
                                    continue;
                                }
                                Self::build_mock_response(&buf[..len], &state)
                            };
                            let _ = socket.send_to(&response, peer).await;
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            state,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn set_answers(&self, domain: &str, addresses: Vec<Ipv4Addr>) {
        self.state
            .lock()
            .unwrap()
            .answers
            .insert(domain.to_string(), addresses);
    }

    /// Replies carry a transaction ID that does not match the query.
    pub fn reply_with_wrong_id(&self) {
        self.state.lock().unwrap().wrong_id = true;
    }

    /// Queries are received and counted but never answered.
    pub fn go_silent(&self) {
        self.state.lock().unwrap().silent = true;
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn question_name(query: &[u8]) -> (String, usize) {
        let mut labels = Vec::new();
        let mut pos = 12;
        while let Some(&len) = query.get(pos) {
            if len == 0 {
                pos += 1;
                break;
            }
            let start = pos + 1;
            let end = start + len as usize;
            labels.push(String::from_utf8_lossy(&query[start..end]).to_string());
            pos = end;
        }
        (labels.join("."), pos + 4)
    }

    fn build_mock_response(query: &[u8], state: &MockState) -> Vec<u8> {
        if query.len() < 12 {
            return vec![];
        }

        let (domain, question_end) = Self::question_name(query);
        let addresses = state.answers.get(&domain).cloned().unwrap_or_default();

        let mut response = Vec::with_capacity(512);

        if state.wrong_id {
            response.extend_from_slice(&[query[0] ^ 0xFF, query[1]]);
        } else {
            response.extend_from_slice(&query[0..2]);
        }

        response.push(0x81);
        response.push(0x80);

        response.extend_from_slice(&[0x00, 0x01]);
        response.extend_from_slice(&(addresses.len() as u16).to_be_bytes());
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(&[0x00, 0x00]);

        response.extend_from_slice(&query[12..question_end]);

        for address in addresses {
            response.extend_from_slice(&[
                0xc0, 0x0c,
                0x00, 0x01,
                0x00, 0x01,
                0x00, 0x00, 0x00, 0x3c,
                0x00, 0x04,
            ]);
            response.extend_from_slice(&address.octets());
        }

        response
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
