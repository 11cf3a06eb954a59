#![allow(dead_code)]

/// Hand-assembles raw packets so tests do not depend on the encoder under test.
pub struct PacketBuilder {
    buf: Vec<u8>,
}

impl PacketBuilder {
    pub fn new(id: u16, flags: u16) -> Self {
        let mut buf = Vec::with_capacity(512);
        buf.extend_from_slice(&id.to_be_bytes());
        buf.extend_from_slice(&flags.to_be_bytes());
        buf.extend_from_slice(&[0; 8]);
        Self { buf }
    }

    pub fn qd_count(mut self, count: u16) -> Self {
        self.buf[4..6].copy_from_slice(&count.to_be_bytes());
        self
    }

    pub fn an_count(mut self, count: u16) -> Self {
        self.buf[6..8].copy_from_slice(&count.to_be_bytes());
        self
    }

    pub fn offset(&self) -> usize {
        self.buf.len()
    }

    pub fn name(mut self, domain: &str) -> Self {
        for label in domain.split('.').filter(|l| !l.is_empty()) {
            self.buf.push(label.len() as u8);
            self.buf.extend_from_slice(label.as_bytes());
        }
        self.buf.push(0x00);
        self
    }

    pub fn label(mut self, label: &str) -> Self {
        self.buf.push(label.len() as u8);
        self.buf.extend_from_slice(label.as_bytes());
        self
    }

    pub fn pointer(mut self, offset: u16) -> Self {
        self.buf.extend_from_slice(&(0xC000 | offset).to_be_bytes());
        self
    }

    pub fn type_class(mut self, qtype: u16, qclass: u16) -> Self {
        self.buf.extend_from_slice(&qtype.to_be_bytes());
        self.buf.extend_from_slice(&qclass.to_be_bytes());
        self
    }

    pub fn a_rdata(mut self, ttl: u32, address: [u8; 4]) -> Self {
        self.buf.extend_from_slice(&ttl.to_be_bytes());
        self.buf.extend_from_slice(&4u16.to_be_bytes());
        self.buf.extend_from_slice(&address);
        self
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.buf
    }
}
