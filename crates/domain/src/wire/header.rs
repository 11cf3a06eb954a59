//! DNS message header (RFC 1035 §4.1.1)
//!
//! ```text
//!   0  1  2  3  4  5  6  7  8  9 10 11 12 13 14 15
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                      ID                       |
//! |QR|   Opcode  |AA|TC|RD|RA|   Z    |   RCODE   |
//! |                    QDCOUNT                    |
//! |                    ANCOUNT                    |
//! |                    NSCOUNT                    |
//! |                    ARCOUNT                    |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! ```
//!
//! `Header` is a `Copy` value; every mutator returns a new header.

use crate::errors::DomainError;
use bytes::BufMut;

pub const HEADER_LEN: usize = 12;

const QR_MASK: u16 = 0x8000;
const OPCODE_MASK: u16 = 0x7800;
const OPCODE_SHIFT: u16 = 11;
const AA_MASK: u16 = 0x0400;
const TC_MASK: u16 = 0x0200;
const RD_MASK: u16 = 0x0100;
const RA_MASK: u16 = 0x0080;
const RCODE_MASK: u16 = 0x000F;

pub const OPCODE_QUERY: u8 = 0;
pub const OPCODE_IQUERY: u8 = 1;

pub const RCODE_SERVER_FAILURE: u8 = 2;
pub const RCODE_NOT_IMPLEMENTED: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    pub flags: u16,
    pub qd_count: u16,
    pub an_count: u16,
    pub ns_count: u16,
    pub ar_count: u16,
}

impl Header {
    pub fn new(id: u16, flags: u16) -> Self {
        Self {
            id,
            flags,
            ..Self::default()
        }
    }

    fn with_flag(self, mask: u16, on: bool) -> Self {
        let flags = if on {
            self.flags | mask
        } else {
            self.flags & !mask
        };
        Self { flags, ..self }
    }

    pub fn is_response(&self) -> bool {
        self.flags & QR_MASK != 0
    }

    pub fn with_response(self, on: bool) -> Self {
        self.with_flag(QR_MASK, on)
    }

    pub fn opcode(&self) -> u8 {
        ((self.flags & OPCODE_MASK) >> OPCODE_SHIFT) as u8
    }

    /// Only the low 4 bits of `opcode` are used.
    pub fn with_opcode(self, opcode: u8) -> Self {
        let bits = (u16::from(opcode) << OPCODE_SHIFT) & OPCODE_MASK;
        Self {
            flags: (self.flags & !OPCODE_MASK) | bits,
            ..self
        }
    }

    pub fn is_authoritative(&self) -> bool {
        self.flags & AA_MASK != 0
    }

    pub fn with_authoritative(self, on: bool) -> Self {
        self.with_flag(AA_MASK, on)
    }

    pub fn is_truncated(&self) -> bool {
        self.flags & TC_MASK != 0
    }

    pub fn with_truncated(self, on: bool) -> Self {
        self.with_flag(TC_MASK, on)
    }

    pub fn recursion_desired(&self) -> bool {
        self.flags & RD_MASK != 0
    }

    pub fn with_recursion_desired(self, on: bool) -> Self {
        self.with_flag(RD_MASK, on)
    }

    pub fn recursion_available(&self) -> bool {
        self.flags & RA_MASK != 0
    }

    pub fn with_recursion_available(self, on: bool) -> Self {
        self.with_flag(RA_MASK, on)
    }

    pub fn rcode(&self) -> u8 {
        (self.flags & RCODE_MASK) as u8
    }

    /// Replaces the RCODE nibble. Previous RCODE bits never leak through.
    pub fn with_rcode(self, rcode: u8) -> Self {
        Self {
            flags: (self.flags & !RCODE_MASK) | (u16::from(rcode) & RCODE_MASK),
            ..self
        }
    }

    pub fn with_question_count(self, qd_count: u16) -> Self {
        Self { qd_count, ..self }
    }

    pub fn with_answer_count(self, an_count: u16) -> Self {
        Self { an_count, ..self }
    }

    /// Zeroes NSCOUNT and ARCOUNT.
    pub fn without_extra_sections(self) -> Self {
        Self {
            ns_count: 0,
            ar_count: 0,
            ..self
        }
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        let fields = [
            self.id,
            self.flags,
            self.qd_count,
            self.an_count,
            self.ns_count,
            self.ar_count,
        ];
        for (chunk, field) in out.chunks_exact_mut(2).zip(fields) {
            chunk.copy_from_slice(&field.to_be_bytes());
        }
        out
    }

    pub fn encode<B: BufMut>(&self, buf: &mut B) {
        buf.put_slice(&self.to_bytes());
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, DomainError> {
        if bytes.len() < HEADER_LEN {
            return Err(DomainError::MalformedPacket(format!(
                "header needs {} bytes, got {}",
                HEADER_LEN,
                bytes.len()
            )));
        }
        let field = |i: usize| u16::from_be_bytes([bytes[i], bytes[i + 1]]);
        Ok(Self {
            id: field(0),
            flags: field(2),
            qd_count: field(4),
            an_count: field(6),
            ns_count: field(8),
            ar_count: field(10),
        })
    }
}
