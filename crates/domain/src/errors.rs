use crate::dns_record::RecordType;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed packet: {0}")]
    MalformedPacket(String),

    #[error("Truncated name at offset {offset}")]
    TruncatedName { offset: usize },

    #[error("Truncated question at offset {offset}")]
    TruncatedQuestion { offset: usize },

    #[error("Truncated record at offset {offset}")]
    TruncatedRecord { offset: usize },

    #[error("Invalid label: {0}")]
    InvalidLabel(String),

    #[error("Invalid compression pointer at offset {offset} (target {target})")]
    BadPointer { offset: usize, target: usize },

    #[error("Unsupported {record_type} record data ({rdlength} bytes)")]
    UnsupportedRecordData {
        record_type: RecordType,
        rdlength: u16,
    },

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Transport error with {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("Failed to encode message: {0}")]
    EncodeFailure(String),
}

impl DomainError {
    pub fn transport(server: impl ToString, reason: impl ToString) -> Self {
        Self::Transport {
            server: server.to_string(),
            reason: reason.to_string(),
        }
    }
}
