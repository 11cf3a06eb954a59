//! Relay DNS Domain Layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod upstream_addr;
pub mod wire;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{RecordClass, RecordType};
pub use errors::DomainError;
pub use upstream_addr::UpstreamAddr;
pub use wire::{DecodeOptions, Header, Label, Message, Name, Question, Record};
