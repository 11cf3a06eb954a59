//! RFC 1035 wire format codec.
//!
//! Every decoded value copies its bytes out of the packet; nothing here keeps
//! a reference into a receive buffer past the decode call.

pub mod header;
pub mod message;
pub mod name;
pub mod question;
pub mod reader;
pub mod record;

pub use header::Header;
pub use message::{Message, MAX_UDP_MESSAGE_SIZE};
pub use name::{Label, Name, MAX_LABEL_LEN};
pub use question::Question;
pub use reader::WireReader;
pub use record::Record;

/// Knobs for the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Number of compression pointers a single name may follow.
    pub max_pointer_hops: u8,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_pointer_hops: 1,
        }
    }
}
