use super::{DecodeOptions, Name, WireReader};
use crate::dns_record::{RecordClass, RecordType};
use crate::errors::DomainError;
use bytes::BufMut;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: Name,
    pub qtype: RecordType,
    pub qclass: RecordClass,
}

impl Question {
    pub fn new(name: Name, qtype: RecordType, qclass: RecordClass) -> Self {
        Self {
            name,
            qtype,
            qclass,
        }
    }

    /// Host-address question in the internet class.
    pub fn a(name: Name) -> Self {
        Self::new(name, RecordType::A, RecordClass::IN)
    }

    pub fn encode<B: BufMut>(&self, buf: &mut B) {
        self.name.encode(buf);
        buf.put_u16(self.qtype.to_u16());
        buf.put_u16(self.qclass.to_u16());
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.name.wire_len() + 4);
        self.encode(&mut buf);
        buf
    }

    pub fn decode(reader: &mut WireReader<'_>, options: &DecodeOptions) -> Result<Self, DomainError> {
        let name = Name::decode(reader, options)?;
        let offset = reader.position();
        let truncated = || DomainError::TruncatedQuestion { offset };

        let qtype = reader.read_u16().ok_or_else(truncated)?;
        let qclass = reader.read_u16().ok_or_else(truncated)?;

        Ok(Self {
            name,
            qtype: qtype.into(),
            qclass: qclass.into(),
        })
    }
}
