use super::{DecodeOptions, Name, WireReader};
use crate::dns_record::{RecordClass, RecordType};
use crate::errors::DomainError;
use bytes::BufMut;
use std::net::Ipv4Addr;

/// RDLENGTH of a host-address record.
pub const A_RDATA_LEN: u16 = 4;

/// Answer-section resource record carrying an IPv4 address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: Name,
    pub record_type: RecordType,
    pub class: RecordClass,
    pub ttl: u32,
    pub address: Ipv4Addr,
}

impl Record {
    pub fn a(name: Name, ttl: u32, address: Ipv4Addr) -> Self {
        Self {
            name,
            record_type: RecordType::A,
            class: RecordClass::IN,
            ttl,
            address,
        }
    }

    pub fn rdlength(&self) -> u16 {
        A_RDATA_LEN
    }

    pub fn encode<B: BufMut>(&self, buf: &mut B) {
        self.name.encode(buf);
        buf.put_u16(self.record_type.to_u16());
        buf.put_u16(self.class.to_u16());
        buf.put_u32(self.ttl);
        buf.put_u16(self.rdlength());
        buf.put_slice(&self.address.octets());
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.name.wire_len() + 14);
        self.encode(&mut buf);
        buf
    }

    pub fn decode(reader: &mut WireReader<'_>, options: &DecodeOptions) -> Result<Self, DomainError> {
        let name = Name::decode(reader, options)?;
        let offset = reader.position();
        let truncated = || DomainError::TruncatedRecord { offset };

        let record_type = RecordType(reader.read_u16().ok_or_else(truncated)?);
        let class = RecordClass(reader.read_u16().ok_or_else(truncated)?);
        let ttl = reader.read_u32().ok_or_else(truncated)?;
        let rdlength = reader.read_u16().ok_or_else(truncated)?;

        if rdlength != A_RDATA_LEN {
            return Err(DomainError::UnsupportedRecordData {
                record_type,
                rdlength,
            });
        }
        let address = reader.read_u32().ok_or_else(truncated)?;

        Ok(Self {
            name,
            record_type,
            class,
            ttl,
            address: Ipv4Addr::from(address),
        })
    }
}
