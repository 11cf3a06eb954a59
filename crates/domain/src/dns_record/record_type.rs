use std::fmt;

/// Resource record TYPE / question QTYPE as carried on the wire.
///
/// Unknown codes are preserved so a question can be forwarded verbatim even
/// though only host-address records are decoded from answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordType(pub u16);

impl RecordType {
    pub const A: RecordType = RecordType(1);
    pub const NS: RecordType = RecordType(2);
    pub const CNAME: RecordType = RecordType(5);
    pub const SOA: RecordType = RecordType(6);
    pub const PTR: RecordType = RecordType(12);
    pub const MX: RecordType = RecordType(15);
    pub const TXT: RecordType = RecordType(16);
    pub const AAAA: RecordType = RecordType(28);
    pub const OPT: RecordType = RecordType(41);

    pub fn to_u16(self) -> u16 {
        self.0
    }

    pub fn as_str(&self) -> Option<&'static str> {
        match *self {
            RecordType::A => Some("A"),
            RecordType::NS => Some("NS"),
            RecordType::CNAME => Some("CNAME"),
            RecordType::SOA => Some("SOA"),
            RecordType::PTR => Some("PTR"),
            RecordType::MX => Some("MX"),
            RecordType::TXT => Some("TXT"),
            RecordType::AAAA => Some("AAAA"),
            RecordType::OPT => Some("OPT"),
            _ => None,
        }
    }
}

impl From<u16> for RecordType {
    fn from(code: u16) -> Self {
        RecordType(code)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(name) => f.write_str(name),
            // RFC 3597 generic notation
            None => write!(f, "TYPE{}", self.0),
        }
    }
}
