use std::fmt;

/// Resource record CLASS / question QCLASS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordClass(pub u16);

impl RecordClass {
    pub const IN: RecordClass = RecordClass(1);
    pub const CH: RecordClass = RecordClass(3);
    pub const HS: RecordClass = RecordClass(4);
    pub const ANY: RecordClass = RecordClass(255);

    pub fn to_u16(self) -> u16 {
        self.0
    }
}

impl From<u16> for RecordClass {
    fn from(code: u16) -> Self {
        RecordClass(code)
    }
}

impl fmt::Display for RecordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RecordClass::IN => f.write_str("IN"),
            RecordClass::CH => f.write_str("CH"),
            RecordClass::HS => f.write_str("HS"),
            RecordClass::ANY => f.write_str("ANY"),
            RecordClass(code) => write!(f, "CLASS{}", code),
        }
    }
}
