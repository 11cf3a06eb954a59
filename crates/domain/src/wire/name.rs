//! Domain names as label sequences (RFC 1035 §3.1, §4.1.4)
//!
//! Names are always written uncompressed. On read, compression pointers are
//! followed as a bounded redirect: each pointer must target an earlier offset
//! past the header and at most [`DecodeOptions::max_pointer_hops`] of them are followed per
//! name, so a hostile packet cannot make the decoder loop.

use super::header::HEADER_LEN;
use super::{DecodeOptions, WireReader};
use crate::errors::DomainError;
use bytes::BufMut;
use std::fmt;
use std::str::FromStr;

pub const MAX_LABEL_LEN: usize = 63;

const POINTER_TAG: u8 = 0xC0;
const POINTER_OFFSET_MASK: u8 = 0x3F;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label(Vec<u8>);

impl Label {
    pub fn new(content: impl Into<Vec<u8>>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.len() > MAX_LABEL_LEN {
            return Err(DomainError::InvalidLabel(format!(
                "label is {} bytes, limit is {}",
                content.len(),
                MAX_LABEL_LEN
            )));
        }
        Ok(Self(content))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

/// An ordered label sequence. The root name has no labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Name {
    labels: Vec<Label>,
}

impl Name {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_labels<I, S>(labels: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let labels = labels
            .into_iter()
            .map(|l| Label::new(l.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { labels })
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Encoded size including the terminating zero byte.
    pub fn wire_len(&self) -> usize {
        self.labels.iter().map(|l| l.len() + 1).sum::<usize>() + 1
    }

    pub fn encode<B: BufMut>(&self, buf: &mut B) {
        for label in &self.labels {
            // Label::new guarantees len <= 63
            buf.put_u8(label.len() as u8);
            buf.put_slice(label.as_bytes());
        }
        buf.put_u8(0);
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.wire_len());
        self.encode(&mut buf);
        buf
    }

    /// Reads a name at the cursor. The cursor ends up just past the name as it
    /// appears at this position: after the terminator, or after the first
    /// pointer when the name is compressed.
    pub fn decode(reader: &mut WireReader<'_>, options: &DecodeOptions) -> Result<Self, DomainError> {
        let packet = reader.packet();
        let mut pos = reader.position();
        let mut resume_at = None;
        let mut hops = 0u8;
        let mut labels = Vec::new();

        loop {
            let len = *packet
                .get(pos)
                .ok_or(DomainError::TruncatedName { offset: pos })?;

            match len & POINTER_TAG {
                POINTER_TAG => {
                    let low = *packet
                        .get(pos + 1)
                        .ok_or(DomainError::TruncatedName { offset: pos })?;
                    let target = (usize::from(len & POINTER_OFFSET_MASK) << 8) | usize::from(low);

                    if target >= packet.len() {
                        return Err(DomainError::TruncatedName { offset: pos });
                    }
                    if target < HEADER_LEN || target >= pos || hops >= options.max_pointer_hops {
                        return Err(DomainError::BadPointer {
                            offset: pos,
                            target,
                        });
                    }

                    hops += 1;
                    resume_at.get_or_insert(pos + 2);
                    pos = target;
                }
                0 if len == 0 => {
                    pos += 1;
                    break;
                }
                0 => {
                    let start = pos + 1;
                    let end = start + usize::from(len);
                    let content = packet
                        .get(start..end)
                        .ok_or(DomainError::TruncatedName { offset: pos })?;
                    labels.push(Label(content.to_vec()));
                    pos = end;
                }
                _ => {
                    return Err(DomainError::InvalidLabel(format!(
                        "reserved label type 0x{:02x} at offset {}",
                        len & POINTER_TAG,
                        pos
                    )));
                }
            }
        }

        reader.seek(resume_at.unwrap_or(pos));
        Ok(Self { labels })
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.labels.is_empty() {
            return f.write_str(".");
        }
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", label)?;
        }
        Ok(())
    }
}

impl FromStr for Name {
    type Err = DomainError;

    /// Parses dotted text. A single trailing dot is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.strip_suffix('.').unwrap_or(s);
        if trimmed.is_empty() {
            return Ok(Self::root());
        }
        if trimmed.split('.').any(str::is_empty) {
            return Err(DomainError::InvalidDomainName(format!(
                "empty label in '{}'",
                s
            )));
        }
        Self::from_labels(trimmed.split('.'))
    }
}
