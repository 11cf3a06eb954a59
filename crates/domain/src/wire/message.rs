use super::header::HEADER_LEN;
use super::{DecodeOptions, Header, Question, Record, WireReader};
use crate::errors::DomainError;

/// Historical DNS-over-UDP payload ceiling (RFC 1035 §4.2.1).
pub const MAX_UDP_MESSAGE_SIZE: usize = 512;

// Root name + fixed fields
const MIN_QUESTION_LEN: usize = 1 + 4;
const MIN_RECORD_LEN: usize = 1 + 14;

/// Header, question section and answer section.
///
/// Authority and additional sections are neither decoded nor written; the
/// header's NSCOUNT/ARCOUNT are carried as-is, so callers building outgoing
/// messages should clear them (see [`Header::without_extra_sections`]).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<Record>,
}

impl Message {
    /// Writes the message without touching the header counts.
    ///
    /// Fails with [`DomainError::EncodeFailure`] if the result would not fit in
    /// a single UDP datagram.
    pub fn encode(&self) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(MAX_UDP_MESSAGE_SIZE);
        self.header.encode(&mut buf);
        for question in &self.questions {
            question.encode(&mut buf);
        }
        for answer in &self.answers {
            answer.encode(&mut buf);
        }

        if buf.len() > MAX_UDP_MESSAGE_SIZE {
            return Err(DomainError::EncodeFailure(format!(
                "message is {} bytes, limit is {}",
                buf.len(),
                MAX_UDP_MESSAGE_SIZE
            )));
        }
        Ok(buf)
    }

    pub fn decode(packet: &[u8]) -> Result<Self, DomainError> {
        Self::decode_with(packet, &DecodeOptions::default())
    }

    /// Decodes the header, then exactly QDCOUNT questions and ANCOUNT answers.
    pub fn decode_with(packet: &[u8], options: &DecodeOptions) -> Result<Self, DomainError> {
        let (header, mut reader, questions) = Self::decode_head(packet, options)?;

        let an_count = usize::from(header.an_count);
        let mut answers = Vec::with_capacity(an_count.min(reader.remaining() / MIN_RECORD_LEN));
        for _ in 0..an_count {
            answers.push(Record::decode(&mut reader, options)?);
        }

        Ok(Self {
            header,
            questions,
            answers,
        })
    }

    /// Decodes an inbound request: the header and QDCOUNT questions only.
    ///
    /// Whatever follows the question section is ignored, so a query carrying a
    /// stray ANCOUNT still decodes. The header keeps its counts as received.
    pub fn decode_query(packet: &[u8], options: &DecodeOptions) -> Result<Self, DomainError> {
        let (header, _, questions) = Self::decode_head(packet, options)?;
        Ok(Self {
            header,
            questions,
            answers: Vec::new(),
        })
    }

    fn decode_head<'a>(
        packet: &'a [u8],
        options: &DecodeOptions,
    ) -> Result<(Header, WireReader<'a>, Vec<Question>), DomainError> {
        let header = Header::decode(packet)?;
        let mut reader = WireReader::at(packet, HEADER_LEN);

        let qd_count = usize::from(header.qd_count);
        let mut questions = Vec::with_capacity(qd_count.min(reader.remaining() / MIN_QUESTION_LEN));
        for _ in 0..qd_count {
            questions.push(Question::decode(&mut reader, options)?);
        }

        Ok((header, reader, questions))
    }
}
