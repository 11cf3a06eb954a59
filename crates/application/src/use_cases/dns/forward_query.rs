use crate::ports::UpstreamTransport;
use relay_dns_domain::wire::header::{OPCODE_QUERY, RCODE_NOT_IMPLEMENTED};
use relay_dns_domain::{DecodeOptions, DomainError, Message, Question, Record};
use std::sync::Arc;
use tracing::debug;

/// Answers a request by forwarding each of its questions, one at a time, to
/// the upstream resolver and merging the replies.
///
/// Upstream resolvers are assumed to answer a single question per packet, so
/// a request with N questions costs N sequential round trips. The first
/// failure aborts the whole request; no partial response is produced.
pub struct ForwardQueryUseCase {
    transport: Arc<dyn UpstreamTransport>,
    decode_options: DecodeOptions,
}

impl ForwardQueryUseCase {
    pub fn new(transport: Arc<dyn UpstreamTransport>) -> Self {
        Self {
            transport,
            decode_options: DecodeOptions::default(),
        }
    }

    pub fn with_decode_options(mut self, decode_options: DecodeOptions) -> Self {
        self.decode_options = decode_options;
        self
    }

    pub async fn execute(&self, request: &Message) -> Result<Message, DomainError> {
        let opcode = request.header.opcode();
        if opcode != OPCODE_QUERY {
            debug!(id = request.header.id, opcode, "Unsupported opcode, not forwarding");
            return build_response(request, Vec::new());
        }

        let mut answers = Vec::new();
        for question in &request.questions {
            let reply = self.forward(build_sub_query(request, question)).await?;
            debug!(
                id = request.header.id,
                domain = %question.name,
                record_type = %question.qtype,
                answers = reply.answers.len(),
                "Upstream answered"
            );
            answers.extend(reply.answers);
        }

        build_response(request, answers)
    }

    async fn forward(&self, sub_query: Message) -> Result<Message, DomainError> {
        let query_bytes = sub_query.encode()?;
        let reply_bytes = self.transport.exchange(&query_bytes).await?;
        Message::decode_with(&reply_bytes, &self.decode_options)
    }
}

/// Single-question copy of `request` for one upstream round trip.
pub fn build_sub_query(request: &Message, question: &Question) -> Message {
    Message {
        header: request
            .header
            .with_question_count(1)
            .with_answer_count(0)
            .without_extra_sections(),
        questions: vec![question.clone()],
        answers: Vec::new(),
    }
}

/// Response to `request` carrying `answers` in the given order.
///
/// RCODE becomes NOTIMP whenever the request opcode is not a standard query.
pub fn build_response(request: &Message, answers: Vec<Record>) -> Result<Message, DomainError> {
    let an_count = u16::try_from(answers.len()).map_err(|_| {
        DomainError::EncodeFailure(format!("{} answers exceed ANCOUNT", answers.len()))
    })?;

    let mut header = request
        .header
        .with_response(true)
        .with_answer_count(an_count)
        .without_extra_sections();
    if header.opcode() != OPCODE_QUERY {
        header = header.with_rcode(RCODE_NOT_IMPLEMENTED);
    }

    Ok(Message {
        header,
        questions: request.questions.clone(),
        answers,
    })
}
