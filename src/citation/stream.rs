use tracing::debug;

use super::parser::{ParsedMessage, parse};
use super::{AggregatedCitation, Citation, aggregate};

/// Prefix the answer generator puts on its single terminal chunk when the
/// upstream call fails.
pub const STREAM_ERROR_PREFIX: &str = "حدث خطأ أثناء الاتصال بالمساعد الذكي:";

/// The answer being streamed for one message, together with its latest parse.
///
/// Every chunk triggers a re-parse of the whole text so far. Ids are assigned
/// by first occurrence, so citations already shown keep their numbers as the
/// text grows.
#[derive(Debug, Default)]
pub struct StreamingAnswer {
    text: String,
    parsed: ParsedMessage,
    failure: Option<String>,
}

impl StreamingAnswer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a chunk and returns the citations that were not present before
    /// it arrived.
    pub fn push_chunk(&mut self, chunk: &str) -> Vec<Citation> {
        if self.failure.is_some() {
            return Vec::new();
        }

        if self.text.is_empty() && chunk.trim_start().starts_with(STREAM_ERROR_PREFIX) {
            self.fail(chunk.trim());
            return Vec::new();
        }

        self.text.push_str(chunk);
        let known = self.parsed.citations.len();
        self.parsed = parse(&self.text);

        let fresh = self
            .parsed
            .citations
            .iter()
            .skip(known)
            .cloned()
            .collect::<Vec<Citation>>();
        if !fresh.is_empty() {
            debug!(
                new_citations = fresh.len(),
                total_citations = self.parsed.citations.len(),
                chars = self.text.chars().count(),
                "citations appeared in streamed answer"
            );
        }
        fresh
    }

    /// Records an upstream failure; the raw message is what gets shown.
    pub fn fail(&mut self, message: &str) {
        self.failure = Some(message.to_string());
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn parsed(&self) -> &ParsedMessage {
        &self.parsed
    }

    pub fn footer(&self) -> Vec<AggregatedCitation> {
        aggregate(&self.parsed.citations)
    }
}
