//! Citation resolution for assistant answers: parse the `(المصدر: …، المادة …)`
//! markers out of prose, fold them into a per-document footer, and turn a
//! clicked citation back into article text.

use serde::Serialize;

mod aggregate;
mod extract;
mod ordinal;
mod parser;
mod resolver;
mod stream;
#[cfg(test)]
mod tests;

pub use aggregate::{AggregatedCitation, aggregate, format_ranges};
pub use extract::{ArticleLookup, extract, lookup_articles};
pub use ordinal::{to_ordinal, word_to_number};
pub use parser::Fragment;
pub use stream::StreamingAnswer;

/// One distinct `(document, article set)` pair cited in a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Citation {
    pub id: usize,
    pub doc_name: String,
    pub article_numbers: Vec<u32>,
    pub original_match_text: String,
}
