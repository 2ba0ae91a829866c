use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use super::ordinal::{is_tens_word, to_arabic_indic_digits, to_ordinal};
use super::resolver::resolve;
use crate::model::Document;

pub const DOCUMENT_NOT_FOUND_MESSAGE: &str = "عذراً، النظام المطلوب غير موجود في القائمة.";

static NEXT_ARTICLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*المادة").expect("valid next article regex"));

/// Finds the text of one article in a raw document.
///
/// The heading is looked up as the Arabic ordinal first, then as digits, then
/// as digits in parentheses, and last as Arabic-Indic digits. The article runs
/// until the next line that starts with "المادة" or the end of the text.
pub fn extract(doc_text: &str, article_number: u32) -> Option<String> {
    heading_patterns(article_number)
        .iter()
        .enumerate()
        .find_map(|(index, pattern)| extract_with_heading(doc_text, pattern, index == 0))
}

fn heading_patterns(article_number: u32) -> Vec<String> {
    let ordinal = to_ordinal(article_number)
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<String>>()
        .join(r"\s+");
    let digits = article_number.to_string();
    let indic = to_arabic_indic_digits(article_number);

    vec![
        format!(r"المادة\s+{ordinal}[:\s]"),
        format!(r"المادة\s+{digits}[:\s]"),
        format!(r"المادة\s+\(?{digits}\)?[:\s]"),
        format!(r"المادة\s+\(?{indic}\)?[:\s]"),
    ]
}

fn extract_with_heading(doc_text: &str, heading_pattern: &str, ordinal: bool) -> Option<String> {
    let regex = Regex::new(&format!(r"(?m)^[^\S\n]*(?P<heading>{heading_pattern})")).ok()?;

    let heading = regex
        .captures_iter(doc_text)
        .filter_map(|captures| captures.name("heading"))
        .find(|heading| {
            !ordinal || !continues_ordinal(heading.as_str(), &doc_text[heading.end()..])
        })?;

    // The heading's trailing `\s` may already be the newline before the next
    // article, so the search for the end starts inside the heading.
    let body_start = heading.end();
    let body_end = NEXT_ARTICLE_REGEX
        .find_at(doc_text, heading.start())
        .map(|next| next.start().max(body_start))
        .unwrap_or(doc_text.len());

    Some(format!(
        "{}\n{}",
        heading.as_str().trim(),
        doc_text[body_start..body_end].trim()
    ))
}

/// True when an ordinal heading is only the start of a longer one, e.g.
/// "الثانية" inside "الثانية عشرة" or "الأولى" inside "الأولى بعد المائة".
fn continues_ordinal(heading: &str, rest: &str) -> bool {
    if heading.ends_with([':', '\n', '\r']) {
        return false;
    }

    let line = rest.split('\n').next().unwrap_or_default();
    let Some(word) = line
        .split_whitespace()
        .next()
        .map(|word| word.trim_end_matches(|ch: char| !ch.is_alphabetic()))
    else {
        return false;
    };

    matches!(word, "عشرة" | "عشر" | "بعد")
        || word.strip_prefix('و').is_some_and(is_tens_word)
}

/// Outcome of opening a citation: which document, and which articles could be
/// shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ArticleLookup {
    /// At least one requested article was found. `missing_articles` lists the
    /// rest, if any.
    Extracted {
        doc_name: String,
        content: Vec<String>,
        missing_articles: Vec<u32>,
    },
    /// The document resolved but none of the articles could be located.
    NotExtracted {
        doc_name: String,
        requested_articles: Vec<u32>,
        message: String,
    },
    DocumentNotFound { doc_name: String, message: String },
}

/// What the source viewer displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewerPayload {
    pub doc_name: String,
    pub content: Vec<String>,
}

impl ArticleLookup {
    pub fn doc_name(&self) -> &str {
        match self {
            Self::Extracted { doc_name, .. }
            | Self::NotExtracted { doc_name, .. }
            | Self::DocumentNotFound { doc_name, .. } => doc_name,
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            Self::Extracted {
                missing_articles, ..
            } if missing_articles.is_empty() => "extracted",
            Self::Extracted { .. } => "partial",
            Self::NotExtracted { .. } => "not_extracted",
            Self::DocumentNotFound { .. } => "document_not_found",
        }
    }

    pub fn into_viewer_payload(self) -> ViewerPayload {
        match self {
            Self::Extracted {
                doc_name, content, ..
            } => ViewerPayload { doc_name, content },
            Self::NotExtracted {
                doc_name, message, ..
            }
            | Self::DocumentNotFound { doc_name, message } => ViewerPayload {
                doc_name,
                content: vec![message],
            },
        }
    }
}

pub fn not_extracted_message(article_numbers: &[u32]) -> String {
    let listed = article_numbers
        .iter()
        .map(u32::to_string)
        .collect::<Vec<String>>()
        .join("، ");
    format!("عذراً، لم نتمكن من استخراج نص المواد ({listed}) تلقائياً. قد يكون التنسيق مختلفاً.")
}

/// Resolves a cited document and pulls each requested article, in the order
/// given.
pub fn lookup_articles(docs: &[Document], doc_name: &str, article_numbers: &[u32]) -> ArticleLookup {
    let Some(document) = resolve(docs, doc_name) else {
        debug!(doc_name, "cited document did not resolve");
        return ArticleLookup::DocumentNotFound {
            doc_name: doc_name.to_string(),
            message: DOCUMENT_NOT_FOUND_MESSAGE.to_string(),
        };
    };

    let mut content = Vec::<String>::new();
    let mut missing_articles = Vec::<u32>::new();
    for &number in article_numbers {
        match extract(&document.text, number) {
            Some(text) => content.push(text),
            None => missing_articles.push(number),
        }
    }

    debug!(
        doc_id = %document.id,
        requested = article_numbers.len(),
        extracted = content.len(),
        "article lookup finished"
    );

    if content.is_empty() {
        return ArticleLookup::NotExtracted {
            doc_name: document.name.clone(),
            requested_articles: article_numbers.to_vec(),
            message: not_extracted_message(article_numbers),
        };
    }

    ArticleLookup::Extracted {
        doc_name: document.name.clone(),
        content,
        missing_articles,
    }
}
