use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::Citation;
use super::ordinal::{digit_value, word_to_number};
use super::resolver::clean_doc_name;

/// Widest range a single `a-b` group may expand to; wider ranges keep only
/// their endpoints.
pub const MAX_RANGE_SPAN: u32 = 1000;

// Both captures may hold balanced parentheses, e.g. "نظام العمل (المعدل)" or
// "المادة (5)", but never an unbalanced one, so a marker cannot run into the
// next "(المصدر".
static MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\(\s*المصدر\s*:?\s*(?P<doc>(?:[^,،\-()]|\([^()]*\))+?)\s*[,،\-]\s*المادة\s*(?P<spec>(?:[^()]|\([^()]*\))+?)\s*\)",
    )
    .expect("valid citation marker regex")
});

static RANGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<start>[0-9٠-٩]+)\s*[-–]\s*(?P<end>[0-9٠-٩]+)").expect("valid range regex")
});

static DIGIT_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9٠-٩]+").expect("valid digit run regex"));

static BOLD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(?P<inner>.*?)\*\*").expect("valid bold regex"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fragment {
    Text { text: String },
    Bold { text: String },
    Citation { id: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedMessage {
    pub fragments: Vec<Fragment>,
    pub citations: Vec<Citation>,
}

impl ParsedMessage {
    #[cfg(test)]
    pub fn citation(&self, id: usize) -> Option<&Citation> {
        self.citations.iter().find(|citation| citation.id == id)
    }

    /// Plain-text rendering: citation markers become `[id]`, emphasis markers
    /// are dropped.
    pub fn rendered_text(&self) -> String {
        let mut rendered = String::new();
        for fragment in &self.fragments {
            match fragment {
                Fragment::Text { text } | Fragment::Bold { text } => rendered.push_str(text),
                Fragment::Citation { id } => {
                    rendered.push('[');
                    rendered.push_str(&id.to_string());
                    rendered.push(']');
                }
            }
        }
        rendered
    }
}

/// Splits an answer into display fragments and the distinct citations it makes.
///
/// Never fails: markers whose article list yields no number stay in the text
/// verbatim. Ids follow the first occurrence of each distinct
/// `(doc_name, article_numbers)` pair, so re-parsing a longer prefix of the
/// same answer keeps every earlier id.
pub fn parse(text: &str) -> ParsedMessage {
    let mut fragments = Vec::<Fragment>::new();
    let mut citations = Vec::<Citation>::new();
    let mut pending = String::new();
    let mut last_index = 0;

    for captures in MARKER_REGEX.captures_iter(text) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        pending.push_str(&text[last_index..whole.start()]);
        last_index = whole.end();

        let doc_name = captures
            .name("doc")
            .map(|value| clean_doc_name(value.as_str()))
            .unwrap_or_default();
        let article_numbers = captures
            .name("spec")
            .map(|value| parse_article_spec(value.as_str()))
            .unwrap_or_default();

        if doc_name.is_empty() || article_numbers.is_empty() {
            pending.push_str(whole.as_str());
            continue;
        }

        let id = match citations.iter().find(|citation| {
            citation.doc_name == doc_name && citation.article_numbers == article_numbers
        }) {
            Some(existing) => existing.id,
            None => {
                let id = citations.len() + 1;
                citations.push(Citation {
                    id,
                    doc_name,
                    article_numbers,
                    original_match_text: whole.as_str().to_string(),
                });
                id
            }
        };

        push_literal(&mut fragments, &pending);
        pending.clear();
        fragments.push(Fragment::Citation { id });
    }

    pending.push_str(&text[last_index..]);
    push_literal(&mut fragments, &pending);

    ParsedMessage {
        fragments,
        citations,
    }
}

/// Turns the article part of a marker ("1-5، 8", "الثالثة") into an ascending,
/// deduplicated list of positive article numbers.
pub fn parse_article_spec(spec: &str) -> Vec<u32> {
    let mut numbers = Vec::<u32>::new();

    for group in spec.split([',', '،']) {
        if let Some(range) = RANGE_REGEX.captures(group) {
            let start = range.name("start").and_then(|m| parse_digits(m.as_str()));
            let end = range.name("end").and_then(|m| parse_digits(m.as_str()));
            if let (Some(start), Some(end)) = (start, end) {
                let (min, max) = if start <= end {
                    (start, end)
                } else {
                    (end, start)
                };
                if max - min > MAX_RANGE_SPAN {
                    numbers.push(min);
                    numbers.push(max);
                } else {
                    numbers.extend(min..=max);
                }
                continue;
            }
        }

        let before = numbers.len();
        numbers.extend(
            DIGIT_RUN_REGEX
                .find_iter(group)
                .filter_map(|run| parse_digits(run.as_str())),
        );
        if numbers.len() == before {
            numbers.extend(
                group
                    .split(|ch: char| ch.is_whitespace() || matches!(ch, '-' | '–' | '.' | ':'))
                    .filter(|token| !token.is_empty())
                    .filter_map(number_from_word),
            );
        }
    }

    numbers.retain(|number| *number > 0);
    numbers.sort_unstable();
    numbers.dedup();
    numbers
}

fn number_from_word(token: &str) -> Option<u32> {
    word_to_number(token).or_else(|| {
        // "والثالثة" in "الثانية والثالثة"
        token.strip_prefix('و').and_then(word_to_number)
    })
}

fn parse_digits(run: &str) -> Option<u32> {
    run.chars().try_fold(0_u32, |acc, ch| {
        let digit = digit_value(ch)?;
        acc.checked_mul(10)?.checked_add(digit)
    })
}

fn push_literal(fragments: &mut Vec<Fragment>, literal: &str) {
    if literal.is_empty() {
        return;
    }

    let mut last_index = 0;
    for captures in BOLD_REGEX.captures_iter(literal) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        if whole.start() > last_index {
            fragments.push(Fragment::Text {
                text: literal[last_index..whole.start()].to_string(),
            });
        }
        fragments.push(Fragment::Bold {
            text: captures
                .name("inner")
                .map(|inner| inner.as_str().to_string())
                .unwrap_or_default(),
        });
        last_index = whole.end();
    }

    if last_index < literal.len() {
        fragments.push(Fragment::Text {
            text: literal[last_index..].to_string(),
        });
    }
}
