use crate::model::Document;

/// Characters of the document text searched when the catalog name misses.
pub const PREAMBLE_CHARS: usize = 1000;

/// Drops markdown emphasis (`*`, `_`) the model sometimes wraps names in.
pub fn clean_doc_name(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !matches!(ch, '*' | '_'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Finds the document a cited name refers to.
///
/// Catalog names are tried first, in list order, accepting equality or
/// containment either way, so a truncated or expanded name still lands. Only
/// then is each document's preamble searched. The first document that matches
/// wins; names that prefix each other therefore resolve to whichever is listed
/// first.
pub fn resolve<'a>(docs: &'a [Document], raw_name: &str) -> Option<&'a Document> {
    let clean_name = clean_doc_name(raw_name);
    if clean_name.is_empty() {
        return None;
    }

    docs.iter()
        .find(|doc| {
            let name = doc.name.trim();
            !name.is_empty()
                && (name == clean_name || clean_name.contains(name) || name.contains(&clean_name))
        })
        .or_else(|| {
            docs.iter()
                .find(|doc| preamble(&doc.text).contains(&clean_name))
        })
}

fn preamble(text: &str) -> &str {
    match text.char_indices().nth(PREAMBLE_CHARS) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
