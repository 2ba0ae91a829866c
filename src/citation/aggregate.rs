use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use super::Citation;

/// Footer entry: every citation of one document folded together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedCitation {
    pub doc_name: String,
    pub ids: Vec<usize>,
    pub article_numbers: Vec<u32>,
}

pub fn aggregate(citations: &[Citation]) -> Vec<AggregatedCitation> {
    let mut order = Vec::<(String, BTreeSet<usize>, BTreeSet<u32>)>::new();
    let mut index_by_doc = HashMap::<&str, usize>::new();

    for citation in citations {
        let index = *index_by_doc
            .entry(citation.doc_name.as_str())
            .or_insert_with(|| {
                order.push((citation.doc_name.clone(), BTreeSet::new(), BTreeSet::new()));
                order.len() - 1
            });

        let (_, ids, articles) = &mut order[index];
        ids.insert(citation.id);
        articles.extend(citation.article_numbers.iter().copied());
    }

    order
        .into_iter()
        .map(|(doc_name, ids, articles)| AggregatedCitation {
            doc_name,
            ids: ids.into_iter().collect(),
            article_numbers: articles.into_iter().collect(),
        })
        .collect()
}

/// Collapses an ascending list into runs: `[1, 2, 3, 5, 7, 8]` becomes
/// `"1-3، 5، 7-8"`.
pub fn format_ranges(numbers: &[u32]) -> String {
    let Some((&first, rest)) = numbers.split_first() else {
        return String::new();
    };

    let mut ranges = Vec::<String>::new();
    let mut start = first;
    let mut previous = first;

    for &number in rest {
        if previous.checked_add(1) == Some(number) {
            previous = number;
            continue;
        }
        ranges.push(format_run(start, previous));
        start = number;
        previous = number;
    }
    ranges.push(format_run(start, previous));

    ranges.join("، ")
}

fn format_run(start: u32, end: u32) -> String {
    if start == end {
        start.to_string()
    } else {
        format!("{start}-{end}")
    }
}
