use anyhow::Result;
use tracing::{info, warn};

use crate::citation::{extract, format_ranges};
use crate::cli::CheckArgs;
use crate::model::{ArticleCoverage, CoverageReport, Document};
use crate::store::load_documents;
use crate::util::{now_utc_string, write_json_pretty};

pub fn run(args: CheckArgs) -> Result<()> {
    let docs_root = &args.documents.docs_root;
    let documents = load_documents(docs_root, args.documents.manifest_path.as_deref())?;

    let coverage = documents
        .iter()
        .map(|doc| article_coverage(doc, args.max_article))
        .collect::<Vec<ArticleCoverage>>();

    for entry in &coverage {
        if entry.found_count == 0 {
            warn!(
                doc_id = %entry.doc_id,
                name = %entry.doc_name,
                "no article headings recognized"
            );
            continue;
        }
        info!(
            doc_id = %entry.doc_id,
            name = %entry.doc_name,
            found = entry.found_count,
            found_ranges = %entry.found_ranges,
            missing_ranges = %entry.missing_ranges,
            "article coverage"
        );
    }

    if let Some(report_path) = &args.report_path {
        let report = CoverageReport {
            generated_at: now_utc_string(),
            source_directory: docs_root.display().to_string(),
            documents: coverage,
        };
        write_json_pretty(report_path, &report)?;
        info!(path = %report_path.display(), "wrote coverage report");
    }

    Ok(())
}

/// Probes articles `1..=max_article`. Missing numbers are only reported up to
/// the highest article found, since codes rarely run to the probe limit.
fn article_coverage(document: &Document, max_article: u32) -> ArticleCoverage {
    let found = (1..=max_article)
        .filter(|number| extract(&document.text, *number).is_some())
        .collect::<Vec<u32>>();
    let highest = found.last().copied().unwrap_or(0);
    let missing = (1..=highest)
        .filter(|number| found.binary_search(number).is_err())
        .collect::<Vec<u32>>();

    ArticleCoverage {
        doc_id: document.id.clone(),
        doc_name: document.name.clone(),
        probed_up_to: max_article,
        found_count: found.len(),
        found_ranges: format_ranges(&found),
        missing_ranges: format_ranges(&missing),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coverage_reports_gaps_below_highest_article() {
        let document = Document {
            id: "labor".to_string(),
            name: "نظام العمل".to_string(),
            text: "المادة الأولى: أ\nالمادة 2: ب\nالمادة (4): د\nالمادة 5: هـ\n".to_string(),
        };

        let coverage = article_coverage(&document, 20);
        assert_eq!(coverage.found_count, 4);
        assert_eq!(coverage.found_ranges, "1-2، 4-5");
        assert_eq!(coverage.missing_ranges, "3");
    }
}
