use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::citation::{ArticleLookup, format_ranges, lookup_articles};
use crate::cli::ViewArgs;
use crate::store::load_documents;

pub fn run(args: ViewArgs) -> Result<()> {
    let documents = load_documents(
        &args.documents.docs_root,
        args.documents.manifest_path.as_deref(),
    )?;

    let lookup = lookup_articles(&documents, &args.doc_name, &args.articles);
    match &lookup {
        ArticleLookup::Extracted {
            missing_articles, ..
        } if !missing_articles.is_empty() => warn!(
            missing = %format_ranges(missing_articles),
            "some cited articles could not be extracted"
        ),
        ArticleLookup::NotExtracted { .. } => {
            warn!(doc_name = %lookup.doc_name(), "no cited article could be extracted")
        }
        ArticleLookup::DocumentNotFound { .. } => {
            warn!(doc_name = %args.doc_name, "cited document not found")
        }
        ArticleLookup::Extracted { .. } => {}
    }
    info!(status = lookup.status(), doc_name = %lookup.doc_name(), "citation resolved");

    let mut output = io::BufWriter::new(io::stdout().lock());
    if args.json {
        serde_json::to_writer_pretty(&mut output, &lookup)
            .context("failed to serialize view json output")?;
        writeln!(output)?;
    } else {
        write_text_response(&mut output, lookup)?;
    }
    output.flush()?;
    Ok(())
}

fn write_text_response(output: &mut impl Write, lookup: ArticleLookup) -> Result<()> {
    let missing = match &lookup {
        ArticleLookup::Extracted {
            missing_articles, ..
        } => missing_articles.clone(),
        _ => Vec::new(),
    };

    let payload = lookup.into_viewer_payload();
    writeln!(output, "{}", payload.doc_name)?;

    for (index, article) in payload.content.iter().enumerate() {
        if index > 0 {
            writeln!(output, "----")?;
        }
        writeln!(output, "{article}")?;
    }

    if !missing.is_empty() {
        writeln!(output, "----")?;
        writeln!(output, "(لم يُعثر على: {})", format_ranges(&missing))?;
    }

    Ok(())
}
