use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::citation::{
    AggregatedCitation, Citation, Fragment, StreamingAnswer, format_ranges,
};
use crate::cli::RenderArgs;

#[derive(Debug, Serialize)]
struct FooterEntry {
    doc_name: String,
    ids: Vec<usize>,
    article_numbers: Vec<u32>,
    article_ranges: String,
}

#[derive(Debug, Serialize)]
struct RenderResponse {
    failure: Option<String>,
    text: String,
    fragments: Vec<Fragment>,
    citations: Vec<Citation>,
    footer: Vec<FooterEntry>,
}

pub fn run(args: RenderArgs) -> Result<()> {
    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin().lock())),
    };

    let stream = stream_answer(reader)?;
    info!(
        chars = stream.text().chars().count(),
        citations = stream.parsed().citations.len(),
        failed = stream.failure().is_some(),
        "answer stream finished"
    );

    let mut output = io::BufWriter::new(io::stdout().lock());
    if args.json {
        serde_json::to_writer_pretty(&mut output, &build_response(&stream))
            .context("failed to serialize render json output")?;
        writeln!(output)?;
    } else {
        write_text_response(&mut output, &stream)?;
    }
    output.flush()?;
    Ok(())
}

/// Feeds the answer to a `StreamingAnswer` one line at a time, the way chunks
/// arrive from a piped generator.
fn stream_answer(mut reader: impl BufRead) -> Result<StreamingAnswer> {
    let mut stream = StreamingAnswer::new();
    let mut chunk = String::new();

    loop {
        chunk.clear();
        let count = reader
            .read_line(&mut chunk)
            .context("failed to read answer stream")?;
        if count == 0 {
            break;
        }

        for citation in stream.push_chunk(&chunk) {
            info!(
                id = citation.id,
                doc_name = %citation.doc_name,
                articles = %format_ranges(&citation.article_numbers),
                "citation"
            );
        }
        if stream.failure().is_some() {
            break;
        }
    }

    Ok(stream)
}

fn footer_entry(aggregated: AggregatedCitation) -> FooterEntry {
    FooterEntry {
        article_ranges: format_ranges(&aggregated.article_numbers),
        doc_name: aggregated.doc_name,
        ids: aggregated.ids,
        article_numbers: aggregated.article_numbers,
    }
}

fn build_response(stream: &StreamingAnswer) -> RenderResponse {
    let parsed = stream.parsed();
    RenderResponse {
        failure: stream.failure().map(ToOwned::to_owned),
        text: parsed.rendered_text(),
        fragments: parsed.fragments.clone(),
        citations: parsed.citations.clone(),
        footer: stream.footer().into_iter().map(footer_entry).collect(),
    }
}

fn write_text_response(output: &mut impl Write, stream: &StreamingAnswer) -> Result<()> {
    if let Some(failure) = stream.failure() {
        writeln!(output, "{failure}")?;
        return Ok(());
    }

    writeln!(output, "{}", stream.parsed().rendered_text().trim_end())?;

    let footer = stream.footer();
    if footer.is_empty() {
        return Ok(());
    }

    writeln!(output)?;
    for entry in footer.into_iter().map(footer_entry) {
        let ids = entry
            .ids
            .iter()
            .map(usize::to_string)
            .collect::<Vec<String>>()
            .join(", ");
        writeln!(
            output,
            "[{ids}] {}: المادة {}",
            entry.doc_name, entry.article_ranges
        )?;
    }

    Ok(())
}
