use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::PromptArgs;
use crate::model::HistoryTurn;
use crate::prompt::{build_answer_prompt, build_documents_text};
use crate::store::{load_documents, select_documents};

pub fn run(args: PromptArgs) -> Result<()> {
    let documents = load_documents(
        &args.documents.docs_root,
        args.documents.manifest_path.as_deref(),
    )?;
    let documents = select_documents(documents, &args.doc_ids)?;

    let history = match &args.history {
        Some(path) => {
            let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_slice::<Vec<HistoryTurn>>(&raw)
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
        None => Vec::new(),
    };

    let documents_text = build_documents_text(&documents);
    let prompt = build_answer_prompt(&documents_text, &args.question, &history);
    info!(
        documents = documents.len(),
        history_turns = history.len(),
        prompt_chars = prompt.chars().count(),
        "built answer prompt"
    );

    let mut output = io::BufWriter::new(io::stdout().lock());
    output.write_all(prompt.as_bytes())?;
    output.flush()?;
    Ok(())
}
