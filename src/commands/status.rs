use anyhow::Result;
use tracing::{info, warn};

use crate::cli::StatusArgs;
use crate::store::{default_manifest_path, load_documents, read_manifest};
use crate::util::sha256_hex;

pub fn run(args: StatusArgs) -> Result<()> {
    let docs_root = &args.documents.docs_root;
    let manifest_path = args
        .documents
        .manifest_path
        .clone()
        .unwrap_or_else(|| default_manifest_path(docs_root));

    info!(docs_root = %docs_root.display(), "status requested");

    if !docs_root.exists() {
        warn!(path = %docs_root.display(), "documents directory missing");
        return Ok(());
    }

    if !manifest_path.exists() {
        warn!(path = %manifest_path.display(), "inventory manifest missing");
    } else {
        let manifest = read_manifest(&manifest_path)?;
        info!(
            generated_at = %manifest.generated_at,
            document_count = manifest.document_count,
            "loaded inventory manifest"
        );

        let mut stale = 0_usize;
        for entry in &manifest.documents {
            let path = docs_root.join(&entry.filename);
            let current = std::fs::read(&path).ok().map(|bytes| sha256_hex(&bytes));
            match current {
                Some(hash) if hash == entry.sha256 => {}
                Some(_) => {
                    stale += 1;
                    warn!(path = %path.display(), doc_id = %entry.id, "document changed since inventory");
                }
                None => {
                    stale += 1;
                    warn!(path = %path.display(), doc_id = %entry.id, "inventoried document missing");
                }
            }
        }
        info!(stale_documents = stale, "inventory freshness checked");
    }

    match load_documents(docs_root, Some(&manifest_path)) {
        Ok(documents) => {
            let total_chars = documents
                .iter()
                .map(|doc| doc.text.chars().count())
                .sum::<usize>();
            info!(
                documents = documents.len(),
                total_chars,
                "document set status"
            );
        }
        Err(err) => warn!(error = %err, "document set could not be loaded"),
    }

    Ok(())
}
