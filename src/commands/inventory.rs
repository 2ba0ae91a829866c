use anyhow::Result;
use tracing::info;

use crate::cli::InventoryArgs;
use crate::store::{build_manifest, default_manifest_path};
use crate::util::write_json_pretty;

pub fn run(args: InventoryArgs) -> Result<()> {
    let docs_root = &args.documents.docs_root;
    let manifest = build_manifest(docs_root)?;

    for entry in &manifest.documents {
        info!(
            doc_id = %entry.id,
            name = %entry.name,
            chars = entry.char_count,
            "document found"
        );
    }

    if args.dry_run {
        info!(
            document_count = manifest.document_count,
            source = %manifest.source_directory,
            "inventory dry-run complete"
        );
        return Ok(());
    }

    let manifest_path = args
        .documents
        .manifest_path
        .unwrap_or_else(|| default_manifest_path(docs_root));

    write_json_pretty(&manifest_path, &manifest)?;
    info!(path = %manifest_path.display(), "wrote inventory manifest");
    info!(document_count = manifest.document_count, "inventory completed");

    Ok(())
}
