use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use crate::model::{Document, DocumentEntry, DocumentSetManifest};
use crate::util::{now_utc_string, read_text, sha256_hex};

const MANIFEST_VERSION: u32 = 1;
const DOCUMENT_ID_HEX_CHARS: usize = 12;

pub const NO_DOCUMENTS_SELECTED_MESSAGE: &str = "الرجاء تحديد نظام واحد على الأقل للمتابعة.";

pub fn default_manifest_path(docs_root: &Path) -> PathBuf {
    docs_root.join("manifests").join("document_inventory.json")
}

pub fn build_manifest(docs_root: &Path) -> Result<DocumentSetManifest> {
    let paths = discover_text_files(docs_root)?;
    if paths.is_empty() {
        bail!("no .txt documents found in {}", docs_root.display());
    }

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let filename = file_name(&path)?;
        let text = read_text(&path)?;
        let sha256 = sha256_hex(text.as_bytes());

        documents.push(DocumentEntry {
            id: document_id(&sha256),
            name: document_name(&path)?,
            filename,
            char_count: text.chars().count(),
            sha256,
        });
    }

    Ok(DocumentSetManifest {
        manifest_version: MANIFEST_VERSION,
        generated_at: now_utc_string(),
        source_directory: docs_root.display().to_string(),
        document_count: documents.len(),
        documents,
    })
}

pub fn read_manifest(path: &Path) -> Result<DocumentSetManifest> {
    let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_slice(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

/// Loads the document set, in manifest order when an inventory manifest
/// exists and in file-name order otherwise.
pub fn load_documents(docs_root: &Path, manifest_path: Option<&Path>) -> Result<Vec<Document>> {
    let manifest_path = manifest_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_manifest_path(docs_root));

    let documents = if manifest_path.exists() {
        let manifest = read_manifest(&manifest_path)?;
        let mut documents = Vec::with_capacity(manifest.documents.len());
        for entry in manifest.documents {
            let path = docs_root.join(&entry.filename);
            let text = read_text(&path)?;
            if sha256_hex(text.as_bytes()) != entry.sha256 {
                warn!(
                    path = %path.display(),
                    doc_id = %entry.id,
                    "document changed since inventory; rerun inventory"
                );
            }
            documents.push(Document {
                id: entry.id,
                name: entry.name,
                text,
            });
        }
        documents
    } else {
        let mut documents = Vec::new();
        for path in discover_text_files(docs_root)? {
            let text = read_text(&path)?;
            documents.push(Document {
                id: document_id(&sha256_hex(text.as_bytes())),
                name: document_name(&path)?,
                text,
            });
        }
        documents
    };

    if documents.is_empty() {
        bail!("no documents available under {}", docs_root.display());
    }

    info!(
        documents = documents.len(),
        docs_root = %docs_root.display(),
        "loaded document set"
    );
    Ok(documents)
}

/// Narrows the set to the given ids; an empty id list keeps every document.
pub fn select_documents(documents: Vec<Document>, ids: &[String]) -> Result<Vec<Document>> {
    if ids.is_empty() {
        return Ok(documents);
    }

    for id in ids {
        if !documents.iter().any(|doc| &doc.id == id) {
            warn!(doc_id = %id, "selected document id is not in the document set");
        }
    }

    let selected = documents
        .into_iter()
        .filter(|doc| ids.contains(&doc.id))
        .collect::<Vec<Document>>();
    if selected.is_empty() {
        bail!(NO_DOCUMENTS_SELECTED_MESSAGE);
    }
    Ok(selected)
}

fn discover_text_files(docs_root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let entries =
        fs::read_dir(docs_root).with_context(|| format!("failed to read {}", docs_root.display()))?;

    for entry in entries {
        let entry =
            entry.with_context(|| format!("failed to read entry in {}", docs_root.display()))?;
        let path = entry.path();

        if !entry
            .file_type()
            .with_context(|| format!("failed to inspect file type: {}", path.display()))?
            .is_file()
        {
            continue;
        }

        let is_text = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("txt"))
            .unwrap_or(false);

        if is_text {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

fn file_name(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(ToOwned::to_owned)
        .with_context(|| format!("invalid UTF-8 filename: {}", path.display()))
}

fn document_name(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.replace('_', " ").trim().to_string())
        .with_context(|| format!("invalid UTF-8 filename: {}", path.display()))
}

fn document_id(sha256: &str) -> String {
    sha256.chars().take(DOCUMENT_ID_HEX_CHARS).collect()
}
