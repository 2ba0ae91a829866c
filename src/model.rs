use serde::{Deserialize, Serialize};

/// A legal code as plain extracted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub name: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentEntry {
    pub id: String,
    pub name: String,
    pub filename: String,
    pub sha256: String,
    pub char_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSetManifest {
    pub manifest_version: u32,
    pub generated_at: String,
    pub source_directory: String,
    pub document_count: usize,
    pub documents: Vec<DocumentEntry>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    /// Speaker label used when the history is replayed in a prompt.
    pub fn prompt_label(self) -> &'static str {
        match self {
            Self::User => "المستخدم",
            Self::Model => "المساعد",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryTurn {
    pub role: Role,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArticleCoverage {
    pub doc_id: String,
    pub doc_name: String,
    pub probed_up_to: u32,
    pub found_count: usize,
    pub found_ranges: String,
    pub missing_ranges: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoverageReport {
    pub generated_at: String,
    pub source_directory: String,
    pub documents: Vec<ArticleCoverage>,
}
