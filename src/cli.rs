use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "muhkam",
    version,
    about = "Citation resolution tooling for answers grounded in Arabic legal codes"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan the documents directory and write the inventory manifest.
    Inventory(InventoryArgs),
    /// Report the inventory manifest and document set.
    Status(StatusArgs),
    /// Convert article numbers to legal ordinals and back.
    Ordinal(OrdinalArgs),
    /// Parse a streamed answer into text, citations and a footer.
    Render(RenderArgs),
    /// Resolve a citation and show the cited articles.
    View(ViewArgs),
    /// Print the answer-generation prompt.
    Prompt(PromptArgs),
    /// Probe which articles of each document can be extracted.
    Check(CheckArgs),
}

#[derive(Args, Debug, Clone)]
pub struct DocumentSetArgs {
    #[arg(long, default_value = ".cache/muhkam/documents")]
    pub docs_root: PathBuf,

    #[arg(long)]
    pub manifest_path: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct InventoryArgs {
    #[command(flatten)]
    pub documents: DocumentSetArgs,

    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

#[derive(Args, Debug, Clone)]
pub struct StatusArgs {
    #[command(flatten)]
    pub documents: DocumentSetArgs,
}

#[derive(Args, Debug, Clone)]
pub struct OrdinalArgs {
    #[arg(long = "number", value_parser = clap::value_parser!(u32).range(1..))]
    pub numbers: Vec<u32>,

    #[arg(long = "word")]
    pub words: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Answer text to read; stdin when omitted. Each line is one stream chunk.
    #[arg(long)]
    pub input: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ViewArgs {
    #[command(flatten)]
    pub documents: DocumentSetArgs,

    #[arg(long)]
    pub doc_name: String,

    #[arg(long = "article", required = true, value_parser = clap::value_parser!(u32).range(1..))]
    pub articles: Vec<u32>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct PromptArgs {
    #[command(flatten)]
    pub documents: DocumentSetArgs,

    #[arg(long)]
    pub question: String,

    /// JSON array of `{"role": "user" | "model", "text": ...}` turns.
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// Restrict the prompt to these document ids.
    #[arg(long = "doc")]
    pub doc_ids: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub documents: DocumentSetArgs,

    #[arg(long, default_value_t = 300)]
    pub max_article: u32,

    #[arg(long)]
    pub report_path: Option<PathBuf>,
}
