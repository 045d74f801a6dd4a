use std::path::PathBuf;

use clap::Parser;

use crate::config::PanelConfig;

#[derive(Parser)]
#[command(name = "ragpanel")]
#[command(version = "0.1.0")]
#[command(about = "A terminal front-end for a document question-answering RAG backend")]
pub struct Args {
    /// Base URL of the backend API (overrides the config file)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Path to a TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Ask a single question and exit
    #[arg(long)]
    pub ask: Option<String>,

    /// Upload the given files and exit
    #[arg(long, num_args = 1..)]
    pub upload: Vec<PathBuf>,

    /// List the indexed documents and exit
    #[arg(long)]
    pub docs: bool,
}

/// Merge the config file (if any) with CLI overrides. Flags win over file
/// values, which win over defaults.
pub fn resolve_config(args: &Args, file_config: Option<PanelConfig>) -> PanelConfig {
    let mut config = file_config.unwrap_or_default();
    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }
    config
}
