use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "impactmap", version, about = "Import graph and change impact analysis")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Repository root to analyze
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the likely entry points of the repository
    Keys,
    /// Show what is affected when the given files change
    Impact {
        /// Files to analyze; defaults to the key files
        files: Vec<String>,
    },
    /// Summarize the import graph, or show the edges of one file
    Graph {
        #[arg(long, value_name = "FILE")]
        file: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Markdown,
    Json,
}
