// src/bin/impactmap.rs
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use impactmap_core::cli::{self, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{} {e:#}", "error:".red().bold());
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "impactmap_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Keys => cli::handle_keys(&cli.root, cli.format),
        Commands::Impact { files } => cli::handle_impact(&cli.root, files, cli.format),
        Commands::Graph { file } => cli::handle_graph(&cli.root, file.as_deref(), cli.format),
    }
}
