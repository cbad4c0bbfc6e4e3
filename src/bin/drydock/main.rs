//! Drydock CLI - a container-backed orchestrator for native builds

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("drydock=debug")
    } else {
        EnvFilter::new("drydock=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    // Execute command
    match cli.command {
        Commands::Tasks(args) => commands::tasks::execute(&cli.property, args),
        Commands::Flags(args) => commands::flags::execute(&cli.property, args),
        Commands::Dockerfile(args) => commands::dockerfile::execute(&cli.property, args),
        Commands::Image(args) => commands::image::execute(&cli.property, args),
        Commands::Assemble(args) => commands::assemble::execute(&cli.property, args),
        Commands::CopyArtifacts(args) => commands::copy_artifacts::execute(&cli.property, args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
