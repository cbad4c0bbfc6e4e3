//! CLI definitions using clap.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Drydock - a container-backed orchestrator for native C/C++ builds
#[derive(Parser)]
#[command(name = "drydock")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set a build property (KEY for presence, KEY=VALUE for a value)
    #[arg(short = 'P', long = "property", value_name = "KEY[=VALUE]", global = true)]
    pub property: Vec<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the generated task plan with debug gating applied
    Tasks(TasksArgs),

    /// Show the assembled C and C++ compiler flag lists
    Flags(FlagsArgs),

    /// Generate the Dockerfile for a distribution build image
    Dockerfile(DockerfileArgs),

    /// Build the distribution build image
    Image(ImageArgs),

    /// Run the containerized build for a distribution
    Assemble(AssembleArgs),

    /// Copy unstripped executables next to their stripped variants
    CopyArtifacts(CopyArtifactsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct TasksArgs {
    /// Requested task names, fed to the debug gate
    pub tasks: Vec<String>,

    /// Emit the plan as JSON
    #[arg(long)]
    pub json: bool,

    /// Only show enabled tasks
    #[arg(long)]
    pub enabled_only: bool,
}

#[derive(Args)]
pub struct FlagsArgs {
    /// Show C flags only
    #[arg(long)]
    pub c: bool,

    /// Show C++ flags only
    #[arg(long)]
    pub cxx: bool,
}

#[derive(Args)]
pub struct DockerfileArgs {
    /// Distribution to generate for (centos, rhel)
    pub distro: String,

    /// Print to stdout instead of writing under build/
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Args)]
pub struct ImageArgs {
    /// Distribution to build the image for (centos, rhel)
    pub distro: String,
}

#[derive(Args)]
pub struct AssembleArgs {
    /// Distribution to assemble in (centos, rhel)
    pub distro: String,
}

#[derive(Args)]
pub struct CopyArtifactsArgs {}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
