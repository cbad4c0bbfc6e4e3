//! Container image build and containerized build invocation.
//!
//! Both operations shell out to the `docker` CLI with inherited
//! stdio, so the container runtime's own progress output reaches the
//! user unchanged. There is no retry policy: a non-zero exit fails
//! the invocation.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::util::process::ProcessBuilder;

/// In-container mount point for the project tree.
const PROJECT_MOUNT: &str = "/core";

/// In-container mount point for the build-tool cache.
const CACHE_MOUNT: &str = "/root/.gradle";

/// Locate the `docker` executable.
pub fn find_docker() -> Result<PathBuf> {
    which::which("docker").context(
        "could not find `docker` in PATH\n\
         help: install Docker or add it to PATH",
    )
}

/// Build a distribution image from a generated Dockerfile directory.
pub fn build_image(docker: &Path, context_dir: &Path, tag: &str) -> Result<()> {
    let cmd = ProcessBuilder::new(docker)
        .arg("build")
        .arg("-t")
        .arg(tag)
        .arg(context_dir);

    tracing::debug!("running `{}`", cmd.display_command());
    let status = cmd.status()?;
    if !status.success() {
        bail!(
            "`{}` failed with exit code {:?}",
            cmd.display_command(),
            status.code()
        );
    }

    Ok(())
}

/// Run the build image against the mounted project tree.
///
/// The parent of `project_root` is mounted at `/core` (the image's
/// working directory is `/core/native`), and the host build-tool
/// cache at `/root/.gradle`. These mounts are the only state shared
/// between host and container.
pub fn run_build(docker: &Path, project_root: &Path, tag: &str) -> Result<()> {
    let mount_root = project_root.parent().unwrap_or(project_root);
    let cache_dir = gradle_cache_dir()?;

    let cmd = ProcessBuilder::new(docker)
        .arg("run")
        .arg("--rm")
        .arg("-v")
        .arg(format!("{}:{}", mount_root.display(), PROJECT_MOUNT))
        .arg("-v")
        .arg(format!("{}:{}", cache_dir.display(), CACHE_MOUNT))
        .arg(tag);

    tracing::debug!("running `{}`", cmd.display_command());
    let status = cmd.status()?;
    if !status.success() {
        bail!(
            "`{}` failed with exit code {:?}",
            cmd.display_command(),
            status.code()
        );
    }

    Ok(())
}

/// Host-side build-tool cache directory (`~/.gradle`).
fn gradle_cache_dir() -> Result<PathBuf> {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".gradle"))
        .context("could not determine the home directory")
}
