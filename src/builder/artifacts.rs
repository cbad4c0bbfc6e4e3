//! Post-link artifact copy.
//!
//! Executable links keep an unstripped copy of the binary next to the
//! stripped one, so crash dumps from production can still be
//! symbolized. A missing source artifact is not an error: the link
//! task may have been skipped entirely by the debug gate.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Location of the linked executable inside a subproject build dir.
const EXE_DIR: &str = "exe/main/release";

/// Copy the unstripped executable into the `stripped/` directory.
///
/// Returns the destination path when a copy happened, `None` when the
/// source artifact does not exist (logged and skipped, never fatal).
pub fn copy_non_stripped(build_dir: &Path, name: &str) -> Result<Option<PathBuf>> {
    let source = build_dir.join(EXE_DIR).join(name);
    let dest_dir = build_dir.join(EXE_DIR).join("stripped");

    if !source.exists() {
        tracing::info!("source file {} does not exist, skipping", source.display());
        return Ok(None);
    }

    std::fs::create_dir_all(&dest_dir)
        .with_context(|| format!("failed to create directory: {}", dest_dir.display()))?;

    let dest = dest_dir.join(name);
    std::fs::copy(&source, &dest).with_context(|| {
        format!(
            "failed to copy {} to {}",
            source.display(),
            dest.display()
        )
    })?;

    tracing::info!("file {} copied successfully", source.display());
    Ok(Some(dest))
}
