//! Global context for Drydock operations.
//!
//! Provides centralized access to the project layout and the
//! assembled property map for one invocation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::manifest::{find_manifest, Manifest};
use crate::core::properties::{self, Properties};

/// Global context containing the loaded manifest and paths.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Project root (directory containing `Drydock.toml`)
    root: PathBuf,

    /// Loaded project manifest
    manifest: Manifest,

    /// Effective property map for this invocation
    properties: Properties,
}

impl GlobalContext {
    /// Create a context from the current directory and `-P` overrides.
    pub fn new(property_overrides: &[String]) -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Self::with_cwd(&cwd, property_overrides)
    }

    /// Create a context rooted at a specific working directory.
    pub fn with_cwd(cwd: &Path, property_overrides: &[String]) -> Result<Self> {
        let manifest_path = find_manifest(cwd)?;
        let manifest = Manifest::load(&manifest_path)?;

        let ci_env = std::env::var_os("CI").is_some();
        let properties =
            properties::assemble(&manifest.property_layer(), ci_env, property_overrides)?;

        // find_manifest only returns paths with a parent
        let root = manifest_path
            .parent()
            .context("manifest has no parent directory")?
            .to_path_buf();

        Ok(GlobalContext {
            root,
            manifest,
            properties,
        })
    }

    /// Get the project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the loaded manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Get the effective property map.
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Get the root-level build output directory.
    pub fn build_dir(&self) -> PathBuf {
        self.root.join("build")
    }

    /// Get a subproject's directory.
    ///
    /// A single-project manifest maps the project name onto the root
    /// itself.
    pub fn subproject_dir(&self, name: &str) -> PathBuf {
        if self.manifest.project.subprojects.is_empty() {
            self.root.clone()
        } else {
            self.root.join(name)
        }
    }
}
