//! Project manifest (`Drydock.toml`).
//!
//! ```toml
//! [project]
//! name = "core-native"
//! subprojects = ["transport", "codec"]
//! libraries = ["codec"]
//!
//! [properties]
//! "centos.version" = "7"
//! DEBUG = true
//! ```
//!
//! `subprojects` defaults to the project itself; `libraries` marks the
//! subset of subprojects built as shared libraries, everything else is
//! an executable.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::util::fs::read_to_string;

/// Manifest file name.
pub const MANIFEST_FILE: &str = "Drydock.toml";

/// Parsed project manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub project: ProjectSection,

    /// Default property layer, overridable from the command line.
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSection {
    pub name: String,

    #[serde(default)]
    pub subprojects: Vec<String>,

    #[serde(default)]
    pub libraries: Vec<String>,
}

/// A manifest property: either a presence flag or a string value.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Flag(bool),
    Value(String),
}

impl Manifest {
    /// Load and validate a manifest from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            read_to_string(path).with_context(|| format!("failed to load manifest: {}", path.display()))?;

        let manifest: Manifest = toml::from_str(&contents)
            .with_context(|| format!("failed to parse manifest: {}", path.display()))?;

        for lib in &manifest.project.libraries {
            if !manifest.subprojects().contains(lib) {
                bail!(
                    "manifest {} lists `{}` as a library, but it is not a subproject",
                    path.display(),
                    lib
                );
            }
        }

        Ok(manifest)
    }

    /// Subproject names, falling back to the project itself.
    pub fn subprojects(&self) -> Vec<String> {
        if self.project.subprojects.is_empty() {
            vec![self.project.name.clone()]
        } else {
            self.project.subprojects.clone()
        }
    }

    /// Whether the subproject is built as a shared library.
    pub fn is_library(&self, name: &str) -> bool {
        self.project.libraries.iter().any(|l| l == name)
    }

    /// The `[properties]` layer, normalized for property assembly.
    ///
    /// A `true` flag becomes a presence-only property; a `false` flag
    /// is dropped entirely.
    pub fn property_layer(&self) -> BTreeMap<String, Option<String>> {
        self.properties
            .iter()
            .filter_map(|(key, value)| match value {
                PropertyValue::Flag(true) => Some((key.clone(), None)),
                PropertyValue::Flag(false) => None,
                PropertyValue::Value(v) => Some((key.clone(), Some(v.clone()))),
            })
            .collect()
    }
}

/// Find `Drydock.toml` starting from `start` and searching upward.
pub fn find_manifest(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(MANIFEST_FILE);
        if candidate.is_file() {
            return Ok(candidate);
        }
        if !current.pop() {
            bail!(
                "could not find `{}` in `{}` or any parent directory",
                MANIFEST_FILE,
                start.display()
            );
        }
    }
}
