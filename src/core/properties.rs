//! Build invocation properties.
//!
//! Properties are key-value overrides supplied at invocation time,
//! in the spirit of `-P` properties of JVM build tools. A key may be
//! present without a value; several consumers only test for presence.
//!
//! Layering, lowest to highest precedence:
//! 1. `[properties]` table in `Drydock.toml`
//! 2. the `CI` environment variable (presence only)
//! 3. `-P KEY[=VALUE]` command-line overrides

use std::collections::BTreeMap;

use anyhow::{bail, Result};

/// Presence-only property set by CI environments.
pub const CI: &str = "CI";

/// Presence-only property requesting unoptimized, debuggable output.
pub const DEBUG: &str = "DEBUG";

/// Effective property map for a single invocation.
///
/// Assembled once per invocation; not mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    values: BTreeMap<String, Option<String>>,
}

impl Properties {
    pub fn new() -> Self {
        Properties::default()
    }

    /// Set a property. `None` marks a presence-only property.
    pub fn set(&mut self, key: impl Into<String>, value: Option<String>) {
        self.values.insert(key.into(), value);
    }

    /// Whether the property is present at all, with or without a value.
    pub fn is_present(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// The property value, if the property is present with a value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(|v| v.as_deref())
    }

    /// The property value, or `default` when unset or valueless.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Apply a `-P KEY[=VALUE]` override.
    pub fn apply_override(&mut self, spec: &str) -> Result<()> {
        let (key, value) = match spec.split_once('=') {
            Some((key, value)) => (key, Some(value.to_string())),
            None => (spec, None),
        };
        if key.is_empty() {
            bail!("invalid property override `{spec}`: empty key");
        }
        self.set(key, value);
        Ok(())
    }
}

/// Assemble the effective property map for one invocation.
///
/// `manifest` is the `[properties]` layer from `Drydock.toml`,
/// `ci_env` reflects presence of the `CI` environment variable, and
/// `overrides` are raw `-P` arguments in command-line order.
pub fn assemble(
    manifest: &BTreeMap<String, Option<String>>,
    ci_env: bool,
    overrides: &[String],
) -> Result<Properties> {
    let mut props = Properties::new();

    for (key, value) in manifest {
        props.set(key, value.clone());
    }

    if ci_env {
        props.set(CI, None);
    }

    for spec in overrides {
        props.apply_override(spec)?;
    }

    Ok(props)
}
