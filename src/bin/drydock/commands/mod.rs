//! Command implementations

pub mod assemble;
pub mod completions;
pub mod copy_artifacts;
pub mod dockerfile;
pub mod flags;
pub mod image;
pub mod tasks;
