//! Native build configuration.
//!
//! This module assembles the compiler flag lists and the gated task
//! plan for a build invocation. It never runs a compiler itself; the
//! actual compilation happens inside the container build image.

pub mod artifacts;
pub mod flags;
pub mod plan;

pub use flags::FlagSet;
pub use plan::{Task, TaskKind, TaskPlan, Variant};
