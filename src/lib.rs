//! Drydock - a build orchestrator for multi-project native C/C++ builds
//!
//! This crate provides the core library functionality for Drydock,
//! including compiler flag assembly, debug-task gating, and
//! cross-distribution container build images.

pub mod builder;
pub mod core;
pub mod docker;
pub mod util;

pub use crate::core::{
    distro::{Distro, DistroImage},
    gate::Gate,
    manifest::Manifest,
    properties::Properties,
};

pub use builder::{FlagSet, TaskPlan};
pub use util::context::GlobalContext;
