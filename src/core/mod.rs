//! Core data structures for Drydock.

pub mod distro;
pub mod gate;
pub mod manifest;
pub mod properties;

pub use distro::{Distro, DistroImage};
pub use gate::Gate;
pub use manifest::Manifest;
pub use properties::Properties;
