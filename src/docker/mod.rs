//! Container build images and containerized build invocation.

pub mod dockerfile;
pub mod invoke;

pub use dockerfile::{render_dockerfile, write_dockerfile};
pub use invoke::{build_image, find_docker, run_build};
