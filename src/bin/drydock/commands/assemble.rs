//! `drydock assemble` command
//!
//! Full chain with explicit ordering: Dockerfile generation, image
//! build, then the containerized build against the mounted tree.

use anyhow::Result;

use crate::cli::AssembleArgs;
use drydock::core::distro::{Distro, DistroImage};
use drydock::docker::{build_image, find_docker, run_build, write_dockerfile};
use drydock::util::GlobalContext;

pub fn execute(properties: &[String], args: AssembleArgs) -> Result<()> {
    let ctx = GlobalContext::new(properties)?;

    let distro: Distro = args.distro.parse()?;
    let image = DistroImage::from_properties(distro, ctx.properties());

    let docker = find_docker()?;
    let context_dir = write_dockerfile(&image, &ctx.build_dir())?;
    build_image(&docker, &context_dir, &image.tag())?;
    run_build(&docker, ctx.root(), &image.tag())?;

    eprintln!("    Finished assemble in {}", image.tag());

    Ok(())
}
