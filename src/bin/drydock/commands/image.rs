//! `drydock image` command

use anyhow::Result;

use crate::cli::ImageArgs;
use drydock::core::distro::{Distro, DistroImage};
use drydock::docker::{build_image, find_docker, write_dockerfile};
use drydock::util::GlobalContext;

pub fn execute(properties: &[String], args: ImageArgs) -> Result<()> {
    let ctx = GlobalContext::new(properties)?;

    let distro: Distro = args.distro.parse()?;
    let image = DistroImage::from_properties(distro, ctx.properties());

    let docker = find_docker()?;
    let context_dir = write_dockerfile(&image, &ctx.build_dir())?;
    build_image(&docker, &context_dir, &image.tag())?;

    eprintln!("    Built image {}", image.tag());

    Ok(())
}
