//! `drydock dockerfile` command

use anyhow::Result;

use crate::cli::DockerfileArgs;
use drydock::core::distro::{Distro, DistroImage};
use drydock::docker::{render_dockerfile, write_dockerfile};
use drydock::util::GlobalContext;

pub fn execute(properties: &[String], args: DockerfileArgs) -> Result<()> {
    let ctx = GlobalContext::new(properties)?;

    let distro: Distro = args.distro.parse()?;
    let image = DistroImage::from_properties(distro, ctx.properties());

    if args.stdout {
        print!("{}", render_dockerfile(&image));
        return Ok(());
    }

    let context_dir = write_dockerfile(&image, &ctx.build_dir())?;
    eprintln!("    Wrote {}", context_dir.join("Dockerfile").display());

    Ok(())
}
