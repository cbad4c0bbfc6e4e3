//! `drydock copy-artifacts` command

use anyhow::Result;

use crate::cli::CopyArtifactsArgs;
use drydock::builder::artifacts::copy_non_stripped;
use drydock::util::GlobalContext;

pub fn execute(properties: &[String], _args: CopyArtifactsArgs) -> Result<()> {
    let ctx = GlobalContext::new(properties)?;

    for sub in ctx.manifest().subprojects() {
        // Libraries are stripped in place, nothing to preserve
        if ctx.manifest().is_library(&sub) {
            continue;
        }

        let build_dir = ctx.subproject_dir(&sub).join("build");
        if let Some(dest) = copy_non_stripped(&build_dir, &sub)? {
            eprintln!("    Copied {}", dest.display());
        }
    }

    Ok(())
}
