//! `drydock flags` command
//!
//! Flag lists are assembled per subproject: the shared portion is
//! identical, but the debug path remap points at each subproject's
//! own directory.

use anyhow::Result;

use crate::cli::FlagsArgs;
use drydock::builder::FlagSet;
use drydock::core::gate::Gate;
use drydock::util::GlobalContext;

pub fn execute(properties: &[String], args: FlagsArgs) -> Result<()> {
    let ctx = GlobalContext::new(properties)?;

    let gate = Gate::evaluate(ctx.properties(), &[]);

    let mut first = true;
    for sub in ctx.manifest().subprojects() {
        let flags = FlagSet::assemble(&ctx.subproject_dir(&sub), gate.optimize_for_debug);

        if !first {
            println!();
        }
        first = false;

        if !args.cxx {
            println!("# C flags for `{sub}`:");
            for flag in &flags.cflags {
                println!("  {flag}");
            }
        }

        if !args.c && !args.cxx {
            println!();
        }

        if !args.c {
            println!("# C++ flags for `{sub}`:");
            for flag in &flags.cxxflags {
                println!("  {flag}");
            }
        }
    }

    Ok(())
}
