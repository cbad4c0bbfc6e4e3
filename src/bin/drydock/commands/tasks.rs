//! `drydock tasks` command

use anyhow::Result;

use crate::cli::TasksArgs;
use drydock::builder::TaskPlan;
use drydock::core::gate::Gate;
use drydock::util::GlobalContext;

pub fn execute(properties: &[String], args: TasksArgs) -> Result<()> {
    let ctx = GlobalContext::new(properties)?;

    let gate = Gate::evaluate(ctx.properties(), &args.tasks);
    let plan = TaskPlan::generate(ctx.manifest(), &gate);

    if args.json {
        println!("{}", plan.to_json()?);
        return Ok(());
    }

    println!(
        "# Task plan (debug artifacts: {})",
        if gate.debug_artifacts { "on" } else { "off" }
    );

    let tasks: Vec<_> = if args.enabled_only {
        plan.enabled().collect()
    } else {
        plan.tasks.iter().collect()
    };

    for task in tasks {
        let state = if task.enabled { "enabled " } else { "disabled" };
        match &task.finalized_by {
            Some(f) => println!("  [{state}] {}    (finalized by {f})", task.path()),
            None => println!("  [{state}] {}", task.path()),
        }
    }

    Ok(())
}
