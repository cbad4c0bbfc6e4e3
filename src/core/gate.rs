//! Debug-mode decision rule.
//!
//! Debug-variant tasks (compile, link, metadata, publish) are skipped
//! by default to keep local builds fast. They are turned back on when
//! the build runs under CI, or when the user explicitly asked for a
//! task that needs debug artifacts.

use crate::core::properties::{self, Properties};

/// Task names whose explicit request forces debug artifacts on.
pub const DEBUG_ARTIFACT_TASKS: [&str; 3] = ["build", "test", "check"];

/// Result of evaluating the debug-mode rules for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gate {
    /// Whether debug-named tasks are enabled at all.
    pub debug_artifacts: bool,

    /// Whether compilation is optimized for debugging (`-O0`).
    pub optimize_for_debug: bool,
}

impl Gate {
    /// Evaluate the gate from the property map and the requested task names.
    ///
    /// Pure and side-effect free; evaluated once per invocation.
    pub fn evaluate(props: &Properties, requested: &[String]) -> Self {
        Gate {
            debug_artifacts: debug_artifacts_requested(
                props.is_present(properties::CI),
                requested,
            ),
            optimize_for_debug: props.is_present(properties::DEBUG),
        }
    }
}

/// True iff the build runs under CI, or any of the tasks in
/// [`DEBUG_ARTIFACT_TASKS`] was explicitly requested.
pub fn debug_artifacts_requested(ci: bool, requested: &[String]) -> bool {
    ci || requested
        .iter()
        .any(|t| DEBUG_ARTIFACT_TASKS.contains(&t.as_str()))
}
