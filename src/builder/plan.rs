//! Generated task plan and debug gating.
//!
//! For each subproject we generate the task set the native build would
//! register, then gate enablement: any task whose name contains
//! `debug` (case-insensitive) is enabled only when debug artifacts
//! were requested, and symbol stripping only applies to libraries.

use anyhow::Result;
use serde::Serialize;

use crate::core::gate::Gate;
use crate::core::manifest::Manifest;

/// Kind of a generated build task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskKind {
    CompileC,
    CompileCpp,
    LinkShared,
    LinkExe,
    GenerateMetadata,
    GeneratePom,
    PublishLocal,
    PublishRemote,
    StripSymbols,
    CopyNonStripped,
}

/// Build variant for variated tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Debug,
    Release,
}

impl Variant {
    fn title(&self) -> &'static str {
        match self {
            Variant::Debug => "Debug",
            Variant::Release => "Release",
        }
    }
}

/// One generated build task, with its computed enablement.
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub subproject: String,
    pub name: String,
    pub kind: TaskKind,
    pub enabled: bool,

    /// Task that runs after this one completes, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finalized_by: Option<String>,
}

impl Task {
    /// Fully qualified task path, `<subproject>:<name>`.
    pub fn path(&self) -> String {
        format!("{}:{}", self.subproject, self.name)
    }
}

/// The gated task plan for one invocation.
#[derive(Debug, Clone, Serialize)]
pub struct TaskPlan {
    pub tasks: Vec<Task>,
}

impl TaskPlan {
    /// Generate the plan for every subproject in the manifest.
    pub fn generate(manifest: &Manifest, gate: &Gate) -> TaskPlan {
        let mut tasks = Vec::new();

        for sub in manifest.subprojects() {
            let is_library = manifest.is_library(&sub);

            for variant in [Variant::Debug, Variant::Release] {
                let v = variant.title();

                push(&mut tasks, gate, &sub, format!("compile{v}C"), TaskKind::CompileC, None);
                push(&mut tasks, gate, &sub, format!("compile{v}Cpp"), TaskKind::CompileCpp, None);

                if is_library {
                    push(&mut tasks, gate, &sub, format!("link{v}"), TaskKind::LinkShared, None);
                } else {
                    // Executable links keep an unstripped copy around
                    push(
                        &mut tasks,
                        gate,
                        &sub,
                        format!("link{v}"),
                        TaskKind::LinkExe,
                        Some("copyNonStripped".to_string()),
                    );
                }

                push(&mut tasks, gate, &sub, format!("generate{v}Metadata"), TaskKind::GenerateMetadata, None);
                push(&mut tasks, gate, &sub, format!("generate{v}Pom"), TaskKind::GeneratePom, None);
                push(&mut tasks, gate, &sub, format!("publish{v}ToLocal"), TaskKind::PublishLocal, None);
                push(&mut tasks, gate, &sub, format!("publish{v}ToRemote"), TaskKind::PublishRemote, None);
            }

            // Stripped artifacts are only prepared for libraries
            tasks.push(Task {
                subproject: sub.clone(),
                name: "stripSymbols".to_string(),
                kind: TaskKind::StripSymbols,
                enabled: is_library,
                finalized_by: None,
            });

            if !is_library {
                tasks.push(Task {
                    subproject: sub.clone(),
                    name: "copyNonStripped".to_string(),
                    kind: TaskKind::CopyNonStripped,
                    enabled: true,
                    finalized_by: None,
                });
            }
        }

        TaskPlan { tasks }
    }

    /// Tasks that are enabled under the current gate.
    pub fn enabled(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| t.enabled)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn push(
    tasks: &mut Vec<Task>,
    gate: &Gate,
    subproject: &str,
    name: String,
    kind: TaskKind,
    finalized_by: Option<String>,
) {
    let enabled = if is_debug_named(&name) {
        gate.debug_artifacts
    } else {
        true
    };

    tasks.push(Task {
        subproject: subproject.to_string(),
        name,
        kind,
        enabled,
        finalized_by,
    });
}

/// The gating rule matches on the task name, not the kind.
fn is_debug_named(name: &str) -> bool {
    name.to_ascii_lowercase().contains("debug")
}
