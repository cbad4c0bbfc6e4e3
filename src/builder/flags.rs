//! Compiler flag assembly.
//!
//! Two ordered flag lists, one for C and one for C++, built once per
//! invocation and immutable thereafter. The only conditional part is
//! the optimization suffix: `-O0` plus a debug path remap when
//! optimizing for debug, `-O3` otherwise, never both.

use std::path::Path;

/// Base C flags, warnings only.
pub const C_FLAGS: [&str; 10] = [
    "-fPIC",
    "-c",
    "-Wall",
    "-Wextra",
    "-Winit-self",
    "-Wmissing-prototypes",
    "-Wconversion",
    "-Wsign-conversion",
    "-Wno-long-long",
    "-Wpointer-arith",
];

/// Base C++ flags, warnings as errors.
pub const CXX_FLAGS: [&str; 21] = [
    "-std=c++20",
    "-fPIC",
    "-c",
    "-Werror",
    "-Wall",
    "-Wextra",
    "-Wconversion",
    "-Wsign-conversion",
    "-Winit-self",
    "-pedantic",
    "-Wno-long-long",
    "-Wpointer-arith",
    "-Wcast-qual",
    "-Wconversion-null",
    "-Wmissing-declarations",
    "-Woverlength-strings",
    "-Wunused-local-typedefs",
    "-Wunused-result",
    "-Wvarargs",
    "-Wvla",
    "-Wwrite-strings",
];

/// Preprocessor definitions applied to every C++ compilation unit.
pub const CXX_DEFINES: [&str; 2] = [
    "-DNLOGGER_USE_THREAD_LOCAL",
    "-DNLOGGER_LOG_BUFFER_SIZE=1024",
];

/// Assembled flag lists for one build invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSet {
    pub cflags: Vec<String>,
    pub cxxflags: Vec<String>,
}

impl FlagSet {
    /// Assemble the flag lists for a project.
    ///
    /// `project_dir` is only used for the `-fdebug-prefix-map` remap,
    /// which strips the absolute build location out of debug info.
    pub fn assemble(project_dir: &Path, optimize_for_debug: bool) -> FlagSet {
        let mut cflags: Vec<String> = C_FLAGS.iter().map(|s| s.to_string()).collect();
        let mut cxxflags: Vec<String> = CXX_FLAGS.iter().map(|s| s.to_string()).collect();

        if optimize_for_debug {
            let remap = format!("-fdebug-prefix-map={}=.", project_dir.display());
            cflags.push("-O0".to_string());
            cxxflags.push("-O0".to_string());
            cflags.push(remap.clone());
            cxxflags.push(remap);
        } else {
            cflags.push("-O3".to_string());
            cxxflags.push("-O3".to_string());
        }

        cxxflags.extend(CXX_DEFINES.iter().map(|s| s.to_string()));

        FlagSet { cflags, cxxflags }
    }
}
