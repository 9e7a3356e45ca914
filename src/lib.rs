// Copyright (C) Brian G. Milnes 2025

//! Stubforge - ImGui API surface miner and stub generator
//!
//! This library mines ReaImGui Lua scripts for `ImGui_*` call sites,
//! diffs the discovered surface against a hand-written virtual
//! implementation, synthesizes Lua stubs for the missing functions,
//! splices them into the implementation file, and verifies the splice.

pub mod args;
pub mod extractor;
pub mod scanner;
pub mod classifier;
pub mod synthesizer;
pub mod splicer;
pub mod verifier;
pub mod manifest;
pub mod generator;
pub mod logging;
pub mod tool_runner;

use anyhow::Result;
use std::path::Path;

// Re-export commonly used items
pub use args::args::{find_lua_files, format_number};
pub use classifier::classifier::{Category, Classifier, ReturnShape, Signature};
pub use extractor::extractor::{CallRecord, Extractor};
pub use generator::generator::{generate, GenerateRequest};
pub use logging::logging::RunLog;
pub use scanner::scanner::{implemented_functions, implemented_in_file, missing_functions};
pub use splicer::splicer::{backup_path_for, integrate, Placement, SpliceReport, Splicer};
pub use synthesizer::synthesizer::{render_block, render_stub, GENERATED_MARKER};
pub use tool_runner::tool_runner::{run_tool, ToolConfig};
pub use verifier::verifier::{verify, IntegrationReport, REQUIRED_FUNCTIONS};

/// Verify a generated-stub file against an implementation file
pub fn verify_files(generated: &Path, implementation: &Path) -> Result<IntegrationReport> {
    let generated_content = std::fs::read_to_string(generated)?;
    let implementation_content = std::fs::read_to_string(implementation)?;

    verify(&generated_content, &implementation_content)
}
