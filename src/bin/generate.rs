// Copyright (C) Brian G. Milnes 2025

//! Generate virtual ImGui stubs for every API call the mined scripts
//! use but the virtual environment does not yet implement.
//!
//! Binary: stubforge-generate

use clap::Parser;
use stubforge::args::args::GenerateArgs;
use stubforge::generator::generator::{generate, GenerateRequest};
use stubforge::tool_runner::tool_runner::{run_tool, ToolConfig};

fn main() {
    let args = GenerateArgs::parse();

    let request = GenerateRequest {
        sources: args.sources,
        implementation: args.implementation,
        output: args.output,
    };

    let code = run_tool(ToolConfig::new("stubforge-generate"), |log| {
        generate(&request, log)
    });

    std::process::exit(code);
}
