// Copyright (C) Brian G. Milnes 2025

//! Splice the generated stub block into the virtual environment file,
//! writing a backup of the original first.
//!
//! Binary: stubforge-integrate

use clap::Parser;
use stubforge::args::args::IntegrateArgs;
use stubforge::splicer::splicer::integrate;
use stubforge::tool_runner::tool_runner::{run_tool, ToolConfig};

fn main() {
    let args = IntegrateArgs::parse();

    let code = run_tool(ToolConfig::new("stubforge-integrate"), |log| {
        integrate(&args.generated, &args.implementation, log)
    });

    std::process::exit(code);
}
