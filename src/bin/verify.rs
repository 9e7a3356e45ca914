// Copyright (C) Brian G. Milnes 2025

//! Verify that every generated function was integrated into the virtual
//! environment file, check the required function set, and write the API
//! manifest.
//!
//! Binary: stubforge-verify

use std::fs;
use anyhow::Result;
use clap::Parser;
use stubforge::args::args::{format_number, VerifyArgs};
use stubforge::logging::logging::RunLog;
use stubforge::manifest::manifest;
use stubforge::tool_runner::tool_runner::{run_tool, ToolConfig};
use stubforge::verifier::verifier::{verify, IntegrationReport, REQUIRED_FUNCTIONS};

fn main() {
    let args = VerifyArgs::parse();

    let code = run_tool(ToolConfig::new("stubforge-verify"), |log| {
        run_verify(&args, log)
    });

    std::process::exit(code);
}

fn run_verify(args: &VerifyArgs, log: &mut RunLog) -> Result<bool> {
    log.log("Verifying ImGui integration");
    log.log(&"=".repeat(50));

    let generated = match fs::read_to_string(&args.generated) {
        Ok(content) => content,
        Err(e) => {
            log.log(&format!(
                "Error: could not open generated file {}: {e}",
                args.generated.display()
            ));
            return Ok(false);
        }
    };
    let implementation = match fs::read_to_string(&args.implementation) {
        Ok(content) => content,
        Err(e) => {
            log.log(&format!(
                "Error: could not open implementation file {}: {e}",
                args.implementation.display()
            ));
            return Ok(false);
        }
    };

    let report = verify(&generated, &implementation)?;

    match args.format.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&report)?;
            println!("{json}");
        }
        _ => print_report(&report, log),
    }

    // The manifest covers whatever the implementation defines; it is
    // written independently of the verification verdict.
    match manifest::build(&implementation) {
        Ok(manifest) => match fs::write(&args.manifest, &manifest.text) {
            Ok(()) => {
                log.log("");
                log.log(&format!(
                    "Created API manifest: {} ({} functions)",
                    args.manifest.display(),
                    manifest.total
                ));
                for (section, count) in &manifest.sections {
                    log.log(&format!("   {section}: {count} functions"));
                }
            }
            Err(e) => log.log(&format!(
                "Warning: could not write manifest {}: {e}",
                args.manifest.display()
            )),
        },
        Err(e) => log.log(&format!("Warning: could not build manifest: {e:#}")),
    }

    Ok(report.success())
}

fn print_report(report: &IntegrationReport, log: &mut RunLog) {
    log.log("");
    log.log("Integration analysis:");
    log.log(&format!("   Generated functions: {}", report.generated_count));
    log.log(&format!(
        "   Functions in implementation: {}",
        report.present_count
    ));
    log.log(&format!(
        "   Missing from integration: {}",
        report.missing.len()
    ));
    log.log(&format!(
        "   Extra functions in implementation: {}",
        report.extra.len()
    ));

    if !report.missing.is_empty() {
        log.log("");
        log.log(&format!("✗ Missing functions ({}):", report.missing.len()));
        for name in report.missing.iter().take(10) {
            log.log(&format!("   - ImGui_{name}"));
        }
        if report.missing.len() > 10 {
            log.log(&format!("   ... and {} more", report.missing.len() - 10));
        }
    }

    log.log("");
    log.log("File statistics:");
    log.log(&format!(
        "   File size: {} bytes",
        format_number(report.file_size_bytes)
    ));
    log.log(&format!(
        "   Line count: {} lines",
        format_number(report.line_count)
    ));
    log.log(&format!(
        "   Integration markers found: {}",
        report.marker_count
    ));

    log.log("");
    log.log("Required function check:");
    for name in REQUIRED_FUNCTIONS {
        if report.absent_required.iter().any(|absent| absent == name) {
            log.log(&format!("   ✗ ImGui_{name} - MISSING"));
        } else {
            log.log(&format!("   ✓ ImGui_{name}"));
        }
    }

    log.log("");
    if report.success() {
        log.log("✓ Integration complete: all generated functions present");
    } else {
        log.log("✗ Integration incomplete");
    }
}
