// Copyright (C) Brian G. Milnes 2025

//! Tool runner infrastructure for stubforge binaries
//!
//! Provides a consistent wrapper for all stubforge tools that handles:
//! - Timing measurement
//! - Directory context for Emacs compile-mode
//! - Logging to files
//! - Top-level error recovery
//!
//! Every tool body returns a success flag; the runner maps it to the
//! process exit code so failed batch runs exit non-zero. Errors never
//! escape the runner: they are printed as a diagnostic and count as a
//! failed run.

pub mod tool_runner {
    use std::path::PathBuf;
    use std::time::Instant;
    use anyhow::Result;
    use crate::logging::logging::RunLog;

    /// Configuration for a tool run
    pub struct ToolConfig {
        /// Name of the tool (for the logging directory)
        pub tool_name: String,
        /// Base directory to display in "Entering directory"
        pub base_dir: PathBuf,
        /// Whether to enable file logging
        pub enable_logging: bool,
    }

    impl ToolConfig {
        /// Create a config for a tool running in the current directory
        pub fn new(tool_name: &str) -> Self {
            ToolConfig {
                tool_name: tool_name.to_string(),
                base_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
                enable_logging: true,
            }
        }
    }

    /// Run a tool with timing, context, logging, and error recovery.
    ///
    /// Usage:
    /// ```no_run
    /// use stubforge::tool_runner::tool_runner::{run_tool, ToolConfig};
    /// let config = ToolConfig::new("stubforge-generate");
    /// let code = run_tool(config, |log| {
    ///     log.log("Starting generation...");
    ///     // Tool logic here
    ///     Ok(true)
    /// });
    /// std::process::exit(code);
    /// ```
    ///
    /// Returns the process exit code: 0 on success, 1 when the tool
    /// reports failure or an error reaches the top.
    pub fn run_tool<F>(config: ToolConfig, tool_fn: F) -> i32
    where
        F: FnOnce(&mut RunLog) -> Result<bool>,
    {
        let start = Instant::now();

        // Print directory context (for Emacs compile-mode)
        println!("Entering directory '{}'", config.base_dir.display());
        println!();

        let mut log = if config.enable_logging {
            RunLog::new(&config.tool_name)
        } else {
            RunLog::disabled()
        };

        let success = match tool_fn(&mut log) {
            Ok(success) => success,
            Err(e) => {
                log.log(&format!("Error: {e:#}"));
                false
            }
        };

        if config.enable_logging {
            log.finalize(&format!("Tool: {}", config.tool_name), success);
        }

        println!();
        println!("Completed in {}ms", start.elapsed().as_millis());

        if success { 0 } else { 1 }
    }
}
