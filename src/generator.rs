// Copyright (C) Brian G. Milnes 2025

//! Generation pipeline: extract call sites, diff against the current
//! implementation, classify and synthesize stubs for the missing
//! functions, and write the generated outputs.

pub mod generator {
    use std::fs;
    use std::path::PathBuf;
    use anyhow::Result;
    use crate::args::args::find_lua_files;
    use crate::classifier::classifier::Classifier;
    use crate::extractor::extractor::Extractor;
    use crate::logging::logging::RunLog;
    use crate::scanner::scanner::{implemented_in_file, missing_functions};
    use crate::synthesizer::synthesizer::{render_block, render_instructions, VALIDATION_TEST};

    /// Input and output locations for one generation run.
    pub struct GenerateRequest {
        /// Lua files or directories to mine
        pub sources: Vec<PathBuf>,
        /// Current virtual environment file
        pub implementation: PathBuf,
        /// Where to write the generated stub block
        pub output: PathBuf,
    }

    impl GenerateRequest {
        fn sibling(&self, suffix: &str) -> PathBuf {
            let stem = self
                .output
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("generated");
            self.output.with_file_name(format!("{stem}{suffix}"))
        }

        pub fn instructions_path(&self) -> PathBuf {
            self.sibling("_integration_instructions.txt")
        }

        pub fn validation_path(&self) -> PathBuf {
            self.sibling("_validation_test.lua")
        }

        fn file_name(path: &std::path::Path) -> String {
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("output")
                .to_string()
        }

        pub fn output_name(&self) -> String {
            Self::file_name(&self.output)
        }

        pub fn implementation_name(&self) -> String {
            Self::file_name(&self.implementation)
        }
    }

    /// Run the generation pipeline. Returns the success flag for the
    /// run; a missing input is reported and degrades the result rather
    /// than aborting the process.
    pub fn generate(request: &GenerateRequest, log: &mut RunLog) -> Result<bool> {
        log.log("Starting ImGui API generation");
        log.log(&"=".repeat(50));

        let extractor = Extractor::new()?;
        let classifier = Classifier::new()?;

        let sources = find_lua_files(&request.sources);
        for source in &sources {
            log.log(&format!("Extracting ImGui calls from: {}", source.display()));
        }
        let discovered = extractor.extract_files(&sources)?;
        log.log(&format!("Extracted {} unique ImGui functions", discovered.len()));

        log.log(&format!(
            "Analyzing current implementation: {}",
            request.implementation.display()
        ));
        let implemented = implemented_in_file(&request.implementation)?;
        log.log(&format!("Found {} implemented functions", implemented.len()));

        let missing = missing_functions(&discovered, &implemented);

        log.log("");
        log.log("Analysis results:");
        log.log(&format!("   Functions in scripts: {}", discovered.len()));
        log.log(&format!("   Currently implemented: {}", implemented.len()));
        log.log(&format!("   Missing functions: {}", missing.len()));

        if missing.is_empty() {
            log.log("All discovered functions are already implemented");
            return Ok(true);
        }

        log.log("");
        log.log("Generating missing function implementations...");

        let mut signatures = Vec::with_capacity(missing.len());
        for record in &missing {
            log.log(&format!(
                "   Generating: ImGui_{} (used {} times)",
                record.name, record.count
            ));
            signatures.push(classifier.classify(&record.name));
        }

        let block = render_block(&signatures);

        log.log("");
        log.log(&format!("Writing generated code to: {}", request.output.display()));
        if let Err(e) = fs::write(&request.output, &block) {
            log.log(&format!(
                "Error: could not create output file {}: {e}",
                request.output.display()
            ));
            return Ok(false);
        }
        log.log(&format!("Generated {} function implementations", missing.len()));

        // The companion files are independent of each other; a failed
        // write is reported and the run moves on.
        let instructions = render_instructions(
            &request.output_name(),
            &request.implementation_name(),
            missing.len(),
        );
        let instructions_path = request.instructions_path();
        match fs::write(&instructions_path, instructions) {
            Ok(()) => log.log(&format!(
                "Integration instructions written to: {}",
                instructions_path.display()
            )),
            Err(e) => log.log(&format!(
                "Warning: could not create instructions file {}: {e}",
                instructions_path.display()
            )),
        }

        let validation_path = request.validation_path();
        match fs::write(&validation_path, VALIDATION_TEST) {
            Ok(()) => log.log(&format!(
                "Validation test script created: {}",
                validation_path.display()
            )),
            Err(e) => log.log(&format!(
                "Warning: could not create validation script {}: {e}",
                validation_path.display()
            )),
        }

        Ok(true)
    }
}
