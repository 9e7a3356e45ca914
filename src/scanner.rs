// Copyright (C) Brian G. Milnes 2025

//! Implementation scanner: which functions the virtual environment
//! already defines, and which discovered calls it is missing.

pub mod scanner {
    use std::collections::{BTreeMap, BTreeSet};
    use std::fs;
    use std::path::Path;
    use anyhow::Result;
    use regex::Regex;
    use crate::extractor::extractor::CallRecord;

    /// Recognizer for a virtual implementation's function definitions.
    pub const DEFINITION_PATTERN: &str = r"ImGui_(\w+)\s*=\s*function";

    /// Bare names of every function defined in the implementation text.
    pub fn implemented_functions(content: &str) -> Result<BTreeSet<String>> {
        let pattern = Regex::new(DEFINITION_PATTERN)?;
        Ok(pattern
            .captures_iter(content)
            .map(|caps| caps[1].to_string())
            .collect())
    }

    /// Scan an implementation file. A missing file is reported and
    /// yields an empty set.
    pub fn implemented_in_file(path: &Path) -> Result<BTreeSet<String>> {
        match fs::read_to_string(path) {
            Ok(content) => implemented_functions(&content),
            Err(e) => {
                eprintln!(
                    "Warning: could not open implementation file {}: {e}",
                    path.display()
                );
                Ok(BTreeSet::new())
            }
        }
    }

    /// discovered − implemented. An empty result means nothing to
    /// generate, not an error.
    pub fn missing_functions<'a>(
        discovered: &'a BTreeMap<String, CallRecord>,
        implemented: &BTreeSet<String>,
    ) -> Vec<&'a CallRecord> {
        discovered
            .values()
            .filter(|record| !implemented.contains(&record.name))
            .collect()
    }
}
