// Copyright (C) Brian G. Milnes 2025

//! Call-site extractor: mines Lua source text for ImGui API calls
//!
//! Recognizes the call forms that appear in ReaImGui scripts
//! (`ImGui.Name(`, `r.ImGui_Name(`, `ImGui_Name(`, `ctx.Name(`) and
//! aggregates them by bare function name.

pub mod extractor {
    use std::collections::btree_map::Entry;
    use std::collections::BTreeMap;
    use std::fs;
    use std::path::{Path, PathBuf};
    use anyhow::Result;
    use regex::Regex;

    /// One discovered API function, aggregated over every call site.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CallRecord {
        /// Bare function name, without namespace or `ImGui_` prefix
        pub name: String,
        /// Total matches across all recognizer patterns
        pub count: usize,
        /// Raw parameter-list strings observed at call sites
        pub variations: Vec<String>,
    }

    /// Ordered call recognizers. A call form matched by more than one
    /// recognizer is counted once per recognizer; counts are additive,
    /// not deduplicated.
    const CALL_PATTERNS: &[&str] = &[
        r"ImGui\.(\w+)\s*\(",
        r"r\.ImGui_(\w+)\s*\(",
        r"ImGui_(\w+)\s*\(",
        r"ctx\.(\w+)\s*\(",
    ];

    pub struct Extractor {
        patterns: Vec<Regex>,
    }

    impl Extractor {
        pub fn new() -> Result<Self> {
            let patterns = CALL_PATTERNS
                .iter()
                .map(|p| Ok(Regex::new(p)?))
                .collect::<Result<Vec<_>>>()?;
            Ok(Extractor { patterns })
        }

        /// Extract all ImGui call sites from one source text.
        pub fn extract(&self, source: &str) -> Result<BTreeMap<String, CallRecord>> {
            let mut functions: BTreeMap<String, CallRecord> = BTreeMap::new();

            for pattern in &self.patterns {
                for caps in pattern.captures_iter(source) {
                    let name = caps[1].to_string();
                    let record = functions.entry(name.clone()).or_insert(CallRecord {
                        name,
                        count: 0,
                        variations: Vec::new(),
                    });
                    record.count += 1;
                }
            }

            // Raw parameter lists, verbatim up to the first close paren.
            // Nested calls truncate there; no parenthesis balancing.
            for record in functions.values_mut() {
                let sig = Regex::new(&format!(
                    r"ImGui\.?{}\s*\(([^)]*)",
                    regex::escape(&record.name)
                ))?;
                record.variations = sig
                    .captures_iter(source)
                    .map(|caps| caps[1].to_string())
                    .collect();
            }

            Ok(functions)
        }

        /// Extract from one file. An unreadable file is reported and
        /// yields an empty result; it never aborts the run.
        pub fn extract_file(&self, path: &Path) -> Result<BTreeMap<String, CallRecord>> {
            match fs::read_to_string(path) {
                Ok(source) => self.extract(&source),
                Err(e) => {
                    eprintln!("Warning: could not open source file {}: {e}", path.display());
                    Ok(BTreeMap::new())
                }
            }
        }

        /// Extract from several files, merging records additively.
        pub fn extract_files(&self, paths: &[PathBuf]) -> Result<BTreeMap<String, CallRecord>> {
            let mut merged: BTreeMap<String, CallRecord> = BTreeMap::new();

            for path in paths {
                for (name, record) in self.extract_file(path)? {
                    match merged.entry(name) {
                        Entry::Occupied(entry) => {
                            let existing = entry.into_mut();
                            existing.count += record.count;
                            existing.variations.extend(record.variations);
                        }
                        Entry::Vacant(entry) => {
                            entry.insert(record);
                        }
                    }
                }
            }

            Ok(merged)
        }
    }
}
