// Copyright (C) Brian G. Milnes 2025

//! File splicer: inserts a generated stub block into the virtual
//! environment file at a known anchor.
//!
//! Ordering invariant: the backup snapshot is written before the target
//! is overwritten, and an anchor miss writes nothing at all, so a failed
//! or interrupted splice never loses the original file.

pub mod splicer {
    use std::fs;
    use std::path::{Path, PathBuf};
    use anyhow::{bail, Context, Result};
    use chrono::Local;
    use regex::Regex;
    use crate::logging::logging::RunLog;
    use crate::scanner::scanner::implemented_functions;
    use crate::synthesizer::synthesizer::GENERATED_MARKER;

    /// Where the spliced block lands relative to a matched anchor.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Placement {
        After,
        Before,
    }

    /// The ordered anchor list; the first anchor that matches the target
    /// decides the insertion point.
    const ANCHOR_TABLE: &[(&str, Placement, &str)] = &[
        (
            r"ImGui_TabItemFlags_Trailing = function\(\) return 128 end,",
            Placement::After,
            "end of the existing ImGui definitions",
        ),
        (
            r"\s*\}\s*\n\s*-- ==================== VIRTUAL TESTING FRAMEWORK ====================",
            Placement::Before,
            "closing brace before the testing framework",
        ),
    ];

    struct Anchor {
        pattern: Regex,
        placement: Placement,
        description: &'static str,
    }

    /// Result of a successful splice.
    #[derive(Debug)]
    pub struct SpliceReport {
        /// Description of the anchor that matched
        pub anchor: &'static str,
        pub backup_path: PathBuf,
        pub inserted_bytes: usize,
    }

    /// Sibling backup path: `<stem>_backup.<ext>`.
    pub fn backup_path_for(target: &Path) -> PathBuf {
        let stem = target
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("target");
        match target.extension().and_then(|s| s.to_str()) {
            Some(ext) => target.with_file_name(format!("{stem}_backup.{ext}")),
            None => target.with_file_name(format!("{stem}_backup")),
        }
    }

    pub struct Splicer {
        anchors: Vec<Anchor>,
    }

    impl Splicer {
        pub fn new() -> Result<Self> {
            let anchors = ANCHOR_TABLE
                .iter()
                .map(|&(pattern, placement, description)| {
                    Ok(Anchor {
                        pattern: Regex::new(pattern)?,
                        placement,
                        description,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(Splicer { anchors })
        }

        /// Keep only the stub definitions from a generated file:
        /// everything from the first `ImGui_` line on, minus blank lines.
        pub fn strip_header(generated: &str) -> String {
            let mut in_functions = false;
            let mut lines = Vec::new();
            for line in generated.lines() {
                if line.trim().starts_with("ImGui_") {
                    in_functions = true;
                }
                if in_functions && !line.trim().is_empty() {
                    lines.push(line);
                }
            }
            lines.join("\n")
        }

        /// Wrap stripped stubs with the marker comment for insertion.
        pub fn compose_block(stubs: &str, count: usize) -> String {
            format!(
                "\n\n  -- ==================== {GENERATED_MARKER} ====================\n  -- Added {count} missing functions for script compatibility\n  -- Generated: {}\n\n{stubs}\n",
                Local::now().format("%Y-%m-%d"),
            )
        }

        fn find_anchor(&self, content: &str) -> Option<(&Anchor, usize)> {
            for anchor in &self.anchors {
                if let Some(m) = anchor.pattern.find(content) {
                    let position = match anchor.placement {
                        Placement::After => m.end(),
                        Placement::Before => m.start(),
                    };
                    return Some((anchor, position));
                }
            }
            None
        }

        /// Splice `block` into `target` at the first matching anchor.
        ///
        /// Writes the backup first, then the modified target. When no
        /// anchor matches, fails without touching either file.
        pub fn splice_file(&self, target: &Path, block: &str) -> Result<SpliceReport> {
            let content = fs::read_to_string(target)
                .with_context(|| format!("could not open target file {}", target.display()))?;

            let Some((anchor, position)) = self.find_anchor(&content) else {
                bail!("no insertion anchor found in {}", target.display());
            };

            let mut new_content = String::with_capacity(content.len() + block.len());
            new_content.push_str(&content[..position]);
            new_content.push_str(block);
            new_content.push_str(&content[position..]);

            let backup_path = backup_path_for(target);
            fs::write(&backup_path, &content)
                .with_context(|| format!("could not write backup {}", backup_path.display()))?;
            fs::write(target, &new_content)
                .with_context(|| format!("could not write target {}", target.display()))?;

            Ok(SpliceReport {
                anchor: anchor.description,
                backup_path,
                inserted_bytes: block.len(),
            })
        }
    }

    /// Batch integration step: read the generated stub file, strip its
    /// header, and splice the block into the implementation file.
    /// Failures are reported and turned into a false success flag.
    pub fn integrate(generated_path: &Path, target: &Path, log: &mut RunLog) -> Result<bool> {
        log.log("Integrating generated functions");
        log.log(&"=".repeat(50));

        let generated = match fs::read_to_string(generated_path) {
            Ok(content) => content,
            Err(e) => {
                log.log(&format!(
                    "Error: could not open generated file {}: {e}",
                    generated_path.display()
                ));
                return Ok(false);
            }
        };

        let stubs = Splicer::strip_header(&generated);
        if stubs.is_empty() {
            log.log("Nothing to integrate: no stub definitions found");
            return Ok(false);
        }

        let count = implemented_functions(&generated)?.len();
        let block = Splicer::compose_block(&stubs, count);

        let splicer = Splicer::new()?;
        match splicer.splice_file(target, &block) {
            Ok(report) => {
                log.log(&format!("Backup created: {}", report.backup_path.display()));
                log.log(&format!(
                    "Spliced {} functions at {} ({} bytes inserted)",
                    count, report.anchor, report.inserted_bytes
                ));
                Ok(true)
            }
            Err(e) => {
                log.log(&format!("Error: {e:#}"));
                Ok(false)
            }
        }
    }
}
