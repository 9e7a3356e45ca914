// Copyright (C) Brian G. Milnes 2025

//! Command line arguments for stubforge tools
//!
//! Each tool is a batch job over a fixed set of files; arguments only
//! override the conventional file names, so every binary also runs with
//! no arguments at all.

pub mod args {
    use std::path::PathBuf;
    use clap::Parser;
    use walkdir::WalkDir;

    /// Conventional file names, relative to the working directory.
    pub const DEFAULT_SOURCE: &str = "demo.lua";
    pub const DEFAULT_IMPLEMENTATION: &str = "enhanced_virtual_reaper.lua";
    pub const DEFAULT_GENERATED: &str = "generated_imgui_functions.lua";
    pub const DEFAULT_MANIFEST: &str = "imgui_api_manifest.md";

    /// Arguments for stubforge-generate
    #[derive(Parser, Debug)]
    #[command(name = "stubforge-generate",
              about = "Mine Lua scripts for ImGui calls and generate missing virtual stubs")]
    pub struct GenerateArgs {
        /// Lua files or directories to mine for ImGui call sites
        #[arg(default_value = DEFAULT_SOURCE)]
        pub sources: Vec<PathBuf>,

        /// Virtual environment file holding the current implementations
        #[arg(short = 'i', long, default_value = DEFAULT_IMPLEMENTATION)]
        pub implementation: PathBuf,

        /// Output file for the generated stub block
        #[arg(short = 'o', long, default_value = DEFAULT_GENERATED)]
        pub output: PathBuf,
    }

    /// Arguments for stubforge-integrate
    #[derive(Parser, Debug)]
    #[command(name = "stubforge-integrate",
              about = "Splice a generated stub block into the virtual environment file")]
    pub struct IntegrateArgs {
        /// Generated stub file to splice in
        #[arg(short = 'g', long, default_value = DEFAULT_GENERATED)]
        pub generated: PathBuf,

        /// Virtual environment file to splice into
        #[arg(short = 'i', long, default_value = DEFAULT_IMPLEMENTATION)]
        pub implementation: PathBuf,
    }

    /// Arguments for stubforge-verify
    #[derive(Parser, Debug)]
    #[command(name = "stubforge-verify",
              about = "Verify the splice and write the API manifest")]
    pub struct VerifyArgs {
        /// Generated stub file the implementation must contain
        #[arg(short = 'g', long, default_value = DEFAULT_GENERATED)]
        pub generated: PathBuf,

        /// Virtual environment file to verify
        #[arg(short = 'i', long, default_value = DEFAULT_IMPLEMENTATION)]
        pub implementation: PathBuf,

        /// Output format: text or json
        #[arg(short = 'f', long, default_value = "text")]
        pub format: String,

        /// Where to write the Markdown manifest
        #[arg(short = 'm', long, default_value = DEFAULT_MANIFEST)]
        pub manifest: PathBuf,
    }

    /// Expand files and directories into the list of Lua files to scan.
    ///
    /// Directories are walked recursively for `.lua` files. Paths that do
    /// not exist are kept so the extractor can report them as unreadable.
    pub fn find_lua_files(paths: &[PathBuf]) -> Vec<PathBuf> {
        let mut files = Vec::new();
        for path in paths {
            if path.is_dir() {
                for entry in WalkDir::new(path).into_iter().flatten() {
                    let p = entry.path();
                    if p.is_file() && p.extension().and_then(|s| s.to_str()) == Some("lua") {
                        files.push(p.to_path_buf());
                    }
                }
            } else {
                files.push(path.clone());
            }
        }
        files.sort();
        files
    }

    /// Format a number with thousands separators (e.g. 1234 -> "1,234")
    pub fn format_number(n: usize) -> String {
        let digits = n.to_string();
        let mut out = String::new();
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }
}
