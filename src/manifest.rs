// Copyright (C) Brian G. Milnes 2025

//! Markdown manifest of every function the virtual environment defines,
//! grouped into coarse categories.

pub mod manifest {
    use std::collections::BTreeSet;
    use anyhow::Result;
    use chrono::Local;
    use regex::Regex;

    /// Keyword groups, checked in order against the lowercased name;
    /// the first group with a matching keyword claims the function.
    const GROUPS: &[(&str, &[&str])] = &[
        ("Container", &["begin", "end"]),
        ("Input", &["input", "slider", "drag", "color"]),
        ("Display", &["text", "image", "bullet"]),
        ("Table", &["table"]),
        ("Tree", &["tree"]),
        ("Menu", &["menu"]),
        ("Popup", &["popup"]),
        ("Drawing", &["draw", "line", "rect", "circle"]),
        ("Query", &["is", "get", "want"]),
        ("Layout", &["push", "pop", "indent", "spacing"]),
    ];

    /// Section order in the rendered manifest.
    const SECTION_ORDER: &[&str] = &[
        "Container", "Input", "Display", "Layout", "Table", "Tree",
        "Menu", "Popup", "Drawing", "Query", "Other",
    ];

    pub struct Manifest {
        pub text: String,
        pub total: usize,
        pub sections: Vec<(&'static str, usize)>,
    }

    fn group_for(name: &str) -> &'static str {
        let lower = name.to_lowercase();
        for &(group, keywords) in GROUPS {
            if keywords.iter().any(|keyword| lower.contains(keyword)) {
                return group;
            }
        }
        "Other"
    }

    /// Build the manifest from implementation text.
    pub fn build(content: &str) -> Result<Manifest> {
        let pattern = Regex::new(r"(ImGui_\w+)\s*=\s*function\(([^)]*)\)")?;
        let functions: BTreeSet<(String, String)> = pattern
            .captures_iter(content)
            .map(|caps| (caps[1].to_string(), caps[2].to_string()))
            .collect();

        let mut text = String::new();
        text.push_str("# Enhanced Virtual REAPER - ImGui API Manifest\n");
        text.push_str(&format!(
            "Generated: {}\n\n",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        ));
        text.push_str(&format!("Total Functions: {}\n\n", functions.len()));

        let mut sections = Vec::new();
        for section in SECTION_ORDER {
            let funcs: Vec<&(String, String)> = functions
                .iter()
                .filter(|(name, _)| group_for(name) == *section)
                .collect();
            if funcs.is_empty() {
                continue;
            }
            sections.push((*section, funcs.len()));
            text.push_str(&format!("## {} Functions ({})\n\n", section, funcs.len()));
            for (name, params) in funcs {
                text.push_str(&format!("- `{name}({params})`\n"));
            }
            text.push('\n');
        }

        Ok(Manifest {
            text,
            total: functions.len(),
            sections,
        })
    }
}
