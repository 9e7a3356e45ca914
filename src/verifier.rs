// Copyright (C) Brian G. Milnes 2025

//! Integration verifier: re-scans the generated-stub file and the
//! post-splice implementation file and compares their function sets.

pub mod verifier {
    use anyhow::Result;
    use serde::{Deserialize, Serialize};
    use crate::scanner::scanner::implemented_functions;
    use crate::synthesizer::synthesizer::GENERATED_MARKER;

    /// Bare names (under the `ImGui_` prefix) any usable virtual
    /// environment must define, independent of what was generated.
    pub const REQUIRED_FUNCTIONS: &[&str] = &[
        "Begin",
        "End",
        "Text",
        "Button",
        "InputText",
        "SliderDouble",
        "ColorEdit3",
        "BeginTable",
        "TableNextColumn",
        "TreeNode",
        "IsItemHovered",
        "PushID",
        "PopID",
    ];

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct IntegrationReport {
        /// Functions defined in the generated stub file
        pub generated_count: usize,
        /// Functions defined in the implementation file
        pub present_count: usize,
        /// Generated functions absent from the implementation
        pub missing: Vec<String>,
        /// Implementation functions beyond the generated set
        pub extra: Vec<String>,
        /// Required functions absent from the implementation
        pub absent_required: Vec<String>,
        pub file_size_bytes: usize,
        pub line_count: usize,
        /// Occurrences of the generated-block marker in the implementation
        pub marker_count: usize,
    }

    impl IntegrationReport {
        /// Success means every generated stub made it into the target and
        /// the required set is present. Extra hand-written functions in
        /// the target are allowed.
        pub fn success(&self) -> bool {
            self.missing.is_empty() && self.absent_required.is_empty()
        }
    }

    /// Compare the generated stub text against the implementation text.
    /// Pure function of the two texts; repeated runs over unchanged
    /// files produce identical reports.
    pub fn verify(generated: &str, target: &str) -> Result<IntegrationReport> {
        let generated_names = implemented_functions(generated)?;
        let target_names = implemented_functions(target)?;

        let missing: Vec<String> = generated_names.difference(&target_names).cloned().collect();
        let extra: Vec<String> = target_names.difference(&generated_names).cloned().collect();
        let absent_required: Vec<String> = REQUIRED_FUNCTIONS
            .iter()
            .filter(|name| !target_names.contains(**name))
            .map(|name| name.to_string())
            .collect();

        Ok(IntegrationReport {
            generated_count: generated_names.len(),
            present_count: target_names.len(),
            missing,
            extra,
            absent_required,
            file_size_bytes: target.len(),
            line_count: target.matches('\n').count(),
            marker_count: target.matches(GENERATED_MARKER).count(),
        })
    }
}
