// Copyright (C) Brian G. Milnes 2025

//! Tests for the manifest writer

use stubforge::manifest::manifest::build;

const IMPLEMENTATION: &str = "\
  ImGui_Begin = function(ctx, label)
  end,
  ImGui_SliderInt = function(ctx, label, value)
  end,
  ImGui_CalcTextSize = function(ctx, text)
  end,
  ImGui_TreeNode = function(ctx, label)
  end,
  ImGui_PushID = function(ctx, id)
  end,
  ImGui_GetFontSize = function(ctx)
  end,
  ImGui_Separator = function(ctx)
  end,
";

#[test]
fn test_functions_are_grouped_by_keyword() {
    let manifest = build(IMPLEMENTATION).unwrap();

    assert_eq!(manifest.total, 7);
    assert!(manifest.text.contains("## Container Functions (1)"));
    assert!(manifest.text.contains("## Input Functions (1)"));
    assert!(manifest.text.contains("## Display Functions (1)"));
    assert!(manifest.text.contains("## Tree Functions (1)"));
    assert!(manifest.text.contains("## Layout Functions (1)"));
    assert!(manifest.text.contains("## Query Functions (1)"));
    assert!(manifest.text.contains("## Other Functions (1)"));
}

#[test]
fn test_entries_carry_raw_parameter_lists() {
    let manifest = build(IMPLEMENTATION).unwrap();

    assert!(manifest.text.contains("- `ImGui_Begin(ctx, label)`"));
    assert!(manifest.text.contains("- `ImGui_SliderInt(ctx, label, value)`"));
}

#[test]
fn test_empty_sections_are_omitted() {
    let manifest = build(IMPLEMENTATION).unwrap();

    assert!(!manifest.text.contains("## Popup Functions"));
    assert!(!manifest.text.contains("## Drawing Functions"));
}

#[test]
fn test_duplicate_definitions_count_once() {
    let content = "\
  ImGui_Begin = function(ctx, label)
  end,
  ImGui_Begin = function(ctx, label)
  end,
";

    let manifest = build(content).unwrap();

    assert_eq!(manifest.total, 1);
}

#[test]
fn test_section_counts_match_text() {
    let manifest = build(IMPLEMENTATION).unwrap();

    let summed: usize = manifest.sections.iter().map(|(_, count)| count).sum();
    assert_eq!(summed, manifest.total);
}
