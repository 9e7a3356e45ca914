// Copyright (C) Brian G. Milnes 2025

//! Tests for the call-site extractor

use std::fs;
use std::path::Path;
use stubforge::extractor::extractor::Extractor;

#[test]
fn test_counts_are_additive_across_patterns() {
    // Three prefixed-underscore calls plus one context-object call: the
    // occurrence count is the sum over all recognizers.
    let source = "\
ImGui_Foo(ctx, 1)
ImGui_Foo(ctx, 2)
ImGui_Foo(ctx, 3)
ctx.Foo(x)
";

    let extractor = Extractor::new().unwrap();
    let functions = extractor.extract(source).unwrap();

    let record = functions.get("Foo").expect("Foo not discovered");
    assert_eq!(record.count, 4);
}

#[test]
fn test_overlapping_patterns_double_count() {
    // r.ImGui_Begin( matches both the module-alias recognizer and the
    // bare ImGui_ recognizer; overlap is not deduplicated.
    let source = "r.ImGui_Begin(ctx, 'Window', true)\n";

    let extractor = Extractor::new().unwrap();
    let functions = extractor.extract(source).unwrap();

    assert_eq!(functions.get("Begin").unwrap().count, 2);
}

#[test]
fn test_namespace_dot_call() {
    let source = "local ctx2 = ImGui.CreateContext('demo')\n";

    let extractor = Extractor::new().unwrap();
    let functions = extractor.extract(source).unwrap();

    let record = functions.get("CreateContext").unwrap();
    assert_eq!(record.count, 1);
    assert_eq!(record.variations, vec!["'demo'".to_string()]);
}

#[test]
fn test_param_list_truncates_at_first_close_paren() {
    // No parenthesis balancing: a nested call truncates the captured
    // list at its own close paren.
    let source = "ImGui.Foo(a, Bar(b), c)\n";

    let extractor = Extractor::new().unwrap();
    let functions = extractor.extract(source).unwrap();

    let record = functions.get("Foo").unwrap();
    assert_eq!(record.variations, vec!["a, Bar(b".to_string()]);
}

#[test]
fn test_missing_file_yields_empty_result() {
    let extractor = Extractor::new().unwrap();
    let functions = extractor
        .extract_file(Path::new("no_such_source_file.lua"))
        .unwrap();

    assert!(functions.is_empty());
}

#[test]
fn test_extract_files_merges_counts() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.lua");
    let second = dir.path().join("second.lua");
    fs::write(&first, "ImGui_Quux(ctx)\n").unwrap();
    fs::write(&second, "ImGui_Quux(ctx)\nImGui_Quux(ctx)\n").unwrap();

    let extractor = Extractor::new().unwrap();
    let functions = extractor.extract_files(&[first, second]).unwrap();

    assert_eq!(functions.get("Quux").unwrap().count, 3);
}
