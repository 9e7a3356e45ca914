// Copyright (C) Brian G. Milnes 2025

//! Tests for the file splicer

use std::fs;
use std::path::Path;
use stubforge::logging::logging::RunLog;
use stubforge::splicer::splicer::{backup_path_for, integrate, Splicer};

const TARGET_WITH_TRAILING_ANCHOR: &str = "\
-- virtual environment
local env = {
  ImGui_Begin = function(ctx, label)
    return false
  end,

  ImGui_TabItemFlags_Trailing = function() return 128 end,
}
";

const TARGET_WITH_FRAMEWORK_ANCHOR: &str = "\
local env = {
  ImGui_Begin = function(ctx, label)
    return false
  end,
}

-- ==================== VIRTUAL TESTING FRAMEWORK ====================
local function run_tests() end
";

const BLOCK: &str = "\n  ImGui_TreePop = function(ctx)\n    log_api_call(\"ImGui_TreePop\", ctx)\n  end,\n";

#[test]
fn test_splice_after_trailing_anchor() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("env.lua");
    fs::write(&target, TARGET_WITH_TRAILING_ANCHOR).unwrap();

    let splicer = Splicer::new().unwrap();
    let report = splicer.splice_file(&target, BLOCK).unwrap();

    let updated = fs::read_to_string(&target).unwrap();
    let anchor_at = updated
        .find("ImGui_TabItemFlags_Trailing = function() return 128 end,")
        .unwrap();
    let block_at = updated.find("ImGui_TreePop").unwrap();
    assert!(block_at > anchor_at, "block must land after the anchor");
    assert_eq!(report.inserted_bytes, BLOCK.len());
}

#[test]
fn test_backup_matches_pre_splice_content() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("env.lua");
    fs::write(&target, TARGET_WITH_TRAILING_ANCHOR).unwrap();

    let splicer = Splicer::new().unwrap();
    let report = splicer.splice_file(&target, BLOCK).unwrap();

    let backup = fs::read_to_string(&report.backup_path).unwrap();
    assert_eq!(backup, TARGET_WITH_TRAILING_ANCHOR);
}

#[test]
fn test_splice_before_framework_anchor() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("env.lua");
    fs::write(&target, TARGET_WITH_FRAMEWORK_ANCHOR).unwrap();

    let splicer = Splicer::new().unwrap();
    splicer.splice_file(&target, BLOCK).unwrap();

    let updated = fs::read_to_string(&target).unwrap();
    let block_at = updated.find("ImGui_TreePop").unwrap();
    let framework_at = updated.find("VIRTUAL TESTING FRAMEWORK").unwrap();
    let brace_at = updated.find("\n}").unwrap();
    assert!(block_at < framework_at, "block must land before the framework");
    assert!(block_at < brace_at, "block must land inside the table");
}

#[test]
fn test_missing_anchor_mutates_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("env.lua");
    let original = "print('no anchors here')\n";
    fs::write(&target, original).unwrap();

    let splicer = Splicer::new().unwrap();
    let result = splicer.splice_file(&target, BLOCK);

    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&target).unwrap(), original);
    assert!(!backup_path_for(&target).exists(), "no backup on failure");
}

#[test]
fn test_backup_path_naming() {
    let backup = backup_path_for(Path::new("enhanced_virtual_reaper.lua"));

    assert_eq!(backup, Path::new("enhanced_virtual_reaper_backup.lua"));
}

#[test]
fn test_strip_header_keeps_definitions_only() {
    let generated = "\
  -- ==================== AUTO-GENERATED IMGUI FUNCTIONS ====================
  -- Generated by stubforge-generate
  -- Date: 2025-05-30 12:00:00

  ImGui_Bullet = function(ctx)
    log_api_call(\"ImGui_Bullet\", ctx)
  end,

  ImGui_TreePop = function(ctx)
    log_api_call(\"ImGui_TreePop\", ctx)
  end,
";

    let stripped = Splicer::strip_header(generated);

    assert!(stripped.starts_with("  ImGui_Bullet = function(ctx)"));
    assert!(!stripped.contains("Generated by"));
    // Blank separator lines are dropped along with the header.
    assert!(!stripped.contains("\n\n"));
}

#[test]
fn test_integrate_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let generated_path = dir.path().join("generated.lua");
    let target = dir.path().join("env.lua");

    let generated = "\
  -- ==================== AUTO-GENERATED IMGUI FUNCTIONS ====================
  -- Date: 2025-05-30 12:00:00

  ImGui_TreePop = function(ctx)
    log_api_call(\"ImGui_TreePop\", ctx)
  end,
";
    fs::write(&generated_path, generated).unwrap();
    fs::write(&target, TARGET_WITH_TRAILING_ANCHOR).unwrap();

    let ok = integrate(&generated_path, &target, &mut RunLog::disabled()).unwrap();

    assert!(ok);
    let updated = fs::read_to_string(&target).unwrap();
    assert!(updated.contains("AUTO-GENERATED IMGUI FUNCTIONS"));
    assert!(updated.contains("ImGui_TreePop = function(ctx)"));
    assert!(backup_path_for(&target).exists());
}

#[test]
fn test_integrate_with_missing_generated_file_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("env.lua");
    fs::write(&target, TARGET_WITH_TRAILING_ANCHOR).unwrap();

    let ok = integrate(
        &dir.path().join("no_such_generated.lua"),
        &target,
        &mut RunLog::disabled(),
    )
    .unwrap();

    assert!(!ok);
    assert_eq!(
        fs::read_to_string(&target).unwrap(),
        TARGET_WITH_TRAILING_ANCHOR
    );
}
