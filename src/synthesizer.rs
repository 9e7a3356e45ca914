// Copyright (C) Brian G. Milnes 2025

//! Stub synthesizer: renders Lua virtual implementations for classified
//! signatures, plus the companion integration-instructions text and the
//! static validation script.

pub mod synthesizer {
    use chrono::Local;
    use crate::classifier::classifier::{Category, ReturnShape, Signature};

    /// Marker comment used in generated headers and splice blocks; the
    /// verifier counts occurrences of this text in the target file.
    pub const GENERATED_MARKER: &str = "AUTO-GENERATED IMGUI FUNCTIONS";

    /// Render the virtual implementation stub for one signature:
    /// declaration, a logging call passing through all parameters, then
    /// the category-specific mock body.
    pub fn render_stub(sig: &Signature) -> String {
        let params = sig.params.join(", ");
        let mut lines = Vec::new();

        lines.push(format!("  ImGui_{} = function({})", sig.name, params));
        lines.push(format!("    log_api_call(\"ImGui_{}\", {})", sig.name, params));

        match sig.category {
            Category::Getter => {
                if sig.name.contains("Size") {
                    lines.push("    return 100, 50".to_string());
                } else if sig.name.contains("Pos") {
                    lines.push("    return 10, 20".to_string());
                } else if sig.name.contains("Color") {
                    lines.push("    return 0xFFFFFFFF".to_string());
                } else {
                    lines.push("    return 0".to_string());
                }
            }
            Category::Query => {
                lines.push("    return false".to_string());
            }
            Category::Input => {
                lines.push("    ctx.stats.widgets_drawn = ctx.stats.widgets_drawn + 1".to_string());
                lines.push("    return false, value or 0".to_string());
            }
            Category::Widget | Category::Container => {
                lines.push("    ctx.stats.widgets_drawn = ctx.stats.widgets_drawn + 1".to_string());
                lines.push("    return false".to_string());
            }
            Category::Constant => {
                lines.push("    return 0".to_string());
            }
            _ => match sig.returns {
                ReturnShape::Boolean | ReturnShape::BooleanAndValue => {
                    lines.push("    return false".to_string());
                }
                ReturnShape::Value => {
                    lines.push("    return 0".to_string());
                }
                ReturnShape::None => {}
            },
        }

        lines.push("  end,".to_string());
        lines.push(String::new());

        lines.join("\n")
    }

    /// Render the full generated file: marker header plus one stub per
    /// signature, sorted by function name.
    pub fn render_block(signatures: &[Signature]) -> String {
        let mut sorted: Vec<&Signature> = signatures.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));

        let mut out = vec![
            format!("  -- ==================== {GENERATED_MARKER} ===================="),
            "  -- Generated by stubforge-generate".to_string(),
            format!("  -- Date: {}", Local::now().format("%Y-%m-%d %H:%M:%S")),
            String::new(),
        ];
        for sig in sorted {
            out.push(render_stub(sig));
        }

        out.join("\n")
    }

    /// Render the plain-text integration instructions for a generated
    /// stub file.
    pub fn render_instructions(output_name: &str, implementation_name: &str, count: usize) -> String {
        let lines = [
            "INTEGRATION INSTRUCTIONS FOR AUTO-GENERATED IMGUI FUNCTIONS".to_string(),
            "=".repeat(60),
            String::new(),
            format!("Generated {count} missing ImGui function implementations."),
            String::new(),
            format!("To integrate these functions into {implementation_name}:"),
            String::new(),
            format!("1. Open {implementation_name}"),
            "2. Locate the end of the existing ImGui function definitions".to_string(),
            format!("3. Insert the generated code from: {output_name}"),
            "4. Make sure the functions are inside the main environment table".to_string(),
            "5. Test the implementation against the mined scripts".to_string(),
            String::new(),
            "TESTING:".to_string(),
            "- Run the mined scripts against the virtual environment".to_string(),
            "- Check for any missing function errors".to_string(),
            "- Verify that all function calls are logged properly".to_string(),
            String::new(),
            "CUSTOMIZATION:".to_string(),
            "- Review generated functions for more realistic behavior".to_string(),
            "- Add proper parameter validation where needed".to_string(),
            "- Implement category-specific mock data as required".to_string(),
            String::new(),
            format!("Generated: {}", Local::now().format("%Y-%m-%d %H:%M:%S")),
        ];
        lines.join("\n")
    }

    /// Static validation script exercising the virtual environment. Not
    /// templated per run.
    pub const VALIDATION_TEST: &str = r##"#!/usr/bin/env lua
-- validation_test.lua
-- Test script for the ImGui virtual environment

-- Load the virtual environment
dofile("enhanced_virtual_reaper.lua")

-- Create test context
local ctx = ImGui_CreateContext('ValidationTest')

print('Starting virtual environment validation test')
print('=' .. string.rep('=', 40))

-- Test basic window operations
local function test_basic_operations()
  print('Testing basic window operations...')

  if ImGui_Begin(ctx, 'Test Window', true, 0) then
    ImGui_Text(ctx, 'Hello, Virtual World!')

    if ImGui_Button(ctx, 'Test Button') then
      print('Button clicked (virtual)')
    end

    ImGui_End(ctx)
  end
end

-- Test various widget types
local function test_widgets()
  print('Testing widget implementations...')

  ImGui_Text(ctx, 'Testing text widgets')
  ImGui_Button(ctx, 'Testing buttons')
  ImGui_Checkbox(ctx, 'Test Checkbox', false)
  ImGui_SliderInt(ctx, 'Test Slider', 0, 0, 100)
end

-- Run tests
test_basic_operations()
test_widgets()

-- Print statistics
print('')
print('Validation results:')
print('   API calls made: ' .. (ctx.stats.api_calls or 0))
print('   Widgets drawn: ' .. (ctx.stats.widgets_drawn or 0))
print('   Errors: ' .. (ctx.stats.errors or 0))
print('   Warnings: ' .. (ctx.stats.warnings or 0))

-- Cleanup
ImGui_DestroyContext(ctx)
print('Validation test completed')
"##;
}
