// Copyright (C) Brian G. Milnes 2025

//! Tests for the signature classifier

use stubforge::classifier::classifier::{Category, Classifier, ReturnShape};

#[test]
fn test_get_window_size() {
    let classifier = Classifier::new().unwrap();
    let sig = classifier.classify("GetWindowSize");

    assert_eq!(sig.category, Category::Getter);
    assert_eq!(sig.returns, ReturnShape::Value);
    assert_eq!(sig.params, vec!["ctx", "width", "height"]);
}

#[test]
fn test_color_edit4() {
    let classifier = Classifier::new().unwrap();
    let sig = classifier.classify("ColorEdit4");

    assert_eq!(sig.category, Category::Color);
    assert_eq!(sig.returns, ReturnShape::BooleanAndValue);
    assert_eq!(sig.params, vec!["ctx", "label", "value", "color"]);
}

#[test]
fn test_classification_is_deterministic() {
    let classifier = Classifier::new().unwrap();

    assert_eq!(
        classifier.classify("SliderDouble"),
        classifier.classify("SliderDouble")
    );
}

#[test]
fn test_earlier_rule_wins() {
    let classifier = Classifier::new().unwrap();

    // BeginTable matches both ^Begin and Table; ^Begin is earlier.
    let begin_table = classifier.classify("BeginTable");
    assert_eq!(begin_table.category, Category::Container);
    assert_eq!(begin_table.returns, ReturnShape::Boolean);

    // EndPopup matches both ^End and Popup; ^End is earlier.
    let end_popup = classifier.classify("EndPopup");
    assert_eq!(end_popup.category, Category::Container);
    assert_eq!(end_popup.returns, ReturnShape::None);

    // GetColorU32 matches both ^Get and Color; ^Get is earlier.
    let get_color = classifier.classify("GetColorU32");
    assert_eq!(get_color.category, Category::Getter);
    assert_eq!(get_color.returns, ReturnShape::Value);

    // Col_Text matches both Text and Col_; Text is earlier in the table.
    let col_text = classifier.classify("Col_Text");
    assert_eq!(col_text.category, Category::Display);
}

#[test]
fn test_input_before_text() {
    let classifier = Classifier::new().unwrap();
    let sig = classifier.classify("InputText");

    assert_eq!(sig.category, Category::Input);
    assert_eq!(sig.returns, ReturnShape::BooleanAndValue);
    assert_eq!(sig.params, vec!["ctx", "label", "value"]);
}

#[test]
fn test_query_has_only_context_param() {
    let classifier = Classifier::new().unwrap();
    let sig = classifier.classify("IsWindowFocused");

    assert_eq!(sig.category, Category::Query);
    assert_eq!(sig.returns, ReturnShape::Boolean);
    assert_eq!(sig.params, vec!["ctx"]);
}

#[test]
fn test_setter_augmentations_stack() {
    let classifier = Classifier::new().unwrap();
    let sig = classifier.classify("SetCursorPos");

    assert_eq!(sig.category, Category::Setter);
    assert_eq!(sig.params, vec!["ctx", "value", "x", "y"]);
}

#[test]
fn test_color_and_flags_augmentations_stack_in_order() {
    let classifier = Classifier::new().unwrap();
    let sig = classifier.classify("ColorEditFlags");

    assert_eq!(sig.category, Category::Color);
    assert_eq!(sig.params, vec!["ctx", "label", "value", "color", "flags"]);
}

#[test]
fn test_constants() {
    let classifier = Classifier::new().unwrap();

    let flags = classifier.classify("WindowFlags_NoTitleBar");
    assert_eq!(flags.category, Category::Constant);
    assert_eq!(flags.returns, ReturnShape::Value);
    assert_eq!(flags.params, vec!["ctx", "flags"]);

    let col = classifier.classify("Col_Border");
    assert_eq!(col.category, Category::Constant);

    let key = classifier.classify("Key_Escape");
    assert_eq!(key.category, Category::Constant);
}

#[test]
fn test_unmatched_name_is_unknown() {
    let classifier = Classifier::new().unwrap();
    let sig = classifier.classify("Spacing");

    assert_eq!(sig.category, Category::Unknown);
    assert_eq!(sig.returns, ReturnShape::None);
    assert_eq!(sig.params, vec!["ctx"]);
}
