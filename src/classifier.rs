// Copyright (C) Brian G. Milnes 2025

//! Signature classifier: derives a plausible signature for a function
//! from its name alone.
//!
//! The rule table is an ordered list and the first matching rule wins;
//! the order is load-bearing (a name matching two rules must resolve to
//! the earlier one) and must not be reordered.

pub mod classifier {
    use anyhow::Result;
    use regex::Regex;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum Category {
        Container,
        Getter,
        Setter,
        Query,
        Stack,
        Widget,
        Input,
        Color,
        Display,
        Tree,
        Table,
        Menu,
        Tab,
        Popup,
        Constant,
        Unknown,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub enum ReturnShape {
        None,
        Boolean,
        Value,
        BooleanAndValue,
    }

    /// A classified function signature. Parameters always start with the
    /// implicit context parameter.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Signature {
        pub name: String,
        pub category: Category,
        pub returns: ReturnShape,
        pub params: Vec<String>,
    }

    /// The ordered category rule table. First match wins.
    const RULE_TABLE: &[(&str, Category, ReturnShape)] = &[
        ("^Begin", Category::Container, ReturnShape::Boolean),
        ("^End", Category::Container, ReturnShape::None),
        ("^Get", Category::Getter, ReturnShape::Value),
        ("^Set", Category::Setter, ReturnShape::None),
        ("^Is", Category::Query, ReturnShape::Boolean),
        ("^Push", Category::Stack, ReturnShape::None),
        ("^Pop", Category::Stack, ReturnShape::None),
        ("Button$", Category::Widget, ReturnShape::Boolean),
        ("Input", Category::Input, ReturnShape::BooleanAndValue),
        ("Slider", Category::Input, ReturnShape::BooleanAndValue),
        ("Drag", Category::Input, ReturnShape::BooleanAndValue),
        ("Color", Category::Color, ReturnShape::BooleanAndValue),
        ("Text", Category::Display, ReturnShape::None),
        ("Image", Category::Display, ReturnShape::None),
        ("Tree", Category::Tree, ReturnShape::Boolean),
        ("Table", Category::Table, ReturnShape::Boolean),
        ("Menu", Category::Menu, ReturnShape::Boolean),
        ("Tab", Category::Tab, ReturnShape::Boolean),
        ("Popup", Category::Popup, ReturnShape::Boolean),
        ("Flags", Category::Constant, ReturnShape::Value),
        ("Col_", Category::Constant, ReturnShape::Value),
        ("Key_", Category::Constant, ReturnShape::Value),
    ];

    struct Rule {
        pattern: Regex,
        category: Category,
        returns: ReturnShape,
    }

    pub struct Classifier {
        rules: Vec<Rule>,
    }

    impl Classifier {
        pub fn new() -> Result<Self> {
            let rules = RULE_TABLE
                .iter()
                .map(|&(pattern, category, returns)| {
                    Ok(Rule {
                        pattern: Regex::new(pattern)?,
                        category,
                        returns,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(Classifier { rules })
        }

        /// Classify a bare function name. Total and deterministic: every
        /// name yields a signature, unmatched names fall back to
        /// unknown/none.
        pub fn classify(&self, name: &str) -> Signature {
            let (category, returns) = self
                .rules
                .iter()
                .find(|rule| rule.pattern.is_match(name))
                .map(|rule| (rule.category, rule.returns))
                .unwrap_or((Category::Unknown, ReturnShape::None));

            let mut params = vec!["ctx".to_string()];

            match category {
                Category::Input | Category::Color => {
                    params.push("label".to_string());
                    params.push("value".to_string());
                }
                Category::Display => params.push("text".to_string()),
                Category::Widget => params.push("label".to_string()),
                Category::Setter => params.push("value".to_string()),
                _ => {}
            }

            // Substring augmentations stack independently of which
            // category rule fired, in this order.
            if name.contains("Size") {
                params.push("width".to_string());
                params.push("height".to_string());
            }
            if name.contains("Pos") {
                params.push("x".to_string());
                params.push("y".to_string());
            }
            if name.contains("Color") {
                params.push("color".to_string());
            }
            if name.contains("Flags") {
                params.push("flags".to_string());
            }

            Signature {
                name: name.to_string(),
                category,
                returns,
                params,
            }
        }
    }
}
