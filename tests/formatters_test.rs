// ABOUTME: Integration tests for display formatters
// ABOUTME: Verifies option defaults, icon and label composition, and custom icon resolvers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use unidancing::formatters::{
    format_difficulty, format_locomotion, format_personal, FormatOptions, GlyphIcons,
    IconResolver,
};
use unidancing::models::{Difficulty, Locomotion, Personal};

struct TagIcons;

impl IconResolver for TagIcons {
    fn icon(&self, key: &str) -> String {
        format!("[{key}]")
    }
}

#[test]
fn test_icon_and_text() {
    let out = format_personal(Personal::Individual, FormatOptions::icon_and_text(), &TagIcons);
    assert_eq!(out, "[individual] Einzel");

    let glyphs = format_personal(Personal::Individual, FormatOptions::icon_and_text(), &GlyphIcons);
    assert_eq!(glyphs, format!("{} Einzel", GlyphIcons.icon("individual")));
}

#[test]
fn test_default_options_render_icon_only() {
    assert_eq!(
        format_personal(Personal::Pair, FormatOptions::default(), &TagIcons),
        "[pair]"
    );
}

#[test]
fn test_text_only() {
    assert_eq!(
        format_personal(Personal::Group, FormatOptions::text_only(), &TagIcons),
        "Gruppe"
    );
}

#[test]
fn test_options_deserialize_with_partial_fields() {
    let options: FormatOptions = serde_json::from_str(r#"{"text": true}"#).unwrap();
    assert_eq!(
        format_personal(Personal::Pair, options, &TagIcons),
        "[pair] Paar"
    );

    let options: FormatOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, FormatOptions::default());
}

#[test]
fn test_every_personal_has_a_label() {
    let labels: Vec<_> = Personal::ALL
        .into_iter()
        .map(|p| format_personal(p, FormatOptions::text_only(), &TagIcons))
        .collect();
    assert_eq!(labels, ["Einzel", "Paar", "Gruppe"]);
}

#[test]
fn test_sibling_formatters() {
    assert_eq!(
        format_locomotion(Locomotion::Unicycle, FormatOptions::icon_and_text(), &TagIcons),
        "[unicycle] Einrad"
    );
    let labels: Vec<_> = Difficulty::ALL
        .into_iter()
        .map(|d| format_difficulty(d, FormatOptions::text_only(), &TagIcons))
        .collect();
    assert_eq!(labels, ["Anfänger", "Fortgeschritten", "Experte"]);
}

#[test]
fn test_closure_icon_resolver() {
    let resolver = |key: &str| key.to_uppercase();
    assert_eq!(
        format_personal(Personal::Group, FormatOptions::default(), &resolver),
        "GROUP"
    );
}
