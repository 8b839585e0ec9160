// ABOUTME: Icon resolution for display formatters
// ABOUTME: Maps icon keys (personal, locomotion, difficulty values) to renderable glyphs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

/// Resolves an icon key to its rendered representation
pub trait IconResolver {
    /// Icon for `key`; unknown keys still produce a placeholder
    fn icon(&self, key: &str) -> String;
}

/// Placeholder used for unknown icon keys
pub const UNKNOWN_ICON: &str = "?";

/// Terminal-friendly glyph icons
#[derive(Debug, Clone, Copy, Default)]
pub struct GlyphIcons;

impl IconResolver for GlyphIcons {
    fn icon(&self, key: &str) -> String {
        let glyph = match key {
            "individual" => "👤",
            "pair" => "👥",
            "group" => "👪",
            "unicycle" => "🎡",
            "pedes" => "👣",
            "beginner" => "★☆☆",
            "intermediate" => "★★☆",
            "advanced" => "★★★",
            _ => UNKNOWN_ICON,
        };
        glyph.to_owned()
    }
}

impl<F> IconResolver for F
where
    F: Fn(&str) -> String,
{
    fn icon(&self, key: &str) -> String {
        self(key)
    }
}
