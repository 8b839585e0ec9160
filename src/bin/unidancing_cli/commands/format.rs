// ABOUTME: Formatting commands for unidancing-cli
// ABOUTME: Renders exercise attributes the way the app displays them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

use unidancing::formatters::{format_personal, FormatOptions, GlyphIcons};
use unidancing::models::Personal;

/// Print a formatted participation mode
pub fn personal(value: Personal, icon: bool, text: bool) {
    println!(
        "{}",
        format_personal(value, FormatOptions::new(icon, text), &GlyphIcons)
    );
}
