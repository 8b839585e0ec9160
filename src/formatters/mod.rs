// ABOUTME: Display formatters for exercise attributes shown in the UI
// ABOUTME: Renders participation mode, locomotion, and difficulty as icon and/or German label
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

//! Display Formatters
//!
//! Each formatter renders an icon, a label, or both joined by a single
//! space. The icon comes from an [`IconResolver`], labels are the German UI
//! strings from [`crate::constants::labels`].
//!
//! ```rust,ignore
//! use unidancing::formatters::{format_personal, FormatOptions, GlyphIcons};
//! use unidancing::models::Personal;
//!
//! let out = format_personal(Personal::Group, FormatOptions::text_only(), &GlyphIcons);
//! assert_eq!(out, "Gruppe");
//! ```

/// Icon resolution
pub mod icons;

pub use icons::{GlyphIcons, IconResolver, UNKNOWN_ICON};

use crate::constants::labels;
use crate::models::{Difficulty, Locomotion, Personal};
use serde::{Deserialize, Serialize};

/// Which parts to render
///
/// Unset fields take the defaults: icon on, text off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Render the icon
    #[serde(default)]
    pub icon: Option<bool>,
    /// Render the label
    #[serde(default)]
    pub text: Option<bool>,
}

impl FormatOptions {
    const DEFAULT_ICON: bool = true;
    const DEFAULT_TEXT: bool = false;

    /// Options with both parts set explicitly
    #[must_use]
    pub const fn new(icon: bool, text: bool) -> Self {
        Self {
            icon: Some(icon),
            text: Some(text),
        }
    }

    /// Label without icon
    #[must_use]
    pub const fn text_only() -> Self {
        Self::new(false, true)
    }

    /// Icon followed by label
    #[must_use]
    pub const fn icon_and_text() -> Self {
        Self::new(true, true)
    }

    /// Whether the icon is rendered
    #[must_use]
    pub fn show_icon(&self) -> bool {
        self.icon.unwrap_or(Self::DEFAULT_ICON)
    }

    /// Whether the label is rendered
    #[must_use]
    pub fn show_text(&self) -> bool {
        self.text.unwrap_or(Self::DEFAULT_TEXT)
    }
}

/// A value with an icon key and a display label
pub trait Displayable {
    /// Key passed to the icon resolver
    fn icon_key(&self) -> &'static str;

    /// Human readable label
    fn label(&self) -> &'static str;
}

impl Displayable for Personal {
    fn icon_key(&self) -> &'static str {
        self.as_str()
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Individual => labels::personal::INDIVIDUAL,
            Self::Pair => labels::personal::PAIR,
            Self::Group => labels::personal::GROUP,
        }
    }
}

impl Displayable for Locomotion {
    fn icon_key(&self) -> &'static str {
        self.as_str()
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Unicycle => labels::locomotion::UNICYCLE,
            Self::Pedes => labels::locomotion::PEDES,
        }
    }
}

impl Displayable for Difficulty {
    fn icon_key(&self) -> &'static str {
        self.as_str()
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Beginner => labels::difficulty::BEGINNER,
            Self::Intermediate => labels::difficulty::INTERMEDIATE,
            Self::Advanced => labels::difficulty::ADVANCED,
        }
    }
}

/// Render any [`Displayable`] value
#[must_use]
pub fn format_value<T, R>(value: &T, options: FormatOptions, icons: &R) -> String
where
    T: Displayable + ?Sized,
    R: IconResolver + ?Sized,
{
    let mut parts = Vec::with_capacity(2);
    if options.show_icon() {
        parts.push(icons.icon(value.icon_key()));
    }
    if options.show_text() {
        parts.push(value.label().to_owned());
    }
    parts.join(" ")
}

/// Render a participation mode
#[must_use]
pub fn format_personal<R>(personal: Personal, options: FormatOptions, icons: &R) -> String
where
    R: IconResolver + ?Sized,
{
    format_value(&personal, options, icons)
}

/// Render a locomotion mode
#[must_use]
pub fn format_locomotion<R>(locomotion: Locomotion, options: FormatOptions, icons: &R) -> String
where
    R: IconResolver + ?Sized,
{
    format_value(&locomotion, options, icons)
}

/// Render a difficulty level
#[must_use]
pub fn format_difficulty<R>(difficulty: Difficulty, options: FormatOptions, icons: &R) -> String
where
    R: IconResolver + ?Sized,
{
    format_value(&difficulty, options, icons)
}
