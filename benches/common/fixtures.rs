// ABOUTME: Benchmark fixtures generating CMS exercise exports
// ABOUTME: Deterministic content so measurements are reproducible
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

//! Benchmark fixtures generating CMS exercise exports.

use serde_json::{json, Value};

/// Predefined catalog sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum CatalogSize {
    /// 10 exercises
    Small,
    /// 200 exercises
    Large,
}

impl CatalogSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Large => 200,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "10_exercises",
            Self::Large => "200_exercises",
        }
    }
}

const VARIANTS: [&str; 4] = ["Dancemix", "Loop", "Song", "Material"];
const PERSONAL: [&str; 3] = ["individual", "pair", "group"];
const DIFFICULTY: [&str; 3] = ["beginner", "intermediate", "advanced"];

/// One media payload; every 16th item carries an unknown type name
#[must_use]
pub fn media_value(index: usize, instruction_level: bool) -> Value {
    let prefix = if instruction_level {
        "ExerciseInstructionMedia"
    } else {
        "ExerciseMedia"
    };
    let typename = if index % 16 == 15 {
        format!("{prefix}Hologram")
    } else {
        format!("{prefix}{}", VARIANTS[index % VARIANTS.len()])
    };
    json!({
        "__typename": typename,
        "title": format!("Media {index}"),
        "url": format!("https://cdn.example.org/media/{index}"),
    })
}

/// One exercise with four media and three instructions of two media each
#[must_use]
pub fn exercise_value(index: usize) -> Value {
    let instructions: Vec<Value> = (0..3)
        .map(|step| {
            json!({
                "title": format!("Step {step}"),
                "media": [media_value(index + step, true), media_value(index + step + 1, true)],
            })
        })
        .collect();

    json!({
        "_sys": { "filename": format!("exercise-{index}") },
        "title": format!("Exercise {index}"),
        "personal": [PERSONAL[index % PERSONAL.len()]],
        "locomotion": if index % 2 == 0 { "unicycle" } else { "pedes" },
        "difficulty": DIFFICULTY[index % DIFFICULTY.len()],
        "tags": ["bench"],
        "instructions": instructions,
        "media": (0..4).map(|m| media_value(index + m, false)).collect::<Vec<_>>(),
    })
}

/// A catalog export as JSON text
#[must_use]
pub fn catalog_json(size: CatalogSize) -> String {
    Value::Array((0..size.count()).map(exercise_value).collect()).to_string()
}
