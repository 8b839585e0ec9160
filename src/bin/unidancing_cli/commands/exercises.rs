// ABOUTME: Exercise catalog commands for unidancing-cli
// ABOUTME: Lists exercises with filters and lists attached media by kind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

use std::path::Path;

use tracing::{info, warn};
use unidancing::catalog::{ExerciseCatalog, ExerciseFilter};
use unidancing::errors::AppResult;
use unidancing::models::{Difficulty, Locomotion, Media, MediaKind, Personal};

use crate::helpers::display::{display_exercise, display_media};

/// List exercises matching the given criteria
pub fn list(
    file: &Path,
    personal: Option<Personal>,
    difficulty: Option<Difficulty>,
    locomotion: Option<Locomotion>,
) -> AppResult<()> {
    let catalog = ExerciseCatalog::from_file(file)?;
    let filter = ExerciseFilter {
        personal,
        locomotion,
        difficulty,
    };

    let matches = catalog.filter(&filter);
    info!(
        total = catalog.len(),
        matched = matches.len(),
        "Filtered exercise catalog"
    );

    if matches.is_empty() {
        println!("No exercises match.");
        return Ok(());
    }
    for exercise in matches {
        display_exercise(exercise);
    }
    Ok(())
}

/// List media across the catalog, optionally of a single kind
pub fn media(file: &Path, kind: Option<MediaKind>) -> AppResult<()> {
    let catalog = ExerciseCatalog::from_file(file)?;

    let unclassified = catalog.unclassified_media();
    if !unclassified.is_empty() {
        warn!(
            count = unclassified.len(),
            "Catalog contains media with unknown type names"
        );
    }

    let media: Vec<&Media> = match kind {
        Some(kind) => catalog.media_of_kind(kind),
        None => catalog.iter().flat_map(|e| e.all_media()).collect(),
    };

    if media.is_empty() {
        println!("No media found.");
        return Ok(());
    }
    for item in media {
        display_media(item);
    }
    Ok(())
}
