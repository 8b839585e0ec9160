// ABOUTME: Exercise catalog loaded from a CMS JSON export
// ABOUTME: Keeps CMS order and filters exercises by participation, locomotion, and difficulty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

use crate::errors::{AppError, AppResult, DomainError, DomainResult};
use crate::logging::AppLogger;
use crate::models::{Difficulty, Exercise, Locomotion, Media, MediaKind, Personal};
use serde_json::json;
use std::fs;
use std::path::Path;
use std::slice::Iter;

/// Criteria for selecting exercises; unset criteria match everything
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExerciseFilter {
    /// Required participation mode
    pub personal: Option<Personal>,
    /// Required locomotion
    pub locomotion: Option<Locomotion>,
    /// Required difficulty
    pub difficulty: Option<Difficulty>,
}

impl ExerciseFilter {
    /// Whether `exercise` satisfies every set criterion
    #[must_use]
    pub fn matches(&self, exercise: &Exercise) -> bool {
        self.personal.is_none_or(|p| exercise.supports(p))
            && self
                .locomotion
                .is_none_or(|l| exercise.locomotion == Some(l))
            && self
                .difficulty
                .is_none_or(|d| exercise.difficulty == Some(d))
    }
}

/// Ordered collection of exercises
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExerciseCatalog {
    exercises: Vec<Exercise>,
}

impl ExerciseCatalog {
    /// Catalog over already parsed exercises
    #[must_use]
    pub const fn new(exercises: Vec<Exercise>) -> Self {
        Self { exercises }
    }

    /// Parse a JSON array of CMS exercises
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Deserialization` if the JSON is malformed or an
    /// exercise carries an invalid enumerated value.
    pub fn from_json_str(json: &str) -> DomainResult<Self> {
        let exercises: Vec<Exercise> =
            serde_json::from_str(json).map_err(|e| DomainError::Deserialization {
                entity: "exercise catalog",
                reason: e.to_string(),
            })?;
        Ok(Self::new(exercises))
    }

    /// Load a catalog file
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be read, or an invalid
    /// format error if its content does not parse. Both carry the file path
    /// in their details.
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let with_path =
            |error: AppError| error.with_details(json!({ "path": path.display().to_string() }));
        let json = fs::read_to_string(path).map_err(|e| with_path(e.into()))?;
        let catalog = Self::from_json_str(&json).map_err(|e| with_path(e.into()))?;
        AppLogger::log_catalog_loaded(&path.display().to_string(), catalog.len());
        Ok(catalog)
    }

    /// Number of exercises
    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Exercises in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Exercise> {
        self.exercises.iter()
    }

    /// Exercise by slug
    #[must_use]
    pub fn find(&self, slug: &str) -> Option<&Exercise> {
        self.exercises
            .iter()
            .find(|exercise| exercise.slug.as_deref() == Some(slug))
    }

    /// Exercises matching `filter`, in catalog order
    #[must_use]
    pub fn filter(&self, filter: &ExerciseFilter) -> Vec<&Exercise> {
        self.exercises
            .iter()
            .filter(|exercise| filter.matches(exercise))
            .collect()
    }

    /// Media of one kind across all exercises, namespaces merged
    #[must_use]
    pub fn media_of_kind(&self, kind: MediaKind) -> Vec<&Media> {
        self.exercises
            .iter()
            .flat_map(|exercise| exercise.media_of_kind(kind))
            .collect()
    }

    /// Every song in the catalog
    #[must_use]
    pub fn songs(&self) -> Vec<&Media> {
        self.media_of_kind(MediaKind::Song)
    }

    /// Media whose type name is not a known variant
    #[must_use]
    pub fn unclassified_media(&self) -> Vec<&Media> {
        self.exercises
            .iter()
            .flat_map(Exercise::unclassified_media)
            .collect()
    }
}

impl<'a> IntoIterator for &'a ExerciseCatalog {
    type Item = &'a Exercise;
    type IntoIter = Iter<'a, Exercise>;

    fn into_iter(self) -> Self::IntoIter {
        self.exercises.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_matches_all() {
        let catalog = ExerciseCatalog::from_json_str(
            r#"[{"title": "Idle"}, {"title": "Spin", "difficulty": "advanced"}]"#,
        )
        .unwrap();
        assert_eq!(catalog.filter(&ExerciseFilter::default()).len(), 2);
    }

    #[test]
    fn test_invalid_enum_rejects_catalog() {
        let err = ExerciseCatalog::from_json_str(r#"[{"title": "Spin", "difficulty": "expert"}]"#)
            .unwrap_err();
        assert!(matches!(err, DomainError::Deserialization { .. }));
        assert!(err.to_string().contains("expert"));
    }
}
