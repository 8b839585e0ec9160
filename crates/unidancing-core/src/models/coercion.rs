// ABOUTME: Validating parsers that turn loosely typed CMS values into domain types
// ABOUTME: Absent stays absent; invalid input is reported instead of silently passed on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

//! # Coercion
//!
//! CMS fields are optional strings (or optional JSON values for media). Each
//! function here maps:
//!
//! - `None` to `Ok(None)` (or an empty collection),
//! - a valid value to `Ok(Some(..))` whose wire string equals the input,
//! - anything else to a [`DomainError`] naming the field and the input.

use serde_json::Value;
use tracing::debug;

use super::exercise::{Difficulty, Locomotion, Personal};
use super::media::Media;
use crate::errors::DomainResult;

/// Parse an optional participation mode
///
/// # Errors
///
/// Returns `DomainError::InvalidValue` if the string is not `individual`, `pair` or `group`.
pub fn as_personal(value: Option<&str>) -> DomainResult<Option<Personal>> {
    value.map(str::parse).transpose()
}

/// Parse an optional locomotion mode
///
/// # Errors
///
/// Returns `DomainError::InvalidValue` if the string is not `unicycle` or `pedes`.
pub fn as_locomotion(value: Option<&str>) -> DomainResult<Option<Locomotion>> {
    value.map(str::parse).transpose()
}

/// Parse an optional difficulty
///
/// # Errors
///
/// Returns `DomainError::InvalidValue` if the string is not `beginner`,
/// `intermediate` or `advanced`.
pub fn as_difficulty(value: Option<&str>) -> DomainResult<Option<Difficulty>> {
    value.map(str::parse).transpose()
}

/// Parse an optional media payload
///
/// # Errors
///
/// Returns `DomainError::InvalidMedia` if the value is present but not an object.
pub fn as_media(value: Option<Value>) -> DomainResult<Option<Media>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(value) => Media::from_value(value).map(Some),
    }
}

/// Parse an optional media collection
///
/// A missing collection yields an empty one and `null` entries are skipped.
///
/// # Errors
///
/// Returns `DomainError::InvalidMedia` for the first entry that is not an object.
pub fn as_media_collection(value: Option<Vec<Option<Value>>>) -> DomainResult<Vec<Media>> {
    let Some(items) = value else {
        return Ok(Vec::new());
    };

    let total = items.len();
    let media = items
        .into_iter()
        .filter_map(|item| as_media(item).transpose())
        .collect::<DomainResult<Vec<_>>>()?;

    if media.len() < total {
        debug!(
            total,
            kept = media.len(),
            "Skipped null entries in media collection"
        );
    }
    Ok(media)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;
    use serde_json::json;

    #[test]
    fn test_personal_identity_on_wire_string() {
        let parsed = as_personal(Some("individual")).unwrap();
        assert_eq!(parsed, Some(Personal::Individual));
        assert_eq!(parsed.map(|p| p.as_str()), Some("individual"));
    }

    #[test]
    fn test_absent_stays_absent() {
        assert_eq!(as_personal(None).unwrap(), None);
        assert_eq!(as_locomotion(None).unwrap(), None);
        assert_eq!(as_difficulty(None).unwrap(), None);
        assert_eq!(as_media(None).unwrap(), None);
        assert_eq!(as_media(Some(Value::Null)).unwrap(), None);
    }

    #[test]
    fn test_invalid_values_are_reported() {
        assert_eq!(
            as_locomotion(Some("bicycle")).unwrap_err(),
            DomainError::invalid_value("locomotion", "bicycle")
        );
        assert!(as_difficulty(Some("Beginner")).is_err());
        assert!(matches!(
            as_media(Some(json!(42))).unwrap_err(),
            DomainError::InvalidMedia { .. }
        ));
    }

    #[test]
    fn test_media_collection_shapes() {
        assert!(as_media_collection(None).unwrap().is_empty());
        assert!(as_media_collection(Some(vec![])).unwrap().is_empty());

        let media = as_media_collection(Some(vec![
            None,
            Some(json!({ "__typename": "ExerciseMediaLoop" })),
            Some(Value::Null),
        ]))
        .unwrap();
        assert_eq!(media.len(), 1);
        assert!(media[0].is_loop());
    }
}
