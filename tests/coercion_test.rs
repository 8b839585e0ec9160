// ABOUTME: Integration tests for validating coercion of CMS strings and media payloads
// ABOUTME: Covers wire round trips, absent values, and rejected input through exercise parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serde_json::json;
use unidancing::errors::{AppError, DomainError, ErrorCode};
use unidancing::models::{
    as_difficulty, as_locomotion, as_media, as_media_collection, as_personal, Difficulty,
    Exercise, Locomotion, Personal,
};

#[test]
fn test_every_wire_string_round_trips() {
    for personal in Personal::ALL {
        let parsed = as_personal(Some(personal.as_str())).unwrap().unwrap();
        assert_eq!(parsed.as_str(), personal.as_str());
    }
    for locomotion in Locomotion::ALL {
        let parsed = as_locomotion(Some(locomotion.as_str())).unwrap().unwrap();
        assert_eq!(parsed, locomotion);
    }
    for difficulty in Difficulty::ALL {
        let parsed = as_difficulty(Some(difficulty.as_str())).unwrap().unwrap();
        assert_eq!(parsed, difficulty);
    }
}

#[test]
fn test_invalid_personal_names_field_and_input() {
    let err = as_personal(Some("trio")).unwrap_err();
    assert_eq!(
        err,
        DomainError::InvalidValue {
            field: "personal",
            value: "trio".to_owned()
        }
    );
    assert_eq!(err.to_string(), "invalid personal value: 'trio'");

    let app: AppError = err.into();
    assert_eq!(app.code, ErrorCode::InvalidInput);
    assert_eq!(app.http_status(), 400);
}

#[test]
fn test_missing_media_collection_is_empty() {
    assert!(as_media_collection(None).unwrap().is_empty());
    assert!(as_media_collection(Some(vec![None, None])).unwrap().is_empty());
}

#[test]
fn test_media_collection_keeps_order_and_skips_nulls() {
    let collection = as_media_collection(Some(vec![
        Some(json!({ "__typename": "ExerciseMediaLoop", "title": "a" })),
        None,
        Some(json!(null)),
        Some(json!({ "__typename": "ExerciseMediaSong", "title": "b" })),
    ]))
    .unwrap();

    let titles: Vec<_> = collection.iter().map(|m| m.str_field("title")).collect();
    assert_eq!(titles, [Some("a"), Some("b")]);
}

#[test]
fn test_invalid_media_entry_fails_collection() {
    let err = as_media_collection(Some(vec![Some(json!(42))])).unwrap_err();
    assert!(matches!(err, DomainError::InvalidMedia { .. }));
    assert!(as_media(Some(json!("song"))).is_err());
}

#[test]
fn test_exercise_with_invalid_personal_is_rejected() {
    let result = serde_json::from_value::<Exercise>(json!({
        "title": "Broken",
        "personal": ["pair", "crowd"]
    }));
    let err = result.unwrap_err().to_string();
    assert!(err.contains("invalid personal value: 'crowd'"), "{err}");
}

#[test]
fn test_exercise_optional_fields_default() {
    let exercise: Exercise = serde_json::from_value(json!({
        "title": "Minimal",
        "personal": [null, "group"],
        "instructions": [null],
        "media": null
    }))
    .unwrap();

    assert_eq!(exercise.personal, [Personal::Group]);
    assert_eq!(exercise.locomotion, None);
    assert_eq!(exercise.difficulty, None);
    assert!(exercise.instructions.is_empty());
    assert!(exercise.media.is_empty());
    assert!(exercise.slug.is_none());
}
