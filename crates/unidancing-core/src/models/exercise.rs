// ABOUTME: Exercise and instruction models with participation, locomotion, and difficulty enums
// ABOUTME: Parses CMS exercise records and exposes namespace-independent media collections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::coercion::{as_difficulty, as_locomotion, as_media_collection, as_personal};
use super::media::{Media, MediaKind};
use crate::errors::DomainError;

// ============================================================================
// Enumerated attributes
// ============================================================================

/// How many people take part in an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Personal {
    /// Solo exercise
    Individual,
    /// Partner exercise
    Pair,
    /// Group exercise
    Group,
}

impl Personal {
    /// All variants in declaration order
    pub const ALL: [Self; 3] = [Self::Individual, Self::Pair, Self::Group];

    /// Wire representation used by the CMS
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Pair => "pair",
            Self::Group => "group",
        }
    }
}

impl FromStr for Personal {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "individual" => Ok(Self::Individual),
            "pair" => Ok(Self::Pair),
            "group" => Ok(Self::Group),
            other => Err(DomainError::invalid_value("personal", other)),
        }
    }
}

impl fmt::Display for Personal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an exercise is done on the unicycle or on foot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locomotion {
    /// On the unicycle
    Unicycle,
    /// On foot
    Pedes,
}

impl Locomotion {
    /// All variants in declaration order
    pub const ALL: [Self; 2] = [Self::Unicycle, Self::Pedes];

    /// Wire representation used by the CMS
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unicycle => "unicycle",
            Self::Pedes => "pedes",
        }
    }
}

impl FromStr for Locomotion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unicycle" => Ok(Self::Unicycle),
            "pedes" => Ok(Self::Pedes),
            other => Err(DomainError::invalid_value("locomotion", other)),
        }
    }
}

impl fmt::Display for Locomotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Skill level an exercise is aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// No prior experience needed
    Beginner,
    /// Requires some practice
    Intermediate,
    /// For experienced riders
    Advanced,
}

impl Difficulty {
    /// All variants, easiest first
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Wire representation used by the CMS
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(DomainError::invalid_value("difficulty", other)),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Exercise records
// ============================================================================

/// One step of an exercise
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawInstruction")]
pub struct Instruction {
    /// Optional step heading
    pub title: Option<String>,
    /// Step body (CMS rich text, passed through)
    pub text: Option<Value>,
    /// Media attached to this step (instruction namespace)
    pub media: Vec<Media>,
}

/// A training unit from the CMS
///
/// Read-only view of CMS content; it is deserialized, never written back.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawExercise")]
pub struct Exercise {
    /// File-based identifier, when the CMS provides one
    pub slug: Option<String>,
    /// Display title
    pub title: String,
    /// Short description (CMS rich text, passed through)
    pub description: Option<Value>,
    /// Supported participation modes
    pub personal: Vec<Personal>,
    /// Unicycle or on foot
    pub locomotion: Option<Locomotion>,
    /// Skill level
    pub difficulty: Option<Difficulty>,
    /// Free-form tags
    pub tags: Vec<String>,
    /// Steps in order
    pub instructions: Vec<Instruction>,
    /// Media attached to the exercise itself (exercise namespace)
    pub media: Vec<Media>,
}

impl Exercise {
    /// Every media item of the exercise, exercise-level first, then each
    /// instruction's media in instruction order
    pub fn all_media(&self) -> impl Iterator<Item = &Media> {
        self.media
            .iter()
            .chain(self.instructions.iter().flat_map(|i| i.media.iter()))
    }

    /// All media of one kind, from either namespace
    #[must_use]
    pub fn media_of_kind(&self, kind: MediaKind) -> Vec<&Media> {
        self.all_media().filter(|m| m.kind() == Some(kind)).collect()
    }

    /// All songs, from either namespace
    #[must_use]
    pub fn songs(&self) -> Vec<&Media> {
        self.media_of_kind(MediaKind::Song)
    }

    /// All dance mixes, from either namespace
    #[must_use]
    pub fn dance_mixes(&self) -> Vec<&Media> {
        self.media_of_kind(MediaKind::Dancemix)
    }

    /// All loops, from either namespace
    #[must_use]
    pub fn loops(&self) -> Vec<&Media> {
        self.media_of_kind(MediaKind::Loop)
    }

    /// All material, from either namespace
    #[must_use]
    pub fn materials(&self) -> Vec<&Media> {
        self.media_of_kind(MediaKind::Material)
    }

    /// Media whose type name matched no known variant
    #[must_use]
    pub fn unclassified_media(&self) -> Vec<&Media> {
        self.all_media().filter(|m| !m.is_classified()).collect()
    }

    /// Whether the exercise supports the given participation mode
    #[must_use]
    pub fn supports(&self, personal: Personal) -> bool {
        self.personal.contains(&personal)
    }
}

// ============================================================================
// CMS wire shapes
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawSys {
    filename: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawInstruction {
    title: Option<String>,
    text: Option<Value>,
    media: Option<Vec<Option<Value>>>,
}

#[derive(Debug, Deserialize)]
struct RawExercise {
    #[serde(rename = "_sys")]
    sys: Option<RawSys>,
    title: Option<String>,
    description: Option<Value>,
    personal: Option<Vec<Option<String>>>,
    locomotion: Option<String>,
    difficulty: Option<String>,
    tags: Option<Vec<Option<String>>>,
    instructions: Option<Vec<Option<RawInstruction>>>,
    media: Option<Vec<Option<Value>>>,
}

impl TryFrom<RawInstruction> for Instruction {
    type Error = DomainError;

    fn try_from(raw: RawInstruction) -> Result<Self, Self::Error> {
        Ok(Self {
            title: raw.title,
            text: raw.text,
            media: as_media_collection(raw.media)?,
        })
    }
}

impl TryFrom<RawExercise> for Exercise {
    type Error = DomainError;

    fn try_from(raw: RawExercise) -> Result<Self, Self::Error> {
        let personal = raw
            .personal
            .unwrap_or_default()
            .into_iter()
            .filter_map(|p| as_personal(p.as_deref()).transpose())
            .collect::<Result<Vec<_>, _>>()?;

        let instructions = raw
            .instructions
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .map(Instruction::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            slug: raw.sys.and_then(|s| s.filename),
            title: raw.title.unwrap_or_default(),
            description: raw.description,
            personal,
            locomotion: as_locomotion(raw.locomotion.as_deref())?,
            difficulty: as_difficulty(raw.difficulty.as_deref())?,
            tags: raw.tags.unwrap_or_default().into_iter().flatten().collect(),
            instructions,
            media: as_media_collection(raw.media)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_enum_wire_round_trip() {
        for personal in Personal::ALL {
            assert_eq!(personal.as_str().parse::<Personal>().unwrap(), personal);
        }
        for locomotion in Locomotion::ALL {
            assert_eq!(locomotion.as_str().parse::<Locomotion>().unwrap(), locomotion);
        }
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.as_str().parse::<Difficulty>().unwrap(), difficulty);
        }
    }

    #[test]
    fn test_invalid_enum_names_field() {
        let err = "trio".parse::<Personal>().unwrap_err();
        assert_eq!(err, DomainError::invalid_value("personal", "trio"));
        assert_eq!(err.to_string(), "invalid personal value: 'trio'");
    }

    #[test]
    fn test_difficulty_ordering() {
        assert!(Difficulty::Beginner < Difficulty::Intermediate);
        assert!(Difficulty::Intermediate < Difficulty::Advanced);
    }

    #[test]
    fn test_exercise_from_cms_payload() {
        let exercise: Exercise = serde_json::from_value(json!({
            "_sys": { "filename": "figure-eight" },
            "title": "Figure Eight",
            "personal": ["individual", null, "pair"],
            "locomotion": "unicycle",
            "difficulty": "intermediate",
            "tags": ["circle", null],
            "media": [
                { "__typename": "ExerciseMediaSong", "spotify": "spotify:track:1" },
                null
            ],
            "instructions": [
                {
                    "title": "Ride the first circle",
                    "media": [{ "__typename": "ExerciseInstructionMediaSong", "spotify": "spotify:track:2" }]
                },
                null
            ]
        }))
        .unwrap();

        assert_eq!(exercise.slug.as_deref(), Some("figure-eight"));
        assert_eq!(exercise.personal, vec![Personal::Individual, Personal::Pair]);
        assert_eq!(exercise.locomotion, Some(Locomotion::Unicycle));
        assert_eq!(exercise.difficulty, Some(Difficulty::Intermediate));
        assert_eq!(exercise.tags, vec!["circle".to_owned()]);
        assert_eq!(exercise.instructions.len(), 1);
        assert_eq!(exercise.songs().len(), 2);
        assert!(exercise.supports(Personal::Pair));
        assert!(!exercise.supports(Personal::Group));
    }

    #[test]
    fn test_exercise_rejects_invalid_difficulty() {
        let result: Result<Exercise, _> = serde_json::from_value(json!({
            "title": "Idling",
            "difficulty": "expert"
        }));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("invalid difficulty value: 'expert'"));
    }

    #[test]
    fn test_minimal_exercise() {
        let exercise: Exercise = serde_json::from_value(json!({ "title": "Idling" })).unwrap();
        assert!(exercise.personal.is_empty());
        assert!(exercise.media.is_empty());
        assert!(exercise.instructions.is_empty());
        assert_eq!(exercise.all_media().count(), 0);
    }
}
