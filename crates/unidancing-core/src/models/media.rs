// ABOUTME: Media tagged union for CMS exercise content (dance mix, loop, song, material)
// ABOUTME: Maps both CMS discriminant namespaces onto one canonical variant at ingestion time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

//! # Media classification
//!
//! The CMS attaches media to exercises and to individual instructions. The two
//! record kinds use different type names for the same four variants
//! (`ExerciseMediaSong` vs `ExerciseInstructionMediaSong`). The discriminant is
//! parsed once, when the payload is deserialized, into a [`MediaKind`] plus the
//! [`MediaNamespace`] it came from, so downstream code matches on the kind only.
//!
//! Unrecognized type names are kept verbatim as [`Discriminant::Unknown`].
//! They are not an error: every predicate simply answers `false`. The same
//! holds for a `__typename` that is absent, `null`, or not a string.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt;

use crate::constants::media::{
    DANCEMIX, EXERCISE_MEDIA_PREFIX, INSTRUCTION_MEDIA_PREFIX, LOOP, MATERIAL, SONG,
    TYPENAME_FIELD,
};
use crate::errors::{DomainError, DomainResult};

/// Canonical media variant, independent of where the media is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Pre-cut mix of several songs for dance games
    Dancemix,
    /// Short repeating audio loop
    Loop,
    /// A single song (usually a Spotify track or playlist)
    Song,
    /// Supporting material (sheet, video, image)
    Material,
}

impl MediaKind {
    /// All variants in declaration order
    pub const ALL: [Self; 4] = [Self::Dancemix, Self::Loop, Self::Song, Self::Material];

    /// Variant suffix used in CMS type names
    #[must_use]
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Dancemix => DANCEMIX,
            Self::Loop => LOOP,
            Self::Song => SONG,
            Self::Material => MATERIAL,
        }
    }

    /// Lowercase identifier used on the command line and in serialized output
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dancemix => "dancemix",
            Self::Loop => "loop",
            Self::Song => "song",
            Self::Material => "material",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            DANCEMIX => Some(Self::Dancemix),
            LOOP => Some(Self::Loop),
            SONG => Some(Self::Song),
            MATERIAL => Some(Self::Material),
            _ => None,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MediaKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dancemix" | "dance-mix" => Ok(Self::Dancemix),
            "loop" => Ok(Self::Loop),
            "song" => Ok(Self::Song),
            "material" => Ok(Self::Material),
            _ => Err(DomainError::invalid_value("media kind", s)),
        }
    }
}

/// Record kind a media item was attached to in the CMS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaNamespace {
    /// Attached directly to an exercise
    Exercise,
    /// Attached to one instruction step of an exercise
    Instruction,
}

impl MediaNamespace {
    /// Type name prefix for this namespace
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::Exercise => EXERCISE_MEDIA_PREFIX,
            Self::Instruction => INSTRUCTION_MEDIA_PREFIX,
        }
    }
}

/// Parsed `__typename` of a media payload
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Discriminant {
    /// One of the eight known type names
    Known {
        /// Canonical variant
        kind: MediaKind,
        /// Namespace the type name belonged to
        namespace: MediaNamespace,
    },
    /// Any other type name, retained as received
    Unknown(String),
}

impl Discriminant {
    /// Map a CMS type name onto its canonical variant
    #[must_use]
    pub fn parse(typename: &str) -> Self {
        let known = typename
            .strip_prefix(INSTRUCTION_MEDIA_PREFIX)
            .map(|suffix| (suffix, MediaNamespace::Instruction))
            .or_else(|| {
                typename
                    .strip_prefix(EXERCISE_MEDIA_PREFIX)
                    .map(|suffix| (suffix, MediaNamespace::Exercise))
            })
            .and_then(|(suffix, namespace)| {
                MediaKind::from_suffix(suffix).map(|kind| Self::Known { kind, namespace })
            });

        known.unwrap_or_else(|| Self::Unknown(typename.to_owned()))
    }

    /// Canonical variant, `None` for unknown type names
    #[must_use]
    pub const fn kind(&self) -> Option<MediaKind> {
        match self {
            Self::Known { kind, .. } => Some(*kind),
            Self::Unknown(_) => None,
        }
    }

    /// Type name as it appeared in the CMS payload
    #[must_use]
    pub fn typename(&self) -> Cow<'_, str> {
        match self {
            Self::Known { kind, namespace } => {
                Cow::Owned(format!("{}{}", namespace.prefix(), kind.suffix()))
            }
            Self::Unknown(name) => Cow::Borrowed(name),
        }
    }
}

/// A media item attached to an exercise or instruction
///
/// Variant-specific fields are passed through untouched; only the
/// discriminant is interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct Media {
    discriminant: Discriminant,
    fields: Map<String, Value>,
}

impl Media {
    /// Build a media item from a CMS type name and its remaining fields
    #[must_use]
    pub fn new(typename: &str, fields: Map<String, Value>) -> Self {
        Self {
            discriminant: Discriminant::parse(typename),
            fields,
        }
    }

    /// Parse a raw CMS JSON value
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMedia` when the value is not a JSON object.
    /// An object with a missing, `null`, non-string or unknown `__typename`
    /// is accepted and classified as [`Discriminant::Unknown`].
    pub fn from_value(value: Value) -> DomainResult<Self> {
        match value {
            Value::Object(_) => serde_json::from_value(value).map_err(|e| {
                DomainError::InvalidMedia {
                    reason: e.to_string(),
                }
            }),
            other => Err(DomainError::InvalidMedia {
                reason: format!("expected an object, got {}", json_type_name(&other)),
            }),
        }
    }

    /// Parsed discriminant
    #[must_use]
    pub const fn discriminant(&self) -> &Discriminant {
        &self.discriminant
    }

    /// Canonical variant, `None` if the type name is unknown
    #[must_use]
    pub const fn kind(&self) -> Option<MediaKind> {
        self.discriminant.kind()
    }

    /// Namespace the media came from, `None` if the type name is unknown
    #[must_use]
    pub const fn namespace(&self) -> Option<MediaNamespace> {
        match self.discriminant {
            Discriminant::Known { namespace, .. } => Some(namespace),
            Discriminant::Unknown(_) => None,
        }
    }

    /// Original CMS type name
    #[must_use]
    pub fn typename(&self) -> Cow<'_, str> {
        self.discriminant.typename()
    }

    /// Whether the type name was recognized
    #[must_use]
    pub const fn is_classified(&self) -> bool {
        self.kind().is_some()
    }

    /// Whether this is a dance mix (either namespace)
    #[must_use]
    pub fn is_dance_mix(&self) -> bool {
        self.kind() == Some(MediaKind::Dancemix)
    }

    /// Whether this is a loop (either namespace)
    #[must_use]
    pub fn is_loop(&self) -> bool {
        self.kind() == Some(MediaKind::Loop)
    }

    /// Whether this is a song (either namespace)
    #[must_use]
    pub fn is_song(&self) -> bool {
        self.kind() == Some(MediaKind::Song)
    }

    /// Whether this is material (either namespace)
    #[must_use]
    pub fn is_material(&self) -> bool {
        self.kind() == Some(MediaKind::Material)
    }

    /// Variant-specific fields
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Look up one variant-specific field
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Look up a string field, `None` if absent or not a string
    #[must_use]
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Value::as_str)
    }
}

/// True iff the media is a dance mix, regardless of namespace
#[must_use]
pub fn is_dance_mix(media: &Media) -> bool {
    media.is_dance_mix()
}

/// True iff the media is a loop, regardless of namespace
#[must_use]
pub fn is_loop(media: &Media) -> bool {
    media.is_loop()
}

/// True iff the media is a song, regardless of namespace
#[must_use]
pub fn is_song(media: &Media) -> bool {
    media.is_song()
}

/// True iff the media is material, regardless of namespace
#[must_use]
pub fn is_material(media: &Media) -> bool {
    media.is_material()
}

impl<'de> Deserialize<'de> for Media {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut fields = Map::<String, Value>::deserialize(deserializer)?;
        let discriminant = match fields.remove(TYPENAME_FIELD) {
            Some(Value::String(name)) => Discriminant::parse(&name),
            None | Some(Value::Null) => Discriminant::Unknown(String::new()),
            // Keep the JSON text so the odd tag still shows up in logs
            Some(other) => Discriminant::Unknown(other.to_string()),
        };
        Ok(Self {
            discriminant,
            fields,
        })
    }
}

impl Serialize for Media {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry(TYPENAME_FIELD, &self.discriminant.typename())?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
