// ABOUTME: Core data models for UniDancing exercises, media, and audio playlists
// ABOUTME: Re-exports the domain types shared by the provider crate and the application
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

//! # Data Models
//!
//! Exercises and their instructions come from the CMS; playlists come from
//! the audio service. Both are read-only here: models are parsed once at the
//! ingestion boundary and never mutated afterwards.

/// Audio service playlist and track shapes
pub mod audio;
/// Validating parsers for loosely typed CMS values
pub mod coercion;
/// Exercises, instructions, and their enumerated attributes
pub mod exercise;
/// Media tagged union and classification predicates
pub mod media;

pub use audio::{Artist, Playlist, PlaylistItem, PlaylistTracks, Track};
pub use coercion::{as_difficulty, as_locomotion, as_media, as_media_collection, as_personal};
pub use exercise::{Difficulty, Exercise, Instruction, Locomotion, Personal};
pub use media::{
    is_dance_mix, is_loop, is_material, is_song, Discriminant, Media, MediaKind, MediaNamespace,
};
