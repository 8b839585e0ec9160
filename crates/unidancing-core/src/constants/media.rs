// ABOUTME: CMS discriminant strings for exercise-level and instruction-level media
// ABOUTME: Both namespaces name the same four variants with different type names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

/// Prefix of exercise-level media type names
pub const EXERCISE_MEDIA_PREFIX: &str = "ExerciseMedia";
/// Prefix of instruction-level media type names
pub const INSTRUCTION_MEDIA_PREFIX: &str = "ExerciseInstructionMedia";

/// Variant suffix for dance mixes
pub const DANCEMIX: &str = "Dancemix";
/// Variant suffix for loops
pub const LOOP: &str = "Loop";
/// Variant suffix for songs
pub const SONG: &str = "Song";
/// Variant suffix for material
pub const MATERIAL: &str = "Material";

/// Exercise-level dance mix
pub const EXERCISE_MEDIA_DANCEMIX: &str = "ExerciseMediaDancemix";
/// Exercise-level loop
pub const EXERCISE_MEDIA_LOOP: &str = "ExerciseMediaLoop";
/// Exercise-level song
pub const EXERCISE_MEDIA_SONG: &str = "ExerciseMediaSong";
/// Exercise-level material
pub const EXERCISE_MEDIA_MATERIAL: &str = "ExerciseMediaMaterial";

/// Instruction-level dance mix
pub const INSTRUCTION_MEDIA_DANCEMIX: &str = "ExerciseInstructionMediaDancemix";
/// Instruction-level loop
pub const INSTRUCTION_MEDIA_LOOP: &str = "ExerciseInstructionMediaLoop";
/// Instruction-level song
pub const INSTRUCTION_MEDIA_SONG: &str = "ExerciseInstructionMediaSong";
/// Instruction-level material
pub const INSTRUCTION_MEDIA_MATERIAL: &str = "ExerciseInstructionMediaMaterial";

/// Name of the discriminant field in CMS payloads
pub const TYPENAME_FIELD: &str = "__typename";
