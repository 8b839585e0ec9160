// ABOUTME: Main library entry point for the UniDancing training platform
// ABOUTME: Domain adapters for CMS exercises, display formatters, games, catalog, and audio playback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

#![deny(unsafe_code)]

//! # UniDancing
//!
//! Typed domain layer for a unicycle dance training app. Exercise content
//! arrives as JSON from a headless CMS; music comes from Spotify.
//!
//! ## Architecture
//!
//! - **Models** (`unidancing-core`): exercises, media classification, coercion
//! - **Audio** (`unidancing-audio`): provider trait, Spotify, playlist resource
//! - **Formatters**: icon and label rendering for exercise attributes
//! - **Games**: game names and their URL parameters
//! - **Catalog**: loading and filtering exercise exports
//! - **Config** / **Logging**: environment configuration and tracing setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use unidancing::catalog::{ExerciseCatalog, ExerciseFilter};
//! use unidancing::errors::AppResult;
//! use unidancing::models::Personal;
//!
//! fn main() -> AppResult<()> {
//!     let catalog = ExerciseCatalog::from_file("exercises.json")?;
//!     let filter = ExerciseFilter {
//!         personal: Some(Personal::Pair),
//!         ..ExerciseFilter::default()
//!     };
//!     for exercise in catalog.filter(&filter) {
//!         println!("{} ({} songs)", exercise.title, exercise.songs().len());
//!     }
//!     Ok(())
//! }
//! ```

/// Audio providers and the playlist resource
pub use unidancing_audio as audio;

/// Error types shared across the workspace
pub use unidancing_core::errors;

/// Constants: media type names, labels, environment variable names, defaults
pub use unidancing_core::constants;

/// Domain models: exercises, media, audio shapes, coercion
pub use unidancing_core::models;

/// Exercise catalog loading and filtering
pub mod catalog;

/// Environment configuration
pub mod config;

/// Display formatters for exercise attributes
pub mod formatters;

/// Games and their URL parameters
pub mod games;

/// Logging configuration and structured logging
pub mod logging;
