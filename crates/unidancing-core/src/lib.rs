// ABOUTME: Core types and constants for the UniDancing training platform
// ABOUTME: Foundation crate with error handling, domain models, media classification, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

#![deny(unsafe_code)]

//! # UniDancing Core
//!
//! Foundation crate providing shared types and constants for the UniDancing
//! training platform. Content arrives from a headless CMS and playlists from
//! an audio service; this crate turns both into strongly typed domain models.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and domain-specific errors
//! - **constants**: Discriminants, display labels, and service names
//! - **models**: Exercises, instructions, media variants, and audio playlists

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Exercise, Media, Personal, Playlist, etc.)
pub mod models;
