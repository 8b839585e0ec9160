// ABOUTME: Configuration management module for UniDancing runtime settings
// ABOUTME: Environment-only configuration for logging, HTTP client, and the Spotify integration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

//! Configuration module
//!
//! All settings come from environment variables; see [`environment::AppConfig::from_env`].

/// Environment and service configuration
pub mod environment;

pub use environment::{AppConfig, Environment, HttpClientConfig, SpotifyConfig};
