// ABOUTME: Audio service integration for UniDancing (Spotify playlists and playback readiness)
// ABOUTME: Provider trait, shared HTTP client, retry and circuit breaker, abilities, playlist resource
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

//! Audio service providers and the reactive playlist resource.
//!
//! Consumers hold an `Arc<dyn AudioProvider>` and hand it to whatever needs
//! audio data; nothing in this crate looks providers up implicitly.

// Re-export unidancing-core modules so provider code can `use crate::errors::*` etc.
pub use unidancing_core::constants;
pub use unidancing_core::errors;
pub use unidancing_core::models;

/// Playback abilities derived from provider state
pub mod abilities;
/// Circuit breaker pattern for provider resilience
pub mod circuit_breaker;
/// Core provider traits and interfaces
pub mod core;
/// Shared HTTP client for provider API calls
pub mod http_client;
/// Reactive resources backed by a provider
pub mod resources;
/// Retry configuration and backoff helpers
pub mod utils;

/// Spotify Web API provider implementation
#[cfg(feature = "provider-spotify")]
pub mod spotify_provider;

pub use abilities::{is_authenticated, is_ready_for_playback};
pub use circuit_breaker::{CircuitBreaker, CircuitBreakerConfig, CircuitState};
pub use crate::core::{AudioProvider, OAuth2Credentials, ProviderConfig};
pub use http_client::{initialize_shared_client, shared_client};
pub use resources::playlist::{LoadOutcome, PlaylistResource, ResourceStatus};
#[cfg(feature = "provider-spotify")]
pub use spotify_provider::SpotifyProvider;
pub use unidancing_core::errors::provider::{ProviderError, ProviderResult};
pub use utils::RetryConfig;
