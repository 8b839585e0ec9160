// ABOUTME: Core provider trait and configuration for audio services
// ABOUTME: Defines the contract every playlist source implements (Spotify, test doubles)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

//! # Audio Provider Contract
//!
//! `AudioProvider` is the only seam between UniDancing and an audio service.
//! Implementations translate service specific DTOs into the shared
//! [`Playlist`] model and service failures into [`ProviderError`].
//!
//! Providers are passed explicitly (usually as `Arc<dyn AudioProvider>`) to
//! the code that needs them, which keeps them swappable in tests.
//!
//! [`ProviderError`]: crate::errors::ProviderError

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ProviderResult;
use crate::models::Playlist;

/// Static configuration of a provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider identifier
    pub name: String,
    /// OAuth authorization endpoint
    pub auth_url: String,
    /// OAuth token endpoint
    pub token_url: String,
    /// Base URL of the REST API
    pub api_base_url: String,
    /// Scopes requested during authorization
    pub default_scopes: Vec<String>,
}

/// OAuth2 credentials issued by the audio service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuth2Credentials {
    /// Bearer token for API calls
    pub access_token: String,
    /// Token used to obtain a new access token
    pub refresh_token: Option<String>,
    /// Expiry of `access_token`, `None` if unknown
    pub expires_at: Option<DateTime<Utc>>,
    /// Granted scopes
    pub scopes: Vec<String>,
}

impl OAuth2Credentials {
    /// Credentials for an access token valid for `expires_in_secs` from now
    #[must_use]
    pub fn with_lifetime(access_token: impl Into<String>, expires_in_secs: i64) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
            expires_at: Some(Utc::now() + Duration::seconds(expires_in_secs)),
            scopes: Vec::new(),
        }
    }

    /// Whether the access token has expired (tokens without expiry never expire)
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| at <= Utc::now())
    }
}

/// Unified interface for audio services
#[async_trait]
pub trait AudioProvider: Send + Sync {
    /// Provider identifier used in logs and errors
    fn name(&self) -> &'static str;

    /// Provider configuration
    fn config(&self) -> &ProviderConfig;

    /// Install credentials for subsequent calls
    async fn set_credentials(&self, credentials: OAuth2Credentials) -> ProviderResult<()>;

    /// Whether the provider holds usable credentials
    async fn is_authenticated(&self) -> bool;

    /// Whether the provider can start playback right now
    async fn is_ready_for_playback(&self) -> bool;

    /// Fetch a playlist with its first page of tracks
    async fn get_playlist(&self, playlist_id: &str) -> ProviderResult<Playlist>;
}
