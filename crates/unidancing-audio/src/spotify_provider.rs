// ABOUTME: Spotify Web API provider for playlists and playback readiness
// ABOUTME: Bearer token auth, 429 backoff, and circuit breaker around every API call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

use async_trait::async_trait;
use reqwest::Client;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use crate::circuit_breaker::{CircuitBreaker, CircuitBreakerConfig};
use crate::constants::audio_providers::{
    SPOTIFY, SPOTIFY_API_BASE_URL, SPOTIFY_AUTH_URL, SPOTIFY_DEFAULT_SCOPES, SPOTIFY_TOKEN_URL,
};
use crate::core::{AudioProvider, OAuth2Credentials, ProviderConfig};
use crate::errors::{ProviderError, ProviderResult};
use crate::http_client::shared_client;
use crate::models::Playlist;
use crate::utils::{api_request_with_retry, ApiRequest, RetryConfig};

/// Spotify Web API client
pub struct SpotifyProvider {
    config: ProviderConfig,
    client: Client,
    retry_config: RetryConfig,
    circuit_breaker: CircuitBreaker,
    credentials: RwLock<Option<OAuth2Credentials>>,
    device_id: RwLock<Option<String>>,
}

impl SpotifyProvider {
    /// Provider against the public Spotify API
    #[must_use]
    pub fn new() -> Self {
        Self::with_api_base_url(SPOTIFY_API_BASE_URL)
    }

    /// Provider against a custom API base URL (proxies, test servers)
    #[must_use]
    pub fn with_api_base_url(api_base_url: &str) -> Self {
        let config = ProviderConfig {
            name: SPOTIFY.to_owned(),
            auth_url: SPOTIFY_AUTH_URL.to_owned(),
            token_url: SPOTIFY_TOKEN_URL.to_owned(),
            api_base_url: api_base_url.trim_end_matches('/').to_owned(),
            default_scopes: SPOTIFY_DEFAULT_SCOPES
                .iter()
                .map(|scope| (*scope).to_owned())
                .collect(),
        };
        Self::with_config(config, RetryConfig::default(), CircuitBreakerConfig::default())
    }

    /// Provider with explicit configuration
    #[must_use]
    pub fn with_config(
        config: ProviderConfig,
        retry_config: RetryConfig,
        breaker_config: CircuitBreakerConfig,
    ) -> Self {
        Self {
            config,
            client: shared_client().clone(),
            retry_config,
            circuit_breaker: CircuitBreaker::with_config(SPOTIFY, breaker_config),
            credentials: RwLock::new(None),
            device_id: RwLock::new(None),
        }
    }

    /// Replace the retry behavior for rate limited requests
    #[must_use]
    pub fn with_retry_config(mut self, retry_config: RetryConfig) -> Self {
        self.retry_config = retry_config;
        self
    }

    /// Select the device playback will target
    pub async fn set_playback_device(&self, device_id: impl Into<String>) {
        let device_id = device_id.into();
        debug!(device_id = %device_id, "Spotify playback device selected");
        *self.device_id.write().await = Some(device_id);
    }

    /// Forget the selected playback device
    pub async fn clear_playback_device(&self) {
        *self.device_id.write().await = None;
    }

    /// Circuit breaker guarding this provider
    #[must_use]
    pub const fn circuit_breaker(&self) -> &CircuitBreaker {
        &self.circuit_breaker
    }

    async fn access_token(&self) -> ProviderResult<String> {
        let guard = self.credentials.read().await;
        match guard.as_ref() {
            Some(credentials) if !credentials.is_expired() => {
                Ok(credentials.access_token.clone())
            }
            Some(_) => Err(ProviderError::AuthenticationFailed {
                provider: SPOTIFY.to_owned(),
                reason: "access token expired".to_owned(),
            }),
            None => Err(ProviderError::AuthenticationFailed {
                provider: SPOTIFY.to_owned(),
                reason: "no access token configured".to_owned(),
            }),
        }
    }
}

impl Default for SpotifyProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioProvider for SpotifyProvider {
    fn name(&self) -> &'static str {
        SPOTIFY
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }

    async fn set_credentials(&self, credentials: OAuth2Credentials) -> ProviderResult<()> {
        if credentials.access_token.is_empty() {
            return Err(ProviderError::ConfigurationError {
                provider: SPOTIFY.to_owned(),
                details: "access token must not be empty".to_owned(),
            });
        }
        info!(expires_at = ?credentials.expires_at, "Spotify credentials updated");
        *self.credentials.write().await = Some(credentials);
        Ok(())
    }

    async fn is_authenticated(&self) -> bool {
        self.credentials
            .read()
            .await
            .as_ref()
            .is_some_and(|credentials| !credentials.is_expired())
    }

    async fn is_ready_for_playback(&self) -> bool {
        self.is_authenticated().await && self.device_id.read().await.is_some()
    }

    #[instrument(skip(self), fields(provider = SPOTIFY))]
    async fn get_playlist(&self, playlist_id: &str) -> ProviderResult<Playlist> {
        let access_token = self.access_token().await?;
        let url = format!(
            "{}/playlists/{}",
            self.config.api_base_url,
            urlencoding::encode(playlist_id)
        );
        let request = ApiRequest {
            provider: SPOTIFY,
            url: &url,
            access_token: &access_token,
            resource_type: "playlist",
            resource_id: playlist_id,
        };

        let playlist: Playlist = self
            .circuit_breaker
            .call(api_request_with_retry(&self.client, request, &self.retry_config))
            .await?;

        debug!(
            playlist_id = %playlist.id,
            tracks = playlist.tracks.as_ref().map_or(0, |page| page.items.len()),
            "Fetched Spotify playlist"
        );
        Ok(playlist)
    }
}
