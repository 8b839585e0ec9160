// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses environment variables into typed configuration with logged fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

//! Environment-based configuration

use crate::audio::{OAuth2Credentials, RetryConfig};
use crate::constants::{audio_providers, defaults, env_config};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use tracing::{info, warn};

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Spotify integration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyConfig {
    /// Base URL of the Web API
    pub api_base_url: String,
    /// Pre-issued access token
    pub access_token: Option<String>,
    /// Lifetime of `access_token` in seconds
    pub token_expires_in_secs: i64,
    /// Device playback should target
    pub device_id: Option<String>,
    /// Attempts for rate limited requests
    pub max_retries: u32,
    /// First backoff delay for rate limited requests
    pub initial_backoff_ms: u64,
}

impl SpotifyConfig {
    /// Credentials for the configured access token, if any
    #[must_use]
    pub fn credentials(&self) -> Option<OAuth2Credentials> {
        self.access_token
            .as_deref()
            .filter(|token| !token.is_empty())
            .map(|token| OAuth2Credentials::with_lifetime(token, self.token_expires_in_secs))
    }

    /// Retry behavior for Spotify API calls
    #[must_use]
    pub fn retry_config(&self) -> RetryConfig {
        RetryConfig {
            max_retries: self.max_retries,
            initial_backoff_ms: self.initial_backoff_ms,
            ..RetryConfig::default()
        }
    }
}

/// Shared HTTP client timeouts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Total request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: defaults::HTTP_CLIENT_TIMEOUT_SECS,
            connect_timeout_secs: defaults::HTTP_CLIENT_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Spotify integration
    pub spotify: SpotifyConfig,
    /// HTTP client timeouts
    pub http_client: HttpClientConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Missing variables take their defaults; unparsable numbers fall back
    /// to the default with a warning.
    #[must_use]
    pub fn from_env() -> Self {
        info!("Loading configuration from environment variables");

        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or(
                env_config::ENVIRONMENT,
                "development",
            )),
            spotify: SpotifyConfig {
                api_base_url: env_var_or(
                    env_config::SPOTIFY_API_BASE_URL,
                    audio_providers::SPOTIFY_API_BASE_URL,
                ),
                access_token: env::var(env_config::SPOTIFY_ACCESS_TOKEN).ok(),
                token_expires_in_secs: parse_env_or(
                    env_config::SPOTIFY_TOKEN_EXPIRES_IN,
                    defaults::SPOTIFY_TOKEN_LIFETIME_SECS,
                ),
                device_id: env::var(env_config::SPOTIFY_DEVICE_ID).ok(),
                max_retries: parse_env_or(env_config::SPOTIFY_MAX_RETRIES, defaults::MAX_RETRIES),
                initial_backoff_ms: parse_env_or(
                    env_config::SPOTIFY_INITIAL_BACKOFF_MS,
                    defaults::INITIAL_BACKOFF_MS,
                ),
            },
            http_client: HttpClientConfig {
                timeout_secs: parse_env_or(
                    env_config::HTTP_CLIENT_TIMEOUT_SECS,
                    defaults::HTTP_CLIENT_TIMEOUT_SECS,
                ),
                connect_timeout_secs: parse_env_or(
                    env_config::HTTP_CLIENT_CONNECT_TIMEOUT_SECS,
                    defaults::HTTP_CLIENT_CONNECT_TIMEOUT_SECS,
                ),
            },
        };

        config.validate();
        config
    }

    fn validate(&self) {
        if self.spotify.credentials().is_none() {
            warn!("SPOTIFY_ACCESS_TOKEN not set, playlist features are unavailable");
        }
        if self.spotify.max_retries == 0 {
            warn!("SPOTIFY_MAX_RETRIES is 0, rate limited requests fail immediately");
        }
    }

    /// Configuration summary for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "UniDancing Configuration:\n\
             - Environment: {}\n\
             - Spotify API: {}\n\
             - Spotify Token: {}\n\
             - Playback Device: {}\n\
             - HTTP Timeout: {}s (connect {}s)",
            self.environment,
            self.spotify.api_base_url,
            if self.spotify.credentials().is_some() {
                "Configured"
            } else {
                "Missing"
            },
            self.spotify.device_id.as_deref().unwrap_or("None"),
            self.http_client.timeout_secs,
            self.http_client.connect_timeout_secs,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when absent or invalid
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + fmt::Display + Copy,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Invalid {key} value '{raw}', using default {default}");
            default
        }),
        Err(_) => default,
    }
}
