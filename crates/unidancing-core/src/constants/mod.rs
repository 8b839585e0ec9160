// ABOUTME: Constants module with domain-separated organization
// ABOUTME: CMS discriminants, display labels, service names, and provider endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large list.

/// CMS media discriminants (`__typename` values)
pub mod media;

/// Display labels (German UI copy)
pub mod labels;

/// Service names used for structured logging
pub mod service_names {
    /// Main service name
    pub const UNIDANCING: &str = "unidancing";
    /// CLI binary name
    pub const UNIDANCING_CLI: &str = "unidancing-cli";
}

/// Audio provider identifiers and endpoints
pub mod audio_providers {
    /// Spotify provider identifier
    pub const SPOTIFY: &str = "spotify";
    /// Spotify Web API base URL
    pub const SPOTIFY_API_BASE_URL: &str = "https://api.spotify.com/v1";
    /// Spotify authorization endpoint
    pub const SPOTIFY_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
    /// Spotify token endpoint
    pub const SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
    /// Scopes needed to read playlists and drive playback
    pub const SPOTIFY_DEFAULT_SCOPES: &[&str] = &[
        "playlist-read-private",
        "streaming",
        "user-read-playback-state",
        "user-modify-playback-state",
    ];
}

/// Environment variable names
pub mod env_config {
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log level
    pub const LOG_LEVEL: &str = "RUST_LOG";
    /// Spotify API base URL override
    pub const SPOTIFY_API_BASE_URL: &str = "SPOTIFY_API_BASE_URL";
    /// Spotify access token
    pub const SPOTIFY_ACCESS_TOKEN: &str = "SPOTIFY_ACCESS_TOKEN";
    /// Lifetime of the configured access token in seconds
    pub const SPOTIFY_TOKEN_EXPIRES_IN: &str = "SPOTIFY_TOKEN_EXPIRES_IN";
    /// Playback device id
    pub const SPOTIFY_DEVICE_ID: &str = "SPOTIFY_DEVICE_ID";
    /// Maximum retries on rate limiting
    pub const SPOTIFY_MAX_RETRIES: &str = "SPOTIFY_MAX_RETRIES";
    /// Initial backoff in milliseconds
    pub const SPOTIFY_INITIAL_BACKOFF_MS: &str = "SPOTIFY_INITIAL_BACKOFF_MS";
    /// HTTP request timeout
    pub const HTTP_CLIENT_TIMEOUT_SECS: &str = "HTTP_CLIENT_TIMEOUT_SECS";
    /// HTTP connect timeout
    pub const HTTP_CLIENT_CONNECT_TIMEOUT_SECS: &str = "HTTP_CLIENT_CONNECT_TIMEOUT_SECS";
}

/// Default values
pub mod defaults {
    /// Default HTTP request timeout in seconds
    pub const HTTP_CLIENT_TIMEOUT_SECS: u64 = 30;
    /// Default HTTP connect timeout in seconds
    pub const HTTP_CLIENT_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Default number of rate-limit retries
    pub const MAX_RETRIES: u32 = 3;
    /// Default initial backoff in milliseconds
    pub const INITIAL_BACKOFF_MS: u64 = 1000;
    /// Longest single wait between retries, including server `Retry-After`
    pub const MAX_BACKOFF_MS: u64 = 30_000;
    /// Spotify access tokens are issued for one hour
    pub const SPOTIFY_TOKEN_LIFETIME_SECS: i64 = 3600;
}
