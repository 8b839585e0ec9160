// ABOUTME: Structured error types for audio service provider operations
// ABOUTME: Carries retry information and rate limit hints for the Spotify integration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

use thiserror::Error;

use super::{AppError, ErrorCode};

/// Errors raised by audio service providers
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider answered with a non-success status
    #[error("{provider} API error ({status_code}): {message}")]
    ApiError {
        /// Provider name
        provider: String,
        /// HTTP status code (0 when no response was received)
        status_code: u16,
        /// Error message
        message: String,
        /// Whether a retry may succeed
        retryable: bool,
    },

    /// Credentials are missing, expired, or rejected
    #[error("{provider} authentication failed: {reason}")]
    AuthenticationFailed {
        /// Provider name
        provider: String,
        /// Why authentication failed
        reason: String,
    },

    /// Requested resource does not exist
    #[error("{provider} {resource_type} '{resource_id}' not found")]
    NotFound {
        /// Provider name
        provider: String,
        /// Kind of resource (e.g. `Playlist`)
        resource_type: String,
        /// Identifier that was requested
        resource_id: String,
    },

    /// The provider is rate limiting requests
    #[error("{provider} {limit_type} exceeded, retry after {retry_after_secs}s")]
    RateLimitExceeded {
        /// Provider name
        provider: String,
        /// Suggested wait in seconds
        retry_after_secs: u64,
        /// Which limit was hit
        limit_type: String,
    },

    /// Transport-level failure
    #[error("{provider} network error: {message}")]
    NetworkError {
        /// Provider name
        provider: String,
        /// Transport message
        message: String,
    },

    /// Response body could not be decoded
    #[error("{provider} returned an unparsable {field}: {source}")]
    ParseError {
        /// Provider name
        provider: String,
        /// What was being decoded
        field: &'static str,
        /// Decoder error
        #[source]
        source: serde_json::Error,
    },

    /// Circuit breaker is open, requests fail fast
    #[error("{provider} temporarily unavailable (circuit open), retry after {retry_after_secs}s")]
    CircuitBreakerOpen {
        /// Provider name
        provider: String,
        /// Seconds until a recovery attempt is allowed
        retry_after_secs: u64,
    },

    /// Provider is misconfigured
    #[error("{provider} configuration error: {details}")]
    ConfigurationError {
        /// Provider name
        provider: String,
        /// What is wrong
        details: String,
    },
}

impl ProviderError {
    /// Whether retrying the same request may succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::ApiError { retryable, .. } => *retryable,
            Self::RateLimitExceeded { .. } | Self::NetworkError { .. } => true,
            Self::AuthenticationFailed { .. }
            | Self::NotFound { .. }
            | Self::ParseError { .. }
            | Self::CircuitBreakerOpen { .. }
            | Self::ConfigurationError { .. } => false,
        }
    }

    /// Suggested wait before retrying, if the provider gave one
    #[must_use]
    pub const fn retry_after_secs(&self) -> Option<u64> {
        match self {
            Self::RateLimitExceeded {
                retry_after_secs, ..
            }
            | Self::CircuitBreakerOpen {
                retry_after_secs, ..
            } => Some(*retry_after_secs),
            _ => None,
        }
    }

    /// Name of the provider that produced the error
    #[must_use]
    pub fn provider(&self) -> &str {
        match self {
            Self::ApiError { provider, .. }
            | Self::AuthenticationFailed { provider, .. }
            | Self::NotFound { provider, .. }
            | Self::RateLimitExceeded { provider, .. }
            | Self::NetworkError { provider, .. }
            | Self::ParseError { provider, .. }
            | Self::CircuitBreakerOpen { provider, .. }
            | Self::ConfigurationError { provider, .. } => provider,
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(error: ProviderError) -> Self {
        let code = match &error {
            ProviderError::ApiError { .. } | ProviderError::ParseError { .. } => {
                ErrorCode::ExternalServiceError
            }
            ProviderError::AuthenticationFailed { .. } => ErrorCode::ExternalAuthFailed,
            ProviderError::NotFound { .. } => ErrorCode::ResourceNotFound,
            ProviderError::RateLimitExceeded { .. } => ErrorCode::ExternalRateLimited,
            ProviderError::NetworkError { .. } | ProviderError::CircuitBreakerOpen { .. } => {
                ErrorCode::ExternalServiceUnavailable
            }
            ProviderError::ConfigurationError { .. } => ErrorCode::ConfigInvalid,
        };
        Self::new(code, error.to_string())
    }
}

#[cfg(feature = "provider-errors")]
impl From<reqwest::Error> for ProviderError {
    fn from(error: reqwest::Error) -> Self {
        Self::NetworkError {
            provider: "http".to_owned(),
            message: error.to_string(),
        }
    }
}

/// Result alias for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;
