// ABOUTME: Shared utilities for audio provider implementations
// ABOUTME: Retry with exponential backoff and HTTP status to ProviderError mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::constants::defaults::{INITIAL_BACKOFF_MS, MAX_BACKOFF_MS, MAX_RETRIES};
use crate::errors::{ProviderError, ProviderResult};

/// Configuration for retry behavior
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts for a retryable status
    pub max_retries: u32,
    /// Initial backoff delay in milliseconds
    pub initial_backoff_ms: u64,
    /// Upper bound for any single wait, server `Retry-After` included
    pub max_backoff_ms: u64,
    /// HTTP status codes that should trigger retries
    pub retryable_status_codes: Vec<StatusCode>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: MAX_RETRIES,
            initial_backoff_ms: INITIAL_BACKOFF_MS,
            max_backoff_ms: MAX_BACKOFF_MS,
            retryable_status_codes: vec![StatusCode::TOO_MANY_REQUESTS],
        }
    }
}

impl RetryConfig {
    /// Backoff before retry number `attempt` (1-based), doubling each time
    /// up to `max_backoff_ms`
    #[must_use]
    pub fn backoff_for_attempt(&self, attempt: u32) -> Duration {
        let factor = 2_u64.saturating_pow(attempt.saturating_sub(1));
        Duration::from_millis(
            self.initial_backoff_ms
                .saturating_mul(factor)
                .min(self.max_backoff_ms),
        )
    }

    /// Wait before retry number `attempt`, preferring the server's
    /// `Retry-After` but never longer than `max_backoff_ms`
    #[must_use]
    pub fn delay_for_retry(&self, attempt: u32, retry_after_secs: Option<u64>) -> Duration {
        retry_after_secs.map_or_else(
            || self.backoff_for_attempt(attempt),
            |secs| Duration::from_millis(secs.saturating_mul(1000).min(self.max_backoff_ms)),
        )
    }

    fn is_retryable(&self, status: StatusCode) -> bool {
        self.retryable_status_codes.contains(&status)
    }
}

/// Seconds from a `Retry-After` header, if present and numeric
#[must_use]
pub fn parse_retry_after(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}

/// Map a non-success HTTP status to a provider error
#[must_use]
pub fn error_for_status(
    provider: &str,
    status: StatusCode,
    resource_type: &str,
    resource_id: &str,
    body: String,
) -> ProviderError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::AuthenticationFailed {
            provider: provider.to_owned(),
            reason: format!("{status}: {body}"),
        },
        StatusCode::NOT_FOUND => ProviderError::NotFound {
            provider: provider.to_owned(),
            resource_type: resource_type.to_owned(),
            resource_id: resource_id.to_owned(),
        },
        _ => ProviderError::ApiError {
            provider: provider.to_owned(),
            status_code: status.as_u16(),
            message: body,
            retryable: status.is_server_error(),
        },
    }
}

/// A GET request against a provider API
#[derive(Debug, Clone, Copy)]
pub struct ApiRequest<'a> {
    /// Provider identifier for logs and errors
    pub provider: &'a str,
    /// Absolute request URL
    pub url: &'a str,
    /// Bearer token
    pub access_token: &'a str,
    /// Resource type reported in `NotFound`
    pub resource_type: &'a str,
    /// Resource id reported in `NotFound`
    pub resource_id: &'a str,
}

/// Make an authenticated HTTP GET request with retry logic
///
/// Statuses in `retry_config.retryable_status_codes` are retried with
/// exponential backoff, honoring `Retry-After` when the server sends it.
///
/// # Errors
///
/// - `RateLimitExceeded` once all attempts hit a retryable status
/// - `AuthenticationFailed` on 401/403
/// - `NotFound` on 404
/// - `ApiError` on any other non-success status
/// - `NetworkError` if the request cannot be sent
/// - `ParseError` if the body does not decode as `T`
pub async fn api_request_with_retry<T>(
    client: &Client,
    request: ApiRequest<'_>,
    retry_config: &RetryConfig,
) -> ProviderResult<T>
where
    T: DeserializeOwned,
{
    let ApiRequest { provider, url, .. } = request;
    info!("Starting {provider} API request to: {url}");

    let mut attempt = 0;
    loop {
        let response = client
            .get(url)
            .bearer_auth(request.access_token)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider.to_owned(),
                message: e.to_string(),
            })?;

        let status = response.status();
        debug!("Received HTTP response with status: {status}");

        if retry_config.is_retryable(status) {
            attempt += 1;
            let retry_after = parse_retry_after(response.headers());
            if attempt >= retry_config.max_retries {
                let max_retries = retry_config.max_retries;
                warn!("{provider} API rate limit exceeded - max retries ({max_retries}) reached");
                return Err(ProviderError::RateLimitExceeded {
                    provider: provider.to_owned(),
                    retry_after_secs: retry_after.unwrap_or(0),
                    limit_type: format!("HTTP {}", status.as_u16()),
                });
            }

            let backoff = retry_config.delay_for_retry(attempt, retry_after);
            let max_retries = retry_config.max_retries;
            let backoff_ms = backoff.as_millis();
            warn!(
                "{provider} API rate limit hit ({status}) - retry {attempt}/{max_retries} after {backoff_ms}ms backoff"
            );

            tokio::time::sleep(backoff).await;
            continue;
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            error!("{provider} API request failed - status: {status}, body: {text}");
            return Err(error_for_status(
                provider,
                status,
                request.resource_type,
                request.resource_id,
                text,
            ));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider.to_owned(),
                message: e.to_string(),
            })?;

        return serde_json::from_slice(&bytes).map_err(|source| {
            error!("Failed to parse {provider} API response: {source}");
            ProviderError::ParseError {
                provider: provider.to_owned(),
                field: "response_body",
                source,
            }
        });
    }
}
