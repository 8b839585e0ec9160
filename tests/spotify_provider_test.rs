// ABOUTME: Integration tests for the Spotify provider against a mock HTTP server
// ABOUTME: Covers status mapping, 429 retries, circuit breaking, credentials, and abilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use unidancing::audio::{
    is_authenticated, is_ready_for_playback, AudioProvider, CircuitState, LoadOutcome,
    OAuth2Credentials, PlaylistResource, RetryConfig, SpotifyProvider,
};
use unidancing::errors::ProviderError;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn playlist_body(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Warm-up",
        "description": "Slow songs for the first laps",
        "tracks": {
            "items": [
                {
                    "added_at": "2025-03-01T10:00:00Z",
                    "track": {
                        "id": "t1",
                        "name": "Bolero",
                        "uri": "spotify:track:t1",
                        "duration_ms": 900_000,
                        "artists": [{ "id": "a1", "name": "Ravel" }]
                    }
                },
                { "added_at": null, "track": null }
            ],
            "total": 2
        }
    })
}

async fn provider_for(server: &MockServer) -> SpotifyProvider {
    common::init_test_logging();
    let provider = SpotifyProvider::with_api_base_url(&server.uri()).with_retry_config(RetryConfig {
        max_retries: 3,
        initial_backoff_ms: 1,
        ..RetryConfig::default()
    });
    provider
        .set_credentials(OAuth2Credentials::with_lifetime("test-token", 3600))
        .await
        .unwrap();
    provider
}

#[tokio::test]
async fn test_get_playlist_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/playlists/p1"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(playlist_body("p1")))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    let playlist = provider.get_playlist("p1").await.unwrap();

    assert_eq!(playlist.id, "p1");
    assert_eq!(playlist.name, "Warm-up");
    let tracks = playlist.tracks().unwrap();
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].artist_names(), "Ravel");
    assert_eq!(playlist.duration_ms(), 900_000);
}

#[tokio::test]
async fn test_unauthorized_maps_to_authentication_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/playlists/p1"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token revoked"))
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    let err = provider.get_playlist("p1").await.unwrap_err();

    assert!(matches!(err, ProviderError::AuthenticationFailed { .. }), "{err:?}");
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_not_found_names_resource() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/playlists/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    let err = provider.get_playlist("missing").await.unwrap_err();

    match err {
        ProviderError::NotFound {
            resource_type,
            resource_id,
            ..
        } => {
            assert_eq!(resource_type, "playlist");
            assert_eq!(resource_id, "missing");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert_eq!(provider.circuit_breaker().failure_count(), 0);
}

#[tokio::test]
async fn test_rate_limit_is_retried_then_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/playlists/p1"))
        .respond_with(ResponseTemplate::new(429))
        .expect(3)
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    let err = provider.get_playlist("p1").await.unwrap_err();

    match &err {
        ProviderError::RateLimitExceeded { limit_type, .. } => assert_eq!(limit_type, "HTTP 429"),
        other => panic!("expected RateLimitExceeded, got {other:?}"),
    }
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_rate_limit_recovers_within_retries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/playlists/p1"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "0"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/playlists/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(playlist_body("p1")))
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    assert_eq!(provider.get_playlist("p1").await.unwrap().id, "p1");
}

#[tokio::test]
async fn test_long_retry_after_is_capped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/playlists/p1"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "86400"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/playlists/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(playlist_body("p1")))
        .mount(&server)
        .await;

    common::init_test_logging();
    let provider = SpotifyProvider::with_api_base_url(&server.uri()).with_retry_config(RetryConfig {
        max_retries: 3,
        initial_backoff_ms: 1,
        max_backoff_ms: 10,
        ..RetryConfig::default()
    });
    provider
        .set_credentials(OAuth2Credentials::with_lifetime("test-token", 3600))
        .await
        .unwrap();

    let playlist = tokio::time::timeout(Duration::from_secs(5), provider.get_playlist("p1"))
        .await
        .expect("Retry-After of a day must not be honoured verbatim")
        .unwrap();
    assert_eq!(playlist.id, "p1");
}

#[tokio::test]
async fn test_server_error_is_retryable_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/playlists/p1"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    let err = provider.get_playlist("p1").await.unwrap_err();

    match err {
        ProviderError::ApiError {
            status_code,
            message,
            retryable,
            ..
        } => {
            assert_eq!(status_code, 503);
            assert_eq!(message, "maintenance");
            assert!(retryable);
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/playlists/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    let err = provider.get_playlist("p1").await.unwrap_err();
    assert!(matches!(err, ProviderError::ParseError { .. }), "{err:?}");
}

#[tokio::test]
async fn test_circuit_opens_after_repeated_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/playlists/p1"))
        .respond_with(ResponseTemplate::new(500))
        .expect(5)
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    for _ in 0..5 {
        let err = provider.get_playlist("p1").await.unwrap_err();
        assert!(matches!(err, ProviderError::ApiError { .. }));
    }
    assert_eq!(provider.circuit_breaker().state(), CircuitState::Open);

    let err = provider.get_playlist("p1").await.unwrap_err();
    assert!(matches!(err, ProviderError::CircuitBreakerOpen { .. }), "{err:?}");
    assert!(err.retry_after_secs().is_some());
}

#[tokio::test]
async fn test_missing_or_expired_credentials() {
    let server = MockServer::start().await;
    let provider = SpotifyProvider::with_api_base_url(&server.uri());

    assert!(!provider.is_authenticated().await);
    let err = provider.get_playlist("p1").await.unwrap_err();
    assert!(matches!(err, ProviderError::AuthenticationFailed { .. }));

    provider
        .set_credentials(OAuth2Credentials::with_lifetime("old", -60))
        .await
        .unwrap();
    assert!(!provider.is_authenticated().await);

    let err = provider
        .set_credentials(OAuth2Credentials::with_lifetime("", 3600))
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::ConfigurationError { .. }));
}

#[tokio::test]
async fn test_abilities_follow_credentials_and_device() {
    let server = MockServer::start().await;
    let provider = provider_for(&server).await;

    assert!(is_authenticated(&provider).await);
    assert!(!is_ready_for_playback(&provider).await);

    provider.set_playback_device("web-player").await;
    assert!(is_ready_for_playback(&provider).await);

    provider.clear_playback_device().await;
    assert!(!is_ready_for_playback(&provider).await);
}

#[tokio::test]
async fn test_resource_over_spotify_provider() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/playlists/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(playlist_body("p1")))
        .mount(&server)
        .await;

    let provider: Arc<dyn AudioProvider> = Arc::new(provider_for(&server).await);
    let resource = Arc::new(PlaylistResource::new(provider));

    let outcome = resource.modify("p1").await.await.unwrap();
    assert_eq!(outcome, LoadOutcome::Applied);
    assert_eq!(resource.tracks().await.unwrap().len(), 1);
}
