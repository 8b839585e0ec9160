// ABOUTME: Playlist commands for unidancing-cli
// ABOUTME: Fetches a Spotify playlist through the playlist resource and prints its tracks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

use std::sync::Arc;
use std::time::Instant;

use tracing::info;
use unidancing::audio::{
    initialize_shared_client, is_authenticated, is_ready_for_playback, AudioProvider, LoadOutcome,
    PlaylistResource, ResourceStatus, SpotifyProvider,
};
use unidancing::config::AppConfig;
use unidancing::errors::{AppError, AppResult, ErrorCode};
use unidancing::logging::AppLogger;

use crate::helpers::display::display_playlist;

/// Fetch and print a playlist
pub async fn show(playlist_id: &str) -> AppResult<()> {
    let config = AppConfig::from_env();
    info!("{}", config.summary());

    initialize_shared_client(
        config.http_client.timeout_secs,
        config.http_client.connect_timeout_secs,
    );

    let credentials = config.spotify.credentials().ok_or_else(|| {
        AppError::new(
            ErrorCode::AuthRequired,
            "SPOTIFY_ACCESS_TOKEN must be set to fetch playlists",
        )
    })?;

    let spotify = SpotifyProvider::with_api_base_url(&config.spotify.api_base_url)
        .with_retry_config(config.spotify.retry_config());
    spotify.set_credentials(credentials).await?;
    if let Some(device_id) = &config.spotify.device_id {
        spotify.set_playback_device(device_id.as_str()).await;
    }

    let provider: Arc<dyn AudioProvider> = Arc::new(spotify);
    info!(
        authenticated = is_authenticated(provider.as_ref()).await,
        ready_for_playback = is_ready_for_playback(provider.as_ref()).await,
        "Spotify provider ready"
    );

    let resource = Arc::new(PlaylistResource::new(Arc::clone(&provider)));
    let started = Instant::now();
    let outcome = resource
        .modify(playlist_id)
        .await
        .await
        .map_err(|e| AppError::internal(format!("Playlist fetch task failed: {e}")))?;
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    AppLogger::log_provider_call(
        provider.name(),
        "get_playlist",
        outcome == LoadOutcome::Applied,
        elapsed_ms,
    );

    match resource.status().await {
        ResourceStatus::Failed(message) => Err(AppError::external_service(provider.name(), message)
            .with_resource_id(playlist_id)),
        _ => {
            if let Some(playlist) = resource.playlist().await {
                display_playlist(&playlist, resource.tracks().await.as_deref());
            }
            Ok(())
        }
    }
}
