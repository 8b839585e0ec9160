// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides logging setup, CMS content fixtures, and a controllable audio provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `unidancing`

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Mutex, Once};
use tokio::sync::oneshot;
use unidancing::audio::{AudioProvider, OAuth2Credentials, ProviderConfig};
use unidancing::errors::{ProviderError, ProviderResult};
use unidancing::models::{Artist, Playlist, PlaylistItem, PlaylistTracks, Track};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// A media payload with the given type name
pub fn media_json(typename: &str, title: &str) -> Value {
    json!({ "__typename": typename, "title": title })
}

/// A CMS exercise with exercise-level and instruction-level media
pub fn exercise_json(slug: &str, personal: &[&str], difficulty: &str) -> Value {
    json!({
        "_sys": { "filename": slug },
        "title": format!("Exercise {slug}"),
        "personal": personal,
        "locomotion": "unicycle",
        "difficulty": difficulty,
        "tags": ["freestyle"],
        "instructions": [
            {
                "title": "Warm up",
                "media": [
                    media_json("ExerciseInstructionMediaSong", &format!("{slug} warmup song")),
                    null,
                    media_json("ExerciseInstructionMediaLoop", &format!("{slug} loop")),
                ]
            }
        ],
        "media": [
            media_json("ExerciseMediaDancemix", &format!("{slug} mix")),
            media_json("ExerciseMediaSong", &format!("{slug} song")),
            media_json("ExerciseMediaMaterial", &format!("{slug} sheet")),
        ]
    })
}

/// A three exercise catalog export
pub fn catalog_json() -> String {
    json!([
        exercise_json("spin", &["individual"], "beginner"),
        exercise_json("mirror", &["pair", "group"], "intermediate"),
        {
            "_sys": { "filename": "walk-the-line" },
            "title": "Walk the line",
            "personal": ["group"],
            "locomotion": "pedes",
            "difficulty": "advanced",
            "media": [media_json("ExerciseMediaHologram", "future media")]
        }
    ])
    .to_string()
}

/// A track fixture
pub fn track(id: &str, duration_ms: u64) -> Track {
    Track {
        id: Some(id.to_owned()),
        name: format!("Track {id}"),
        uri: format!("spotify:track:{id}"),
        duration_ms,
        artists: vec![Artist {
            id: None,
            name: "The Riders".to_owned(),
        }],
        preview_url: None,
    }
}

/// A playlist fixture whose tracks are named after the playlist
pub fn playlist(id: &str, track_count: usize) -> Playlist {
    Playlist {
        id: id.to_owned(),
        name: format!("Playlist {id}"),
        description: None,
        tracks: Some(PlaylistTracks {
            items: (0..track_count)
                .map(|i| PlaylistItem {
                    added_at: None,
                    track: Some(track(&format!("{id}-{i}"), 180_000)),
                })
                .collect(),
            total: u32::try_from(track_count).unwrap(),
        }),
    }
}

type Reply = ProviderResult<Playlist>;

/// Audio provider whose responses are released by the test
///
/// Each call to `get_playlist(id)` waits until the test calls `respond(id, ..)`.
pub struct GatedProvider {
    config: ProviderConfig,
    pending: Mutex<HashMap<String, oneshot::Receiver<Reply>>>,
    senders: Mutex<HashMap<String, oneshot::Sender<Reply>>>,
}

impl GatedProvider {
    pub fn new(playlist_ids: &[&str]) -> Self {
        let mut pending = HashMap::new();
        let mut senders = HashMap::new();
        for id in playlist_ids {
            let (tx, rx) = oneshot::channel();
            pending.insert((*id).to_owned(), rx);
            senders.insert((*id).to_owned(), tx);
        }
        Self {
            config: ProviderConfig {
                name: "gated".to_owned(),
                auth_url: String::new(),
                token_url: String::new(),
                api_base_url: String::new(),
                default_scopes: vec![],
            },
            pending: Mutex::new(pending),
            senders: Mutex::new(senders),
        }
    }

    /// Release the pending fetch for `playlist_id`
    pub fn respond(&self, playlist_id: &str, reply: Reply) {
        let sender = self.senders.lock().unwrap().remove(playlist_id).unwrap();
        sender.send(reply).ok();
    }
}

#[async_trait]
impl AudioProvider for GatedProvider {
    fn name(&self) -> &'static str {
        "gated"
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }

    async fn set_credentials(&self, _credentials: OAuth2Credentials) -> ProviderResult<()> {
        Ok(())
    }

    async fn is_authenticated(&self) -> bool {
        true
    }

    async fn is_ready_for_playback(&self) -> bool {
        true
    }

    async fn get_playlist(&self, playlist_id: &str) -> ProviderResult<Playlist> {
        let receiver = self.pending.lock().unwrap().remove(playlist_id);
        match receiver {
            Some(receiver) => receiver.await.unwrap_or_else(|_| {
                Err(ProviderError::NetworkError {
                    provider: "gated".to_owned(),
                    message: "reply dropped".to_owned(),
                })
            }),
            None => Err(ProviderError::NotFound {
                provider: "gated".to_owned(),
                resource_type: "playlist".to_owned(),
                resource_id: playlist_id.to_owned(),
            }),
        }
    }
}
