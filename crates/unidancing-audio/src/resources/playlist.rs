// ABOUTME: Playlist resource that refetches whenever the selected playlist id changes
// ABOUTME: Request tickets guarantee only the latest selection's response is exposed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

//! # Playlist Resource
//!
//! Every selection issues a ticket from a monotonically increasing counter.
//! A response is applied only if its ticket is still the latest one when it
//! resolves, so a slow fetch for an older selection can never overwrite the
//! playlist of a newer selection:
//!
//! ```text
//! modify("A") -> ticket 1
//! modify("B") -> ticket 2
//! B resolves  -> applied (2 is latest)
//! A resolves  -> discarded (1 is stale)
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::core::AudioProvider;
use crate::models::{Playlist, Track};

/// Lifecycle of the resource's latest request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceStatus {
    /// No playlist selected yet
    Idle,
    /// A fetch for the latest selection is in flight
    Loading,
    /// The latest selection resolved successfully
    Ready,
    /// The latest selection failed with the given message
    Failed(String),
}

impl fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Loading => f.write_str("loading"),
            Self::Ready => f.write_str("ready"),
            Self::Failed(message) => write!(f, "failed: {message}"),
        }
    }
}

/// What happened to a fetch once it resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The playlist was exposed
    Applied,
    /// The fetch failed and the status was set to `Failed`
    Failed,
    /// A newer ticket was issued meanwhile; the response was dropped
    Stale,
    /// No playlist id was selected, nothing was fetched
    Skipped,
}

#[derive(Debug)]
struct State {
    playlist_id: Option<String>,
    playlist: Option<Playlist>,
    status: ResourceStatus,
}

/// Reactive playlist keyed by the selected playlist id
pub struct PlaylistResource {
    provider: Arc<dyn AudioProvider>,
    latest_ticket: AtomicU64,
    state: RwLock<State>,
}

impl PlaylistResource {
    /// Create an idle resource fetching through `provider`
    #[must_use]
    pub fn new(provider: Arc<dyn AudioProvider>) -> Self {
        Self {
            provider,
            latest_ticket: AtomicU64::new(0),
            state: RwLock::new(State {
                playlist_id: None,
                playlist: None,
                status: ResourceStatus::Idle,
            }),
        }
    }

    /// Select a playlist and fetch it in the background
    ///
    /// The returned handle resolves to the fetch's [`LoadOutcome`].
    pub async fn modify(self: &Arc<Self>, playlist_id: impl Into<String>) -> JoinHandle<LoadOutcome> {
        let playlist_id = playlist_id.into();
        let ticket = self.select(&playlist_id).await;
        let resource = Arc::clone(self);
        tokio::spawn(async move { resource.load_ticket(ticket, &playlist_id).await })
    }

    /// Refetch the selected playlist in place
    pub async fn load(&self) -> LoadOutcome {
        let Some(playlist_id) = self.playlist_id().await else {
            return LoadOutcome::Skipped;
        };
        let ticket = self.select(&playlist_id).await;
        self.load_ticket(ticket, &playlist_id).await
    }

    /// Fetch `playlist_id` on behalf of `ticket`, applying the result only if
    /// `ticket` is still the latest
    pub async fn load_ticket(&self, ticket: u64, playlist_id: &str) -> LoadOutcome {
        let result = self.provider.get_playlist(playlist_id).await;

        let mut state = self.state.write().await;
        let latest = self.latest_ticket.load(Ordering::SeqCst);
        if ticket != latest {
            debug!(
                playlist_id,
                ticket, latest, "Discarding stale playlist response"
            );
            return LoadOutcome::Stale;
        }

        match result {
            Ok(playlist) => {
                info!(playlist_id, name = %playlist.name, "Playlist loaded");
                state.playlist = Some(playlist);
                state.status = ResourceStatus::Ready;
                LoadOutcome::Applied
            }
            Err(e) => {
                error!(playlist_id, error = %e, "Failed to load playlist");
                state.status = ResourceStatus::Failed(e.to_string());
                LoadOutcome::Failed
            }
        }
    }

    async fn select(&self, playlist_id: &str) -> u64 {
        let mut state = self.state.write().await;
        let ticket = self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1;
        state.playlist_id = Some(playlist_id.to_owned());
        state.status = ResourceStatus::Loading;
        debug!(playlist_id, ticket, "Playlist selected");
        ticket
    }

    /// Latest issued ticket, 0 before the first selection
    #[must_use]
    pub fn latest_ticket(&self) -> u64 {
        self.latest_ticket.load(Ordering::SeqCst)
    }

    /// Currently selected playlist id
    pub async fn playlist_id(&self) -> Option<String> {
        self.state.read().await.playlist_id.clone()
    }

    /// Latest applied playlist
    pub async fn playlist(&self) -> Option<Playlist> {
        self.state.read().await.playlist.clone()
    }

    /// Tracks of the latest applied playlist
    ///
    /// `None` without a playlist or track page; items without a track are skipped.
    pub async fn tracks(&self) -> Option<Vec<Track>> {
        let state = self.state.read().await;
        state
            .playlist
            .as_ref()?
            .tracks()
            .map(|tracks| tracks.into_iter().cloned().collect())
    }

    /// Status of the latest selection
    pub async fn status(&self) -> ResourceStatus {
        self.state.read().await.status.clone()
    }
}

impl fmt::Debug for PlaylistResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaylistResource")
            .field("provider", &self.provider.name())
            .field("latest_ticket", &self.latest_ticket())
            .finish_non_exhaustive()
    }
}
