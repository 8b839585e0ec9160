// ABOUTME: Playlist and track models returned by the audio service
// ABOUTME: Mirrors the Spotify Web API playlist object, keeping only what playback needs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Artist credited on a track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    /// Service identifier (absent for local files)
    #[serde(default)]
    pub id: Option<String>,
    /// Display name
    pub name: String,
}

/// A playable track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Service identifier (absent for local files)
    #[serde(default)]
    pub id: Option<String>,
    /// Track title
    pub name: String,
    /// Playback URI (e.g. `spotify:track:...`)
    pub uri: String,
    /// Length in milliseconds
    #[serde(default)]
    pub duration_ms: u64,
    /// Credited artists
    #[serde(default)]
    pub artists: Vec<Artist>,
    /// 30 second preview, if the service offers one
    #[serde(default)]
    pub preview_url: Option<String>,
}

impl Track {
    /// Comma separated artist names
    #[must_use]
    pub fn artist_names(&self) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// One entry of a playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistItem {
    /// When the entry was added
    #[serde(default)]
    pub added_at: Option<DateTime<Utc>>,
    /// The track, `None` when the service no longer provides it
    #[serde(default)]
    pub track: Option<Track>,
}

/// Page of playlist entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistTracks {
    /// Entries on this page
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
    /// Total number of entries in the playlist
    #[serde(default)]
    pub total: u32,
}

/// A playlist as returned by the audio service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Service identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Owner supplied description
    #[serde(default)]
    pub description: Option<String>,
    /// First page of entries
    #[serde(default)]
    pub tracks: Option<PlaylistTracks>,
}

impl Playlist {
    /// Tracks of all entries that still carry one; `None` if the playlist has no track page
    #[must_use]
    pub fn tracks(&self) -> Option<Vec<&Track>> {
        self.tracks
            .as_ref()
            .map(|page| page.items.iter().filter_map(|i| i.track.as_ref()).collect())
    }

    /// Sum of track durations in milliseconds
    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        self.tracks()
            .map(|tracks| tracks.iter().map(|t| t.duration_ms).sum())
            .unwrap_or(0)
    }
}
