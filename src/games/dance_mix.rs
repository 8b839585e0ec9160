// ABOUTME: Dance mix game parameters and their query string encoding
// ABOUTME: Parses exercises, playlist, and duration from URL query pairs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

use crate::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// URL parameters of the dance mix game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DanceMixParam {
    /// Comma separated exercise slugs
    Exercises,
    /// Spotify playlist id
    Playlist,
    /// Session length in seconds
    Duration,
}

impl DanceMixParam {
    /// Every parameter
    pub const ALL: [Self; 3] = [Self::Exercises, Self::Playlist, Self::Duration];

    /// Query parameter name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Exercises => "exercises",
            Self::Playlist => "playlist",
            Self::Duration => "duration",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|param| param.as_str() == key)
    }
}

impl fmt::Display for DanceMixParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed dance mix session parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DanceMixParams {
    /// Exercise slugs in selection order
    pub exercises: Vec<String>,
    /// Playlist to play during the session
    pub playlist: Option<String>,
    /// Session length in seconds
    pub duration_secs: Option<u32>,
}

impl DanceMixParams {
    /// Parse from decoded query pairs
    ///
    /// `exercises` may repeat and may hold comma separated slugs; unknown keys
    /// are ignored and empty values count as absent.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` if `duration` is not a whole
    /// number of seconds.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref().trim());
            if value.is_empty() {
                continue;
            }
            match DanceMixParam::from_key(key) {
                Some(DanceMixParam::Exercises) => params.exercises.extend(
                    value
                        .split(',')
                        .map(str::trim)
                        .filter(|slug| !slug.is_empty())
                        .map(str::to_owned),
                ),
                Some(DanceMixParam::Playlist) => params.playlist = Some(value.to_owned()),
                Some(DanceMixParam::Duration) => {
                    let secs = value
                        .parse()
                        .map_err(|_| DomainError::invalid_value("duration", value))?;
                    params.duration_secs = Some(secs);
                }
                None => debug!(key, "Ignoring unknown dance mix parameter"),
            }
        }
        Ok(params)
    }

    /// Encode as query pairs, omitting absent values
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(DanceMixParam::ALL.len());
        if !self.exercises.is_empty() {
            pairs.push((DanceMixParam::Exercises.as_str(), self.exercises.join(",")));
        }
        if let Some(playlist) = &self.playlist {
            pairs.push((DanceMixParam::Playlist.as_str(), playlist.clone()));
        }
        if let Some(duration) = self.duration_secs {
            pairs.push((DanceMixParam::Duration.as_str(), duration.to_string()));
        }
        pairs
    }
}
