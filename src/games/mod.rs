// ABOUTME: Game catalog for training sessions
// ABOUTME: Names each game and the URL parameters its session state is encoded in
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

/// Dance mix game parameters
pub mod dance_mix;

pub use dance_mix::{DanceMixParam, DanceMixParams};

use crate::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Games available in a training session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Game {
    /// Dance to a randomized mix of exercises and music
    #[serde(rename = "dance-mix")]
    DanceMix,
}

impl Game {
    /// Every game
    pub const ALL: [Self; 1] = [Self::DanceMix];

    /// Route name of the game
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DanceMix => "dance-mix",
        }
    }

    /// URL parameters the game reads
    #[must_use]
    pub const fn params(&self) -> &'static [DanceMixParam] {
        match self {
            Self::DanceMix => &DanceMixParam::ALL,
        }
    }
}

impl FromStr for Game {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|game| game.as_str() == s)
            .ok_or_else(|| DomainError::invalid_value("game", s))
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// URL parameter names of every game
pub const ALL_GAME_PARAMS: [&str; DanceMixParam::ALL.len()] = [
    DanceMixParam::Exercises.as_str(),
    DanceMixParam::Playlist.as_str(),
    DanceMixParam::Duration.as_str(),
];
