// ABOUTME: Playback abilities derived from the audio provider's state
// ABOUTME: Used by games to decide whether music can be started
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

use crate::core::AudioProvider;

/// Whether the provider holds usable credentials
pub async fn is_authenticated(provider: &dyn AudioProvider) -> bool {
    provider.is_authenticated().await
}

/// Whether the provider can start playback now
pub async fn is_ready_for_playback(provider: &dyn AudioProvider) -> bool {
    provider.is_ready_for_playback().await
}
