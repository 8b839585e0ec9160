// ABOUTME: Reactive resources backed by an audio provider
// ABOUTME: Each resource refetches when its input changes and exposes the latest result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

/// Playlist resource keyed by playlist id
pub mod playlist;
