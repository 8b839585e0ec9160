// ABOUTME: Shared HTTP client with connection pooling for audio service calls
// ABOUTME: Timeouts are configured once at startup; later callers reuse the same pool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;
use tracing::warn;

use crate::constants::defaults::{HTTP_CLIENT_CONNECT_TIMEOUT_SECS, HTTP_CLIENT_TIMEOUT_SECS};

/// Configured timeout values for the shared client
static CLIENT_TIMEOUTS: OnceLock<(u64, u64)> = OnceLock::new();

/// Global shared HTTP client
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Record timeouts for the shared client
///
/// Call once at startup before the first provider is built. Later calls are
/// ignored.
pub fn initialize_shared_client(timeout_secs: u64, connect_timeout_secs: u64) {
    if CLIENT_TIMEOUTS
        .set((timeout_secs, connect_timeout_secs))
        .is_err()
    {
        warn!("Shared HTTP client timeouts already initialized, ignoring new values");
    }
}

/// The shared HTTP client
///
/// Falls back to the default timeouts if `initialize_shared_client()` was not called.
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let (timeout, connect_timeout) = CLIENT_TIMEOUTS
            .get()
            .copied()
            .unwrap_or((HTTP_CLIENT_TIMEOUT_SECS, HTTP_CLIENT_CONNECT_TIMEOUT_SECS));

        ClientBuilder::new()
            .timeout(Duration::from_secs(timeout))
            .connect_timeout(Duration::from_secs(connect_timeout))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}
