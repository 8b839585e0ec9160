// ABOUTME: Circuit breaker for audio service API calls
// ABOUTME: Fails fast while a provider keeps failing, then probes for recovery
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::errors::ProviderError;

/// Circuit breaker states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitState {
    /// Normal operation - requests pass through
    Closed,
    /// Circuit is open - requests fail immediately
    Open,
    /// Testing recovery - probe requests are let through
    HalfOpen,
}

/// Configuration for circuit breaker behavior
#[derive(Debug, Clone)]
pub struct CircuitBreakerConfig {
    /// Consecutive failures before the circuit opens
    pub failure_threshold: u32,
    /// Time the circuit stays open before a recovery probe
    pub recovery_timeout: Duration,
    /// Consecutive probe successes needed to close the circuit again
    pub success_threshold: u32,
}

impl Default for CircuitBreakerConfig {
    fn default() -> Self {
        Self {
            failure_threshold: 5,
            recovery_timeout: Duration::from_secs(30),
            success_threshold: 2,
        }
    }
}

impl CircuitBreakerConfig {
    /// Create a new circuit breaker configuration
    #[must_use]
    pub const fn new(
        failure_threshold: u32,
        recovery_timeout: Duration,
        success_threshold: u32,
    ) -> Self {
        Self {
            failure_threshold,
            recovery_timeout,
            success_threshold,
        }
    }

    /// Stricter configuration for flaky services
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            failure_threshold: 3,
            recovery_timeout: Duration::from_secs(60),
            success_threshold: 3,
        }
    }

    /// Lenient configuration for generally reliable services
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            failure_threshold: 10,
            recovery_timeout: Duration::from_secs(15),
            success_threshold: 1,
        }
    }
}

#[derive(Debug)]
struct BreakerState {
    state: CircuitState,
    failures: u32,
    probe_successes: u32,
    opened_at: Option<Instant>,
}

/// Thread-safe circuit breaker for external API calls
///
/// - **Closed**: requests pass through, consecutive failures are counted.
/// - **Open**: after `failure_threshold` failures every request fails fast
///   with `ProviderError::CircuitBreakerOpen`.
/// - **Half-Open**: once `recovery_timeout` has elapsed, requests are let
///   through as probes; `success_threshold` successes close the circuit, any
///   failure reopens it.
#[derive(Debug)]
pub struct CircuitBreaker {
    provider_name: String,
    config: CircuitBreakerConfig,
    inner: Mutex<BreakerState>,
}

impl CircuitBreaker {
    /// Create a circuit breaker with default configuration
    #[must_use]
    pub fn new(provider_name: &str) -> Self {
        Self::with_config(provider_name, CircuitBreakerConfig::default())
    }

    /// Create a circuit breaker with custom configuration
    #[must_use]
    pub fn with_config(provider_name: &str, config: CircuitBreakerConfig) -> Self {
        Self {
            provider_name: provider_name.to_owned(),
            config,
            inner: Mutex::new(BreakerState {
                state: CircuitState::Closed,
                failures: 0,
                probe_successes: 0,
                opened_at: None,
            }),
        }
    }

    // Counters stay consistent even if a holder panicked mid-update.
    fn lock(&self) -> MutexGuard<'_, BreakerState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current circuit state
    #[must_use]
    pub fn state(&self) -> CircuitState {
        self.lock().state
    }

    /// Current count of consecutive failures
    #[must_use]
    pub fn failure_count(&self) -> u32 {
        self.lock().failures
    }

    /// Whether a request may be attempted now
    ///
    /// An open circuit whose recovery timeout has elapsed moves to half-open.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        let mut inner = self.lock();
        match inner.state {
            CircuitState::Closed | CircuitState::HalfOpen => true,
            CircuitState::Open => {
                let elapsed = inner.opened_at.map_or(Duration::MAX, |at| at.elapsed());
                if elapsed >= self.config.recovery_timeout {
                    inner.state = CircuitState::HalfOpen;
                    inner.probe_successes = 0;
                    info!(
                        provider = %self.provider_name,
                        "Circuit breaker half-open, probing provider"
                    );
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Record a successful operation
    pub fn record_success(&self) {
        let mut inner = self.lock();
        match inner.state {
            CircuitState::Closed => inner.failures = 0,
            CircuitState::HalfOpen => {
                inner.probe_successes += 1;
                if inner.probe_successes >= self.config.success_threshold {
                    inner.state = CircuitState::Closed;
                    inner.failures = 0;
                    inner.probe_successes = 0;
                    inner.opened_at = None;
                    info!(provider = %self.provider_name, "Circuit breaker closed, provider recovered");
                }
            }
            CircuitState::Open => {}
        }
    }

    /// Record a failed operation
    pub fn record_failure(&self) {
        let mut inner = self.lock();
        match inner.state {
            CircuitState::Closed => {
                inner.failures += 1;
                if inner.failures >= self.config.failure_threshold {
                    inner.state = CircuitState::Open;
                    inner.opened_at = Some(Instant::now());
                    warn!(
                        provider = %self.provider_name,
                        failures = inner.failures,
                        recovery_timeout_secs = self.config.recovery_timeout.as_secs(),
                        "Circuit breaker opened, provider failing"
                    );
                }
            }
            CircuitState::HalfOpen => {
                inner.state = CircuitState::Open;
                inner.opened_at = Some(Instant::now());
                inner.probe_successes = 0;
                warn!(provider = %self.provider_name, "Circuit breaker re-opened, recovery probe failed");
            }
            CircuitState::Open => inner.opened_at = Some(Instant::now()),
        }
    }

    /// Seconds until the next recovery probe, rounded up
    #[must_use]
    pub fn retry_after_secs(&self) -> u64 {
        let inner = self.lock();
        inner.opened_at.map_or(0, |at| {
            let remaining = self.config.recovery_timeout.saturating_sub(at.elapsed());
            remaining.as_millis().div_ceil(1000).try_into().unwrap_or(u64::MAX)
        })
    }

    /// Run an async operation under circuit breaker protection
    ///
    /// Only retryable errors count as failures; a 404 says nothing about the
    /// provider's health.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::CircuitBreakerOpen` without running the
    /// operation while the circuit is open; otherwise the operation's error.
    pub async fn call<F, T, E>(&self, operation: F) -> Result<T, ProviderError>
    where
        F: Future<Output = Result<T, E>>,
        E: Into<ProviderError>,
    {
        if !self.is_allowed() {
            return Err(ProviderError::CircuitBreakerOpen {
                provider: self.provider_name.clone(),
                retry_after_secs: self.retry_after_secs(),
            });
        }

        match operation.await {
            Ok(value) => {
                self.record_success();
                Ok(value)
            }
            Err(e) => {
                let error = e.into();
                if error.is_retryable() {
                    self.record_failure();
                }
                Err(error)
            }
        }
    }

    /// Force the circuit closed
    pub fn reset(&self) {
        let mut inner = self.lock();
        inner.state = CircuitState::Closed;
        inner.failures = 0;
        inner.probe_successes = 0;
        inner.opened_at = None;
        info!(provider = %self.provider_name, "Circuit breaker manually reset");
    }
}
