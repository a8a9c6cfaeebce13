// ABOUTME: Circuit breaker guarding calls to the external recipe API
// ABOUTME: Fails fast while the provider is down so resolution drops to local tiers quickly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::future::Future;
use std::sync::atomic::{AtomicU32, AtomicU64, AtomicU8, Ordering};
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::errors::provider::ProviderError;

/// Breaker states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitState {
    /// Calls pass through; retryable failures are counted
    Closed,
    /// Calls are rejected without touching the provider
    Open,
    /// One probe call is in flight to test recovery
    HalfOpen,
}

impl CircuitState {
    const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Closed,
            1 => Self::Open,
            _ => Self::HalfOpen,
        }
    }

    const fn as_u8(self) -> u8 {
        match self {
            Self::Closed => 0,
            Self::Open => 1,
            Self::HalfOpen => 2,
        }
    }
}

/// Thresholds and timeouts for a [`CircuitBreaker`]
#[derive(Debug, Clone)]
pub struct CircuitBreakerConfig {
    /// Consecutive retryable failures that open the circuit
    pub failure_threshold: u32,
    /// How long the circuit stays open before a probe is allowed
    pub recovery_timeout: Duration,
    /// Successful probes needed to close the circuit again
    pub success_threshold: u32,
}

impl Default for CircuitBreakerConfig {
    fn default() -> Self {
        Self {
            failure_threshold: 5,
            recovery_timeout: Duration::from_secs(30),
            success_threshold: 1,
        }
    }
}

impl CircuitBreakerConfig {
    /// Custom thresholds
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

    /// Trip early and wait longer; for metered or flaky APIs
    #[must_use]
    pub const fn strict() -> Self {
        Self::new(3, Duration::from_secs(60), 2)
    }

    /// Tolerate bursts of errors and recover quickly
    #[must_use]
    pub const fn lenient() -> Self {
        Self::new(10, Duration::from_secs(15), 1)
    }
}

/// Lock-free circuit breaker
///
/// Only failures that [`ProviderError::is_retryable`] reports as transient
/// count toward opening the circuit. A 404 or a malformed body says nothing
/// about provider health.
pub struct CircuitBreaker {
    service: String,
    state: AtomicU8,
    failure_count: AtomicU32,
    success_count: AtomicU32,
    /// Millis since `created` at which the circuit last opened
    opened_at_ms: AtomicU64,
    config: CircuitBreakerConfig,
    created: Instant,
}

impl CircuitBreaker {
    /// Breaker with default thresholds
    #[must_use]
    pub fn new(service: &str) -> Self {
        Self::with_config(service, CircuitBreakerConfig::default())
    }

    /// Breaker with explicit thresholds
    #[must_use]
    pub fn with_config(service: &str, config: CircuitBreakerConfig) -> Self {
        Self {
            service: service.to_owned(),
            state: AtomicU8::new(CircuitState::Closed.as_u8()),
            failure_count: AtomicU32::new(0),
            success_count: AtomicU32::new(0),
            opened_at_ms: AtomicU64::new(0),
            config,
            created: Instant::now(),
        }
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> CircuitState {
        CircuitState::from_u8(self.state.load(Ordering::SeqCst))
    }

    /// Consecutive retryable failures seen while closed
    #[must_use]
    pub fn failure_count(&self) -> u32 {
        self.failure_count.load(Ordering::SeqCst)
    }

    fn now_ms(&self) -> u64 {
        u64::try_from(self.created.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    fn recovery_ms(&self) -> u64 {
        u64::try_from(self.config.recovery_timeout.as_millis()).unwrap_or(u64::MAX)
    }

    fn set_state(&self, state: CircuitState) {
        self.state.store(state.as_u8(), Ordering::SeqCst);
    }

    /// Whether a call may go through right now
    ///
    /// An open circuit whose recovery timeout has elapsed moves to half-open
    /// and admits exactly one caller.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        match self.state() {
            CircuitState::Closed => true,
            CircuitState::HalfOpen => false,
            CircuitState::Open => {
                let since_open = self
                    .now_ms()
                    .saturating_sub(self.opened_at_ms.load(Ordering::SeqCst));
                if since_open < self.recovery_ms() {
                    return false;
                }
                let probing = self
                    .state
                    .compare_exchange(
                        CircuitState::Open.as_u8(),
                        CircuitState::HalfOpen.as_u8(),
                        Ordering::SeqCst,
                        Ordering::SeqCst,
                    )
                    .is_ok();
                if probing {
                    info!(service = %self.service, "Circuit half-open, probing provider");
                }
                probing
            }
        }
    }

    /// Record a successful call
    pub fn record_success(&self) {
        match self.state() {
            CircuitState::Closed => self.failure_count.store(0, Ordering::SeqCst),
            CircuitState::HalfOpen => {
                let successes = self.success_count.fetch_add(1, Ordering::SeqCst) + 1;
                if successes >= self.config.success_threshold {
                    self.set_state(CircuitState::Closed);
                    self.failure_count.store(0, Ordering::SeqCst);
                    self.success_count.store(0, Ordering::SeqCst);
                    info!(service = %self.service, "Circuit closed, provider recovered");
                } else {
                    // Let the next probe through
                    self.set_state(CircuitState::Open);
                    self.opened_at_ms.store(0, Ordering::SeqCst);
                }
            }
            CircuitState::Open => {}
        }
    }

    /// Record a retryable failure
    pub fn record_failure(&self) {
        match self.state() {
            CircuitState::Closed => {
                let failures = self.failure_count.fetch_add(1, Ordering::SeqCst) + 1;
                if failures >= self.config.failure_threshold {
                    self.trip();
                    warn!(
                        service = %self.service,
                        failures,
                        recovery_timeout_secs = self.config.recovery_timeout.as_secs(),
                        "Circuit opened, provider failing"
                    );
                }
            }
            CircuitState::HalfOpen => {
                self.success_count.store(0, Ordering::SeqCst);
                self.trip();
                warn!(service = %self.service, "Circuit re-opened, recovery probe failed");
            }
            CircuitState::Open => self.opened_at_ms.store(self.now_ms(), Ordering::SeqCst),
        }
    }

    fn trip(&self) {
        self.opened_at_ms.store(self.now_ms(), Ordering::SeqCst);
        self.set_state(CircuitState::Open);
    }

    /// Seconds until an open circuit admits a probe, rounded up
    #[must_use]
    pub fn retry_after_secs(&self) -> u64 {
        let since_open = self
            .now_ms()
            .saturating_sub(self.opened_at_ms.load(Ordering::SeqCst));
        self.recovery_ms()
            .saturating_sub(since_open)
            .saturating_add(999)
            / 1000
    }

    /// Run `operation` under breaker protection
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::CircuitBreakerOpen`] without polling `operation`
    /// while the circuit rejects calls; otherwise the operation's own error.
    pub async fn call<F, T, E>(&self, operation: F) -> Result<T, ProviderError>
    where
        F: Future<Output = Result<T, E>>,
        E: Into<ProviderError>,
    {
        if !self.is_allowed() {
            return Err(ProviderError::CircuitBreakerOpen {
                provider: self.service.clone(),
                retry_after_secs: self.retry_after_secs(),
            });
        }

        match operation.await {
            Ok(value) => {
                self.record_success();
                Ok(value)
            }
            Err(error) => {
                let error = error.into();
                if error.is_retryable() {
                    self.record_failure();
                } else if self.state() == CircuitState::HalfOpen {
                    // The provider answered, so it is reachable
                    self.record_success();
                }
                Err(error)
            }
        }
    }

    /// Force the circuit closed
    pub fn reset(&self) {
        self.set_state(CircuitState::Closed);
        self.failure_count.store(0, Ordering::SeqCst);
        self.success_count.store(0, Ordering::SeqCst);
        info!(service = %self.service, "Circuit manually reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network_error() -> ProviderError {
        ProviderError::NetworkError("connection refused".to_owned())
    }

    #[tokio::test]
    async fn test_opens_after_threshold() {
        let breaker =
            CircuitBreaker::with_config("recipe-api", CircuitBreakerConfig::new(2, Duration::from_secs(60), 1));

        for _ in 0..2 {
            let result: Result<(), _> = breaker.call(async { Err(network_error()) }).await;
            assert!(result.is_err());
        }
        assert_eq!(breaker.state(), CircuitState::Open);

        let rejected: Result<(), _> = breaker.call(async { Ok::<_, ProviderError>(()) }).await;
        assert!(matches!(rejected, Err(ProviderError::CircuitBreakerOpen { .. })));
    }

    #[tokio::test]
    async fn test_non_retryable_errors_do_not_trip() {
        let breaker =
            CircuitBreaker::with_config("recipe-api", CircuitBreakerConfig::new(1, Duration::from_secs(60), 1));
        let result: Result<(), _> = breaker
            .call(async {
                Err(ProviderError::ApiError {
                    provider: "recipe-api".to_owned(),
                    status_code: 404,
                    message: String::new(),
                    retryable: false,
                })
            })
            .await;
        assert!(result.is_err());
        assert_eq!(breaker.state(), CircuitState::Closed);
        assert_eq!(breaker.failure_count(), 0);
    }

    #[tokio::test]
    async fn test_recovers_after_timeout() {
        let breaker =
            CircuitBreaker::with_config("recipe-api", CircuitBreakerConfig::new(1, Duration::ZERO, 1));
        let _: Result<(), _> = breaker.call(async { Err(network_error()) }).await;
        assert_eq!(breaker.state(), CircuitState::Open);

        let probe = breaker.call(async { Ok::<_, ProviderError>(7) }).await;
        assert!(matches!(probe, Ok(7)));
        assert_eq!(breaker.state(), CircuitState::Closed);
    }
}
