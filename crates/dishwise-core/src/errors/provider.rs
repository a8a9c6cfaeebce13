// ABOUTME: Error types for external nutrition provider calls
// ABOUTME: Distinguishes transport, API, parse, rate-limit, and circuit-breaker failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Errors raised while talking to an external nutrition provider
///
/// None of these escape the resolver: each one is logged and treated as a
/// provider miss so resolution falls through to the next tier.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport-level failure (connection refused, timeout, TLS)
    #[error("network error: {0}")]
    NetworkError(String),

    /// Provider answered with a non-success status
    #[error("{provider} API error (HTTP {status_code}): {message}")]
    ApiError {
        /// Provider name
        provider: String,
        /// HTTP status code returned
        status_code: u16,
        /// Response body or summary
        message: String,
        /// Whether retrying later may succeed
        retryable: bool,
    },

    /// Response body could not be decoded
    #[error("{provider} returned malformed {field}: {source}")]
    ParseError {
        /// Provider name
        provider: String,
        /// Which payload failed to decode
        field: &'static str,
        /// Underlying decode error
        source: serde_json::Error,
    },

    /// Provider quota exhausted
    #[error("{provider} rate limit exceeded ({limit_type}), retry after {retry_after_secs}s")]
    RateLimitExceeded {
        /// Provider name
        provider: String,
        /// Seconds until a retry is sensible
        retry_after_secs: u64,
        /// Which limit was hit
        limit_type: String,
    },

    /// Circuit breaker is open and rejecting calls
    #[error("{provider} circuit breaker open, retry after {retry_after_secs}s")]
    CircuitBreakerOpen {
        /// Provider name
        provider: String,
        /// Seconds until the breaker allows a recovery probe
        retry_after_secs: u64,
    },

    /// Provider is missing credentials or has an unusable configuration
    #[error("{provider} configuration error: {details}")]
    ConfigurationError {
        /// Provider name
        provider: String,
        /// What is wrong
        details: String,
    },

    /// Provider has no data for the request
    #[error("{provider} has no {resource_type} for '{resource_id}'")]
    NotFound {
        /// Provider name
        provider: String,
        /// Kind of resource requested
        resource_type: String,
        /// Identifier or query that missed
        resource_id: String,
    },
}

impl ProviderError {
    /// Whether the failure is transient and should count against the circuit breaker
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::NetworkError(_) | Self::RateLimitExceeded { .. } => true,
            Self::ApiError { retryable, .. } => *retryable,
            Self::ParseError { .. }
            | Self::CircuitBreakerOpen { .. }
            | Self::ConfigurationError { .. }
            | Self::NotFound { .. } => false,
        }
    }
}

#[cfg(feature = "provider-errors")]
impl From<reqwest::Error> for ProviderError {
    fn from(error: reqwest::Error) -> Self {
        Self::NetworkError(error.to_string())
    }
}

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;
