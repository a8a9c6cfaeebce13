// ABOUTME: Shared HTTP client with connection pooling for recipe API calls
// ABOUTME: Timeouts are configured once at startup; later calls reuse the same pool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;

/// Timeouts applied to outbound provider requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpClientSettings {
    /// Whole-request timeout
    pub timeout: Duration,
    /// TCP/TLS connect timeout
    pub connect_timeout: Duration,
}

impl Default for HttpClientSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

static CLIENT_SETTINGS: OnceLock<HttpClientSettings> = OnceLock::new();

static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Record timeouts for the shared client
///
/// Returns `false` when settings were already recorded; the first call wins.
#[must_use]
pub fn configure_shared_client(settings: HttpClientSettings) -> bool {
    CLIENT_SETTINGS.set(settings).is_ok()
}

/// Build a standalone client with the given timeouts
#[must_use]
pub fn build_client(settings: &HttpClientSettings) -> Client {
    ClientBuilder::new()
        .timeout(settings.timeout)
        .connect_timeout(settings.connect_timeout)
        .user_agent(concat!("dishwise/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// The process-wide client, built on first use
#[must_use]
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let settings = CLIENT_SETTINGS.get().copied().unwrap_or_default();
        build_client(&settings)
    })
}
