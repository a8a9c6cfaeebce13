// ABOUTME: Configuration module for the nutrition engine
// ABOUTME: Environment-only settings for the provider, the durable cache, and matching policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration for Dishwise
//!
//! There are no config files: every setting is read from the environment and
//! falls back to a default when missing or unparseable.

/// Environment variable parsing and typed settings
pub mod environment;

pub use environment::{CacheBackendKind, CacheSettings, EngineConfig, ProviderSettings};
