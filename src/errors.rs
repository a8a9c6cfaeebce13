// ABOUTME: Unified error types for the root crate, re-exported from dishwise-core
// ABOUTME: Keeps `dishwise::errors::AppError` as the path binaries and tests import
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Storage, configuration, and internal failures use [`AppError`]; provider
//! failures use [`ProviderError`] and never escape a resolution.

pub use dishwise_core::errors::{AppError, AppResult, ErrorCode, ProviderError, ProviderResult};
