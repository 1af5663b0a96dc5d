// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Locale**: Default locale and system locale polling
//! - **Window**: Initial and minimum window size

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither the CLI, the config file nor the OS select a
/// packaged one.
pub const DEFAULT_LOCALE: &str = "en-US";

/// How often the OS locale is re-read to follow system changes (in milliseconds).
pub const LOCALE_POLL_INTERVAL_MS: u64 = 2_000;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 420.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 320.0;
pub const MIN_WINDOW_WIDTH: f32 = 240.0;
pub const MIN_WINDOW_HEIGHT: f32 = 200.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(LOCALE_POLL_INTERVAL_MS >= 100);
    assert!(MIN_WINDOW_WIDTH > 0.0);
    assert!(MIN_WINDOW_HEIGHT > 0.0);
    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
};
