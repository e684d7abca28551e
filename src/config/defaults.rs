// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toolbar**: Auto-hide timeout for the overlay control toolbar
//! - **Loading**: Debounce windows for the loading affordance
//! - **Gesture**: Swipe displacement thresholds
//! - **Transport**: Video seek behavior for arrow-key pre-emption

// ==========================================================================
// Toolbar Defaults
// ==========================================================================

/// Default auto-hide delay for the overlay toolbar (in milliseconds).
pub const DEFAULT_TOOLBAR_TIMEOUT_MS: u64 = 3000;

/// Minimum toolbar auto-hide delay (in milliseconds).
pub const MIN_TOOLBAR_TIMEOUT_MS: u64 = 500;

/// Maximum toolbar auto-hide delay (in milliseconds).
pub const MAX_TOOLBAR_TIMEOUT_MS: u64 = 30_000;

// ==========================================================================
// Loading Indicator Defaults
// ==========================================================================

/// Delay before a pending load is allowed to show the waiting affordance
/// (in milliseconds). Loads that complete faster never show it.
pub const LOADING_SHOW_DELAY_MS: u64 = 500;

/// Sampling interval for the waiting affordance once a load is pending
/// (in milliseconds).
pub const LOADING_SAMPLE_INTERVAL_MS: u64 = 300;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Maximum vertical displacement for a horizontal swipe. Gestures with more
/// vertical travel are treated as scrolling and ignored.
pub const SWIPE_MAX_VERTICAL: f32 = 60.0;

/// Minimum horizontal displacement for a swipe. Smaller movements are
/// treated as taps or jitter and ignored.
pub const SWIPE_MIN_HORIZONTAL: f32 = 30.0;

// ==========================================================================
// Transport Defaults
// ==========================================================================

/// Seek step applied when arrow keys control a playing video (in seconds).
pub const DEFAULT_SEEK_STEP_SECS: f64 = 10.0;

/// Minimum playback position before a backward arrow seeks instead of
/// navigating to the previous entry (in seconds).
pub const SEEK_MIN_ELAPSED_SECS: f64 = 1.0;

/// Whether Space advances the slideshow when no player is mounted.
pub const DEFAULT_SPACE_ADVANCES: bool = true;
