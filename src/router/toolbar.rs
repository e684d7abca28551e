// SPDX-License-Identifier: MPL-2.0
//! Auto-hiding toolbar state for the open overlay.
//!
//! Any pointer-activity signal shows the toolbar and re-arms a single
//! deferred hide. Arming always cancels the previous pending hide first,
//! so at most one is live at any time. The pending handle is cleared when
//! the overlay closes.

use crate::application::port::{MediaSurface, TimerHandle, TimerHost, TimerPurpose};
use crate::config::{DEFAULT_TOOLBAR_TIMEOUT_MS, MAX_TOOLBAR_TIMEOUT_MS, MIN_TOOLBAR_TIMEOUT_MS};
use std::time::Duration;

/// Toolbar auto-hide delay in milliseconds.
///
/// This newtype enforces validity at the type level, clamping the value
/// to the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarTimeout(u64);

impl ToolbarTimeout {
    /// Creates a new timeout value, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_TOOLBAR_TIMEOUT_MS, MAX_TOOLBAR_TIMEOUT_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the timeout as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for ToolbarTimeout {
    fn default() -> Self {
        Self(DEFAULT_TOOLBAR_TIMEOUT_MS)
    }
}

/// Visibility state plus the single re-armable deferred hide.
#[derive(Debug, Default)]
pub struct ToolbarTimer {
    timeout: ToolbarTimeout,
    pending_hide: Option<TimerHandle>,
    visible: bool,
}

impl ToolbarTimer {
    #[must_use]
    pub fn new(timeout: ToolbarTimeout) -> Self {
        Self {
            timeout,
            pending_hide: None,
            visible: false,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Pointer activity: show immediately, re-arm the hide.
    pub fn ping<S: MediaSurface, T: TimerHost>(&mut self, surface: &mut S, timers: &mut T) {
        surface.set_toolbar_visible(true);
        self.visible = true;
        if let Some(handle) = self.pending_hide.take() {
            timers.cancel(handle);
        }
        self.pending_hide = Some(timers.schedule(self.timeout.as_duration(), TimerPurpose::ToolbarHide));
    }

    /// Routes a fired timer handle. Returns `false` for handles this
    /// timer does not own.
    pub fn timer_fired<S: MediaSurface>(&mut self, handle: TimerHandle, surface: &mut S) -> bool {
        if self.pending_hide != Some(handle) {
            return false;
        }
        self.pending_hide = None;
        self.visible = false;
        surface.set_toolbar_visible(false);
        true
    }

    /// Overlay closed: drop the pending hide and the visible state.
    pub fn close<S: MediaSurface, T: TimerHost>(&mut self, surface: &mut S, timers: &mut T) {
        if let Some(handle) = self.pending_hide.take() {
            timers.cancel(handle);
        }
        if self.visible {
            self.visible = false;
            surface.set_toolbar_visible(false);
        }
    }
}
