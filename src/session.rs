// SPDX-License-Identifier: MPL-2.0
//! The live state of one open overlay instance.
//!
//! Exactly one session exists per controller. "Open" is not stored
//! separately: the session is open precisely when it has a current
//! entry, which makes the open/current invariant structural.

use crate::domain::Entry;

/// Mutable state of the overlay: what is shown and where to return on
/// exit.
#[derive(Debug, Clone, Default)]
pub struct SlideshowSession {
    current: Option<Entry>,
    origin_location: Option<String>,
}

impl SlideshowSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the overlay is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// The entry currently displayed.
    #[must_use]
    pub fn current(&self) -> Option<&Entry> {
        self.current.as_ref()
    }

    /// The location to restore on exit, captured when the session opened.
    #[must_use]
    pub fn origin_location(&self) -> Option<&str> {
        self.origin_location.as_deref()
    }

    /// Opens the session on `entry`. The origin is captured once per
    /// opening; re-opening an already open session keeps the original.
    pub fn open(&mut self, entry: Entry, origin: impl Into<String>) {
        if self.origin_location.is_none() {
            self.origin_location = Some(origin.into());
        }
        self.current = Some(entry);
    }

    /// Replaces the current entry while staying open.
    pub fn advance(&mut self, entry: Entry) {
        debug_assert!(self.is_open());
        self.current = Some(entry);
    }

    /// Closes the session, returning the entry that was showing.
    pub fn close(&mut self) -> Option<Entry> {
        self.origin_location = None;
        self.current.take()
    }
}
