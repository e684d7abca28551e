// SPDX-License-Identifier: MPL-2.0
//! History synchronization: one push per user-visible transition.
//!
//! Every open, navigate and close goes through [`HistorySync`]; no caller
//! presents media without recording it here first. The reverse direction
//! (back/forward pops) is delivered by the shell straight to the
//! controller, which re-presents without pushing.

use crate::application::port::{HistoryPort, HistoryState};
use crate::domain::Entry;

/// Records session transitions into the navigable history stack.
#[derive(Debug)]
pub struct HistorySync<H: HistoryPort> {
    port: H,
}

impl<H: HistoryPort> HistorySync<H> {
    #[must_use]
    pub fn new(port: H) -> Self {
        Self { port }
    }

    /// Records an entry becoming visible. The entry's target doubles as
    /// the visible address, which makes every opened entry independently
    /// bookmarkable.
    pub fn record_open(&mut self, entry: &Entry) {
        log::debug!("history: open {}", entry.target());
        self.port.push(
            Some(HistoryState::new(entry.target(), entry.kind())),
            entry.target(),
        );
    }

    /// Records the overlay closing, pointing the address back at `origin`
    /// so that further back-navigation leaves the sequence instead of
    /// re-opening it.
    pub fn record_close(&mut self, origin: &str) {
        log::debug!("history: close, restoring {}", origin);
        self.port.push(None, origin);
    }

    /// The currently visible address.
    #[must_use]
    pub fn current_location(&self) -> String {
        self.port.current_location()
    }

    #[must_use]
    pub fn port(&self) -> &H {
        &self.port
    }

    pub fn port_mut(&mut self) -> &mut H {
        &mut self.port
    }
}

/// In-memory history stack with browser push/back/forward semantics.
///
/// Ships with the crate as the reference implementation: pushing while
/// back in the stack truncates the forward tail, exactly like a browser.
/// Shells embedding a real navigable stack implement [`HistoryPort`]
/// themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryHistory {
    entries: Vec<(Option<HistoryState>, String)>,
    index: usize,
}

impl MemoryHistory {
    /// Creates a stack whose first entry is the origin page, closed.
    #[must_use]
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            entries: vec![(None, origin.into())],
            index: 0,
        }
    }

    /// Steps back one entry and returns the state arrived at, or `None`
    /// when already at the oldest entry.
    pub fn back(&mut self) -> Option<Option<HistoryState>> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(self.entries[self.index].0.clone())
    }

    /// Steps forward one entry and returns the state arrived at, or
    /// `None` when already at the newest entry.
    pub fn forward(&mut self) -> Option<Option<HistoryState>> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(self.entries[self.index].0.clone())
    }

    /// The state of the entry currently shown.
    #[must_use]
    pub fn current_state(&self) -> Option<&HistoryState> {
        self.entries[self.index].0.as_ref()
    }

    /// All entries, oldest first, as `(state, url)` pairs.
    #[must_use]
    pub fn entries(&self) -> &[(Option<HistoryState>, String)] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl HistoryPort for MemoryHistory {
    fn push(&mut self, state: Option<HistoryState>, url: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push((state, url.to_string()));
        self.index = self.entries.len() - 1;
    }

    fn current_location(&self) -> String {
        self.entries[self.index].1.clone()
    }
}
