// SPDX-License-Identifier: MPL-2.0
//! The navigable history stack capability.

use crate::domain::MediaKind;
use serde::{Deserialize, Serialize};

/// State payload attached to a history entry for an open overlay.
///
/// A `None` state in the stack represents "overlay closed". The struct is
/// serde-enabled so shells can marshal it into their platform's history
/// state object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
    pub url: String,
    pub kind: MediaKind,
}

impl HistoryState {
    #[must_use]
    pub fn new(url: impl Into<String>, kind: MediaKind) -> Self {
        Self {
            url: url.into(),
            kind,
        }
    }
}

/// The browser-like history stack the engine records into.
///
/// Pushing is the only mutation the engine performs; pops are delivered
/// *to* the engine by the shell (see `SlideshowController::history_popped`)
/// and must never trigger a push in turn.
pub trait HistoryPort {
    /// Pushes a new entry carrying `state` and showing `url` as the
    /// visible address.
    fn push(&mut self, state: Option<HistoryState>, url: &str);

    /// The currently visible address.
    fn current_location(&self) -> String;
}
