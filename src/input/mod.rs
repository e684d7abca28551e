// SPDX-License-Identifier: MPL-2.0
//! Input normalization: keyboard, touch gestures and click zones all
//! reduce to the same small action set before they reach the session
//! state machine.
//!
//! The mappings here are pure; transport refinements (an arrow key
//! seeking a playing video instead of navigating) are applied by the
//! controller, which is the only place with access to player state.

pub mod keyboard;
pub mod touch;

pub use keyboard::{map_key, Key, Modifiers};
pub use touch::TouchTracker;

/// Normalized user intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Previous,
    Exit,
    /// Toggle playback on a mounted player; without one, policy decides
    /// whether it advances instead.
    PlayPause,
}

/// Where inside the open overlay a click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickZone {
    /// The image element itself.
    Image,
    /// A mounted video/audio player (its own controls handle the click).
    Player,
    /// Anywhere else in the overlay.
    Elsewhere,
}

/// Maps a click to an action. Clicking the image advances; clicking a
/// player is left to the player; clicking outside the media closes.
#[must_use]
pub fn map_click(zone: ClickZone) -> Option<Action> {
    match zone {
        ClickZone::Image => Some(Action::Next),
        ClickZone::Player => None,
        ClickZone::Elsewhere => Some(Action::Exit),
    }
}
