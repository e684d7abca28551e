// SPDX-License-Identifier: MPL-2.0
//! Keyboard mapping for the open overlay.

use super::Action;

/// The keys the overlay reacts to. Anything else is unhandled and left
/// to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Backspace,
    Delete,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    PageUp,
    PageDown,
    Space,
    Tab,
    Enter,
    Character(char),
}

/// Modifier state at the time of the key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { shift: false };
    pub const SHIFT: Modifiers = Modifiers { shift: true };
}

/// Maps a key press to an action while the overlay owns input.
///
/// Tab and Enter step through the sequence, reversed by Shift. Space maps
/// to [`Action::PlayPause`]; whether it falls through to stepping when no
/// player is mounted is controller policy.
#[must_use]
pub fn map_key(key: Key, modifiers: Modifiers) -> Option<Action> {
    match key {
        Key::Escape | Key::Backspace | Key::Delete | Key::Character('q' | 'Q') => {
            Some(Action::Exit)
        }
        Key::ArrowLeft | Key::ArrowUp | Key::PageUp => Some(Action::Previous),
        Key::ArrowRight | Key::ArrowDown | Key::PageDown => Some(Action::Next),
        Key::Space => Some(Action::PlayPause),
        Key::Tab | Key::Enter => {
            if modifiers.shift {
                Some(Action::Previous)
            } else {
                Some(Action::Next)
            }
        }
        Key::Character(_) => None,
    }
}
