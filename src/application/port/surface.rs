// SPDX-License-Identifier: MPL-2.0
//! The overlay drawing surface the presenter renders onto.

use crate::application::port::player::PlayerTransport;
use crate::domain::MediaKind;

/// What the presenter draws on.
///
/// The surface holds at most one piece of media at a time: either the
/// persistent image element or a mounted player. The presenter decides
/// when to reuse and when to rebuild; the surface only executes.
pub trait MediaSurface {
    /// Whether the persistent image element currently exists.
    fn has_image_surface(&self) -> bool;

    /// Replaces the surface contents with a fresh, empty image element.
    fn create_image_surface(&mut self);

    /// Assigns the image element's source. An empty string discards any
    /// in-flight load of the previous source.
    fn set_image_source(&mut self, target: &str);

    /// Replaces the surface contents with a fresh inline player for
    /// `target`, configured to start automatically and to show `poster`
    /// until playback begins.
    fn mount_player(&mut self, kind: MediaKind, target: &str, poster: &str);

    /// Removes whatever media the surface holds.
    fn clear(&mut self);

    /// Shows or hides the waiting affordance.
    fn set_waiting(&mut self, waiting: bool);

    /// Shows or hides the control toolbar.
    fn set_toolbar_visible(&mut self, visible: bool);

    /// Returns keyboard focus to the activation link for `target`.
    fn restore_focus(&mut self, target: &str);

    /// The transport of the currently mounted player, if any.
    fn player(&mut self) -> Option<&mut dyn PlayerTransport>;
}
