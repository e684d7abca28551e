// SPDX-License-Identifier: MPL-2.0
//! Playback introspection and control of a mounted player.

/// Standard transport surface of a media player widget.
///
/// Mirrors the introspection (`paused`, `currentTime`, `ended`) and
/// control (`play`, `pause`, seeking) every player widget is assumed to
/// expose.
pub trait PlayerTransport {
    fn is_paused(&self) -> bool;

    /// Current playback position in seconds.
    fn position_secs(&self) -> f64;

    /// Whether playback has run to the end.
    fn has_ended(&self) -> bool;

    fn play(&mut self);

    fn pause(&mut self);

    /// Seeks relative to the current position. Implementations clamp to
    /// the playable range.
    fn seek_by(&mut self, delta_secs: f64);
}
