// SPDX-License-Identifier: MPL-2.0
//! Test doubles for the engine's ports.
//!
//! Used by the crate's own unit and integration tests, and useful to
//! embedders writing tests against `SlideshowController` without a real
//! surface or scheduler.

use crate::application::port::{
    MediaSurface, PlayerTransport, TimerHandle, TimerHost, TimerPurpose,
};
use crate::domain::MediaKind;
use std::time::Duration;

/// Everything a [`RecordingSurface`] was asked to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    CreateImage,
    SetImageSource(String),
    MountPlayer(MediaKind, String, String),
    Clear,
    Waiting(bool),
    Toolbar(bool),
    Focus(String),
}

/// Scriptable stand-in for a mounted player widget.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedPlayer {
    pub paused: bool,
    pub position: f64,
    pub ended: bool,
    pub seeks: Vec<f64>,
    pub play_calls: usize,
    pub pause_calls: usize,
}

impl ScriptedPlayer {
    /// A player as it looks right after an autoplaying mount.
    #[must_use]
    pub fn autoplaying() -> Self {
        Self {
            paused: false,
            position: 0.0,
            ended: false,
            seeks: Vec::new(),
            play_calls: 0,
            pause_calls: 0,
        }
    }
}

impl PlayerTransport for ScriptedPlayer {
    fn is_paused(&self) -> bool {
        self.paused
    }

    fn position_secs(&self) -> f64 {
        self.position
    }

    fn has_ended(&self) -> bool {
        self.ended
    }

    fn play(&mut self) {
        self.paused = false;
        self.play_calls += 1;
    }

    fn pause(&mut self) {
        self.paused = true;
        self.pause_calls += 1;
    }

    fn seek_by(&mut self, delta_secs: f64) {
        self.position = (self.position + delta_secs).max(0.0);
        self.seeks.push(delta_secs);
    }
}

/// Surface fake that records every call and models the single-media
/// invariant: at most one image element or one player at a time.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    /// `None` — no image element; `Some(src)` — the persistent element
    /// and its current source (empty string after a discard).
    pub image_source: Option<String>,
    pub player: Option<ScriptedPlayer>,
    pub player_kind: Option<MediaKind>,
    pub waiting: bool,
    pub toolbar_visible: bool,
    pub focused: Option<String>,
    pub events: Vec<SurfaceEvent>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of media elements currently in the overlay.
    #[must_use]
    pub fn element_count(&self) -> usize {
        usize::from(self.image_source.is_some()) + usize::from(self.player.is_some())
    }
}

impl MediaSurface for RecordingSurface {
    fn has_image_surface(&self) -> bool {
        self.image_source.is_some()
    }

    fn create_image_surface(&mut self) {
        self.player = None;
        self.player_kind = None;
        self.image_source = Some(String::new());
        self.events.push(SurfaceEvent::CreateImage);
    }

    fn set_image_source(&mut self, target: &str) {
        if let Some(source) = self.image_source.as_mut() {
            target.clone_into(source);
        }
        self.events
            .push(SurfaceEvent::SetImageSource(target.to_string()));
    }

    fn mount_player(&mut self, kind: MediaKind, target: &str, poster: &str) {
        self.image_source = None;
        self.player = Some(ScriptedPlayer::autoplaying());
        self.player_kind = Some(kind);
        self.events.push(SurfaceEvent::MountPlayer(
            kind,
            target.to_string(),
            poster.to_string(),
        ));
    }

    fn clear(&mut self) {
        self.image_source = None;
        self.player = None;
        self.player_kind = None;
        self.events.push(SurfaceEvent::Clear);
    }

    fn set_waiting(&mut self, waiting: bool) {
        self.waiting = waiting;
        self.events.push(SurfaceEvent::Waiting(waiting));
    }

    fn set_toolbar_visible(&mut self, visible: bool) {
        self.toolbar_visible = visible;
        self.events.push(SurfaceEvent::Toolbar(visible));
    }

    fn restore_focus(&mut self, target: &str) {
        self.focused = Some(target.to_string());
        self.events.push(SurfaceEvent::Focus(target.to_string()));
    }

    fn player(&mut self) -> Option<&mut dyn PlayerTransport> {
        self.player
            .as_mut()
            .map(|player| player as &mut dyn PlayerTransport)
    }
}

/// Manually driven scheduler: records what was scheduled and cancelled,
/// fires nothing on its own. Tests pick a handle and feed it back to the
/// controller themselves.
#[derive(Debug, Default)]
pub struct ManualTimers {
    next_id: u64,
    pub pending: Vec<(TimerHandle, Duration, TimerPurpose)>,
    pub cancelled: Vec<TimerHandle>,
}

impl ManualTimers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The newest still-pending handle for `purpose`, if any.
    #[must_use]
    pub fn pending_for(&self, purpose: TimerPurpose) -> Option<TimerHandle> {
        self.pending
            .iter()
            .rev()
            .find(|(_, _, p)| *p == purpose)
            .map(|(handle, _, _)| *handle)
    }

    /// The delay a pending handle was scheduled with.
    #[must_use]
    pub fn delay_of(&self, handle: TimerHandle) -> Option<Duration> {
        self.pending
            .iter()
            .find(|(h, _, _)| *h == handle)
            .map(|(_, delay, _)| *delay)
    }

    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|(h, _, _)| *h == handle)
    }

    /// Marks a handle as delivered (removed from pending) the way a real
    /// host would before reporting the firing.
    pub fn deliver(&mut self, handle: TimerHandle) {
        self.pending.retain(|(h, _, _)| *h != handle);
    }
}

impl TimerHost for ManualTimers {
    fn schedule(&mut self, delay: Duration, purpose: TimerPurpose) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.pending.push((handle, delay, purpose));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|(h, _, _)| *h != handle);
        self.cancelled.push(handle);
    }
}
