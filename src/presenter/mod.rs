// SPDX-License-Identifier: MPL-2.0
//! Renders entries into the overlay surface, dispatching by media kind.
//!
//! Images reuse one persistent element across navigations to avoid
//! reconstruction flicker; its source is cleared before each assignment
//! so an in-flight load of the previous image is discarded. Video and
//! audio mount a fresh inline autoplaying player with a poster derived
//! from the target. The presenter is passive about failures: a load
//! error stops the waiting affordance and nothing else.

pub mod loading;

use crate::application::port::{MediaSurface, TimerHandle, TimerHost};
use crate::domain::{Entry, MediaKind};
use loading::LoadingIndicator;

/// Query marker appended to a target to request its preview image.
const POSTER_MARKER: &str = "?thumb";

/// Draws one entry at a time onto a [`MediaSurface`].
#[derive(Debug, Default)]
pub struct MediaPresenter {
    loading: LoadingIndicator,
}

impl MediaPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            loading: LoadingIndicator::new(),
        }
    }

    #[must_use]
    pub fn with_loading(loading: LoadingIndicator) -> Self {
        Self { loading }
    }

    /// Renders `entry`, superseding whatever the surface held before.
    pub fn present<S: MediaSurface, T: TimerHost>(
        &mut self,
        entry: &Entry,
        surface: &mut S,
        timers: &mut T,
    ) {
        let target = strip_query(entry.target());
        log::debug!("present {} ({})", target, entry.kind());

        // A new presentation supersedes any in-flight load; late
        // completion signals for the old source only ever touch the
        // indicator, which is reset here.
        self.loading.finish(surface, timers);

        match entry.kind() {
            MediaKind::Image => {
                if !surface.has_image_surface() {
                    surface.clear();
                    surface.create_image_surface();
                }
                surface.set_image_source("");
                self.loading.start(timers);
                surface.set_image_source(target);
            }
            MediaKind::Video | MediaKind::Audio => {
                surface.clear();
                let poster = format!("{target}{POSTER_MARKER}");
                surface.mount_player(entry.kind(), target, &poster);
            }
        }
    }

    /// Empties the surface and stops any loading bookkeeping.
    pub fn clear<S: MediaSurface, T: TimerHost>(&mut self, surface: &mut S, timers: &mut T) {
        self.loading.finish(surface, timers);
        surface.clear();
    }

    /// The current media finished loading.
    pub fn media_loaded<S: MediaSurface, T: TimerHost>(&mut self, surface: &mut S, timers: &mut T) {
        self.loading.finish(surface, timers);
    }

    /// The current media failed to load. Indistinguishable from a
    /// completion as far as the indicator is concerned; the surface is
    /// left to its native broken-media rendering.
    pub fn media_failed<S: MediaSurface, T: TimerHost>(&mut self, surface: &mut S, timers: &mut T) {
        log::warn!("media load failed");
        self.loading.finish(surface, timers);
    }

    /// Routes a fired timer handle to the loading indicator. Returns
    /// `false` for handles the presenter does not own.
    pub fn timer_fired<S: MediaSurface, T: TimerHost>(
        &mut self,
        handle: TimerHandle,
        surface: &mut S,
        timers: &mut T,
    ) -> bool {
        self.loading.timer_fired(handle, surface, timers)
    }

    /// Whether a load is currently outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.is_active()
    }
}

/// Strips the querystring from a target locator.
fn strip_query(target: &str) -> &str {
    match target.split_once('?') {
        Some((base, _)) => base,
        None => target,
    }
}
