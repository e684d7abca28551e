// SPDX-License-Identifier: MPL-2.0
//! Debounced loading affordance.
//!
//! A small state machine over {idle, pending, shown} driven by two
//! deferred actions: a one-shot "old enough to show" delay and a periodic
//! sampler that actually flips the affordance on. Both are cancelled
//! together when loading ends, so a late firing can never resurrect the
//! spinner after the media has arrived.

use crate::application::port::{MediaSurface, TimerHandle, TimerHost, TimerPurpose};
use crate::config::{LOADING_SAMPLE_INTERVAL_MS, LOADING_SHOW_DELAY_MS};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    /// A load is outstanding; `armed` flips once the show delay elapses.
    Pending { armed: bool },
    Shown,
}

/// Loading indicator state for the presenter.
#[derive(Debug)]
pub struct LoadingIndicator {
    phase: Phase,
    may_show: Option<TimerHandle>,
    sample: Option<TimerHandle>,
    show_delay: Duration,
    sample_interval: Duration,
}

impl LoadingIndicator {
    #[must_use]
    pub fn new() -> Self {
        Self::with_windows(
            Duration::from_millis(LOADING_SHOW_DELAY_MS),
            Duration::from_millis(LOADING_SAMPLE_INTERVAL_MS),
        )
    }

    #[must_use]
    pub fn with_windows(show_delay: Duration, sample_interval: Duration) -> Self {
        Self {
            phase: Phase::Idle,
            may_show: None,
            sample: None,
            show_delay,
            sample_interval,
        }
    }

    /// Whether a load is currently outstanding.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Begins tracking a new load, superseding any previous one.
    pub fn start<T: TimerHost>(&mut self, timers: &mut T) {
        self.cancel_timers(timers);
        self.phase = Phase::Pending { armed: false };
        self.may_show = Some(timers.schedule(self.show_delay, TimerPurpose::LoadingMayShow));
        self.sample = Some(timers.schedule(self.sample_interval, TimerPurpose::LoadingSample));
    }

    /// Stops tracking: completion and failure both land here.
    pub fn finish<S: MediaSurface, T: TimerHost>(&mut self, surface: &mut S, timers: &mut T) {
        self.cancel_timers(timers);
        if self.phase != Phase::Idle {
            surface.set_waiting(false);
            self.phase = Phase::Idle;
        }
    }

    /// Routes a fired timer handle. Returns `false` for handles this
    /// indicator does not own.
    pub fn timer_fired<S: MediaSurface, T: TimerHost>(
        &mut self,
        handle: TimerHandle,
        surface: &mut S,
        timers: &mut T,
    ) -> bool {
        if self.may_show == Some(handle) {
            self.may_show = None;
            if let Phase::Pending { .. } = self.phase {
                self.phase = Phase::Pending { armed: true };
            }
            return true;
        }
        if self.sample == Some(handle) {
            self.sample = None;
            if self.phase == (Phase::Pending { armed: true }) {
                surface.set_waiting(true);
                self.phase = Phase::Shown;
            }
            if self.phase != Phase::Idle {
                self.sample =
                    Some(timers.schedule(self.sample_interval, TimerPurpose::LoadingSample));
            }
            return true;
        }
        false
    }

    fn cancel_timers<T: TimerHost>(&mut self, timers: &mut T) {
        if let Some(handle) = self.may_show.take() {
            timers.cancel(handle);
        }
        if let Some(handle) = self.sample.take() {
            timers.cancel(handle);
        }
    }
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        Self::new()
    }
}
