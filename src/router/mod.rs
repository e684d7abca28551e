// SPDX-License-Identifier: MPL-2.0
//! The slideshow state machine.
//!
//! [`SlideshowController`] owns the session, the toolbar timer, the
//! presenter and the history sync, and processes each input, timer,
//! media and history event to completion. Every user-visible session
//! mutation records exactly one history entry; history pops are
//! authoritative and never push in turn.

pub mod toolbar;

use crate::application::history::HistorySync;
use crate::application::port::{HistoryPort, HistoryState, MediaSurface, TimerHandle, TimerHost};
use crate::config::{
    Config, DEFAULT_SEEK_STEP_SECS, DEFAULT_SPACE_ADVANCES, DEFAULT_TOOLBAR_TIMEOUT_MS,
    SEEK_MIN_ELAPSED_SECS,
};
use crate::domain::{Entry, GroupId, MediaKind};
use crate::input::{map_click, map_key, Action, ClickZone, Key, Modifiers, TouchTracker};
use crate::listing::{Direction, Listing};
use crate::presenter::MediaPresenter;
use crate::session::SlideshowSession;
use toolbar::{ToolbarTimeout, ToolbarTimer};

/// Drives one overlay over one listing.
///
/// Generic over the surface, history and timer ports so the whole state
/// machine runs unchanged against a real shell or against test fakes.
#[derive(Debug)]
pub struct SlideshowController<S, H, T>
where
    S: MediaSurface,
    H: HistoryPort,
    T: TimerHost,
{
    listing: Listing,
    session: SlideshowSession,
    presenter: MediaPresenter,
    history: HistorySync<H>,
    surface: S,
    timers: T,
    toolbar: ToolbarTimer,
    touch: TouchTracker,
    space_advances: bool,
    seek_step_secs: f64,
}

impl<S, H, T> SlideshowController<S, H, T>
where
    S: MediaSurface,
    H: HistoryPort,
    T: TimerHost,
{
    #[must_use]
    pub fn new(listing: Listing, surface: S, history: H, timers: T, config: &Config) -> Self {
        let timeout = ToolbarTimeout::new(
            config
                .toolbar_timeout_ms
                .unwrap_or(DEFAULT_TOOLBAR_TIMEOUT_MS),
        );
        Self {
            listing,
            session: SlideshowSession::new(),
            presenter: MediaPresenter::new(),
            history: HistorySync::new(history),
            surface,
            timers,
            toolbar: ToolbarTimer::new(timeout),
            touch: TouchTracker::new(),
            space_advances: config.space_advances.unwrap_or(DEFAULT_SPACE_ADVANCES),
            seek_step_secs: config.seek_step_secs.unwrap_or(DEFAULT_SEEK_STEP_SECS),
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_open()
    }

    #[must_use]
    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    #[must_use]
    pub fn session(&self) -> &SlideshowSession {
        &self.session
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn history(&self) -> &HistorySync<H> {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut HistorySync<H> {
        &mut self.history
    }

    #[must_use]
    pub fn timers(&self) -> &T {
        &self.timers
    }

    pub fn timers_mut(&mut self) -> &mut T {
        &mut self.timers
    }

    // =========================================================================
    // Session operations
    // =========================================================================

    /// Opens the overlay on `entry` (or navigates to it when already
    /// open). Presents the media and records the transition.
    pub fn open(&mut self, entry: Entry) {
        if self.session.is_open() {
            self.session.advance(entry.clone());
        } else {
            let origin = self.history.current_location();
            log::info!("opening overlay on {} (origin {})", entry.target(), origin);
            self.session.open(entry.clone(), origin);
        }
        self.presenter
            .present(&entry, &mut self.surface, &mut self.timers);
        self.history.record_open(&entry);
    }

    /// Deep-link activation: looks the target up in the listing and opens
    /// it. Returns `false` (a silent no-op) when no such activation link
    /// exists.
    pub fn open_by_target(&mut self, target: &str) -> bool {
        match self.listing.find_by_target(target).cloned() {
            Some(entry) => {
                self.open(entry);
                true
            }
            None => {
                log::debug!("no activation link for {target}");
                false
            }
        }
    }

    /// Steps to the next playable entry; closes the session at the end of
    /// the sequence.
    pub fn next(&mut self) {
        self.navigate(Direction::Forward);
    }

    /// Steps to the previous playable entry; closes the session at the
    /// start of the sequence.
    pub fn previous(&mut self) {
        self.navigate(Direction::Backward);
    }

    /// Closes the overlay: clears the media, restores focus to the
    /// activating element and records the close at the origin location.
    pub fn exit(&mut self) {
        if !self.session.is_open() {
            return;
        }
        self.toolbar.close(&mut self.surface, &mut self.timers);
        self.presenter.clear(&mut self.surface, &mut self.timers);
        let origin = self.session.origin_location().map(str::to_string);
        if let Some(last) = self.session.close() {
            self.surface.restore_focus(last.target());
            let origin = origin.unwrap_or_else(|| parent_location(last.target()));
            self.history.record_close(&origin);
        }
    }

    fn navigate(&mut self, direction: Direction) {
        let Some(current) = self.session.current() else {
            return;
        };
        let next = self.listing.find_adjacent(current, direction).cloned();
        match next {
            Some(next) => {
                self.session.advance(next.clone());
                self.presenter
                    .present(&next, &mut self.surface, &mut self.timers);
                self.history.record_open(&next);
            }
            // Exhausted sequence closes the session.
            None => self.exit(),
        }
    }

    // =========================================================================
    // Input events
    // =========================================================================

    /// Handles a key press. Returns `true` when the overlay consumed the
    /// key (the shell suppresses the native default in that case).
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> bool {
        if !self.session.is_open() {
            return false;
        }
        let Some(action) = map_key(key, modifiers) else {
            return false;
        };
        match action {
            Action::Exit => {
                self.exit();
                true
            }
            Action::Previous => {
                if transport_eligible(key) && self.seek_video(Direction::Backward) {
                    return true;
                }
                self.navigate(Direction::Backward);
                true
            }
            Action::Next => {
                if transport_eligible(key) && self.seek_video(Direction::Forward) {
                    return true;
                }
                self.navigate(Direction::Forward);
                true
            }
            Action::PlayPause => {
                if let Some(player) = self.surface.player() {
                    if player.is_paused() {
                        player.play();
                    } else {
                        player.pause();
                    }
                    return true;
                }
                if self.space_advances {
                    if modifiers.shift {
                        self.navigate(Direction::Backward);
                    } else {
                        self.navigate(Direction::Forward);
                    }
                    return true;
                }
                false
            }
        }
    }

    /// Handles a click inside the open overlay. Returns `true` when
    /// consumed.
    pub fn click(&mut self, zone: ClickZone) -> bool {
        if !self.session.is_open() {
            return false;
        }
        match map_click(zone) {
            Some(Action::Next) => {
                self.navigate(Direction::Forward);
                true
            }
            Some(Action::Exit) => {
                self.exit();
                true
            }
            _ => false,
        }
    }

    /// Records a touch start. Multi-touch contacts are ignored so native
    /// pinch/zoom keeps working.
    pub fn touch_start(&mut self, x: f32, y: f32, contacts: usize) {
        if self.session.is_open() {
            self.touch.touch_start(x, y, contacts);
        } else {
            self.touch.reset();
        }
    }

    /// Completes a touch gesture. Returns `true` when it navigated.
    pub fn touch_end(&mut self, x: f32, y: f32) -> bool {
        if !self.session.is_open() {
            self.touch.reset();
            return false;
        }
        match self.touch.touch_end(x, y) {
            Some(Action::Previous) => {
                self.navigate(Direction::Backward);
                true
            }
            Some(Action::Next) => {
                self.navigate(Direction::Forward);
                true
            }
            _ => false,
        }
    }

    /// Pointer activity over the open overlay: show the toolbar and
    /// re-arm its hide.
    pub fn pointer_moved(&mut self) {
        if self.session.is_open() {
            self.toolbar.ping(&mut self.surface, &mut self.timers);
        }
    }

    // =========================================================================
    // Asynchronous completions
    // =========================================================================

    /// A deferred action fired. Handles the engine no longer tracks are
    /// stale and ignored.
    pub fn timer_fired(&mut self, handle: TimerHandle) {
        if self.toolbar.timer_fired(handle, &mut self.surface) {
            return;
        }
        if self
            .presenter
            .timer_fired(handle, &mut self.surface, &mut self.timers)
        {
            return;
        }
        log::trace!("stale timer handle {handle:?}");
    }

    /// The current media finished loading.
    pub fn media_loaded(&mut self) {
        self.presenter.media_loaded(&mut self.surface, &mut self.timers);
    }

    /// The current media failed to load. Treated like a completion.
    pub fn media_failed(&mut self) {
        self.presenter.media_failed(&mut self.surface, &mut self.timers);
    }

    /// The platform delivered a back/forward transition. Authoritative:
    /// the on-screen state follows the popped state and nothing is pushed
    /// back.
    pub fn history_popped(&mut self, state: Option<HistoryState>) {
        match state {
            Some(state) => {
                let entry = self
                    .listing
                    .find_by_target(&state.url)
                    .cloned()
                    .unwrap_or_else(|| {
                        Entry::new(state.url.clone(), state.kind, GroupId::root())
                    });
                if self.session.is_open() {
                    self.session.advance(entry.clone());
                } else {
                    let origin = parent_location(entry.target());
                    self.session.open(entry.clone(), origin);
                }
                self.presenter
                    .present(&entry, &mut self.surface, &mut self.timers);
            }
            None => {
                if !self.session.is_open() {
                    return;
                }
                self.toolbar.close(&mut self.surface, &mut self.timers);
                self.presenter.clear(&mut self.surface, &mut self.timers);
                self.session.close();
            }
        }
    }

    // =========================================================================
    // Transport pre-emption
    // =========================================================================

    /// Arrow keys control a mounted video before they navigate: backward
    /// seeks once more than a second has played, forward seeks while
    /// playback has not finished. Returns `true` when the key was spent
    /// on the player.
    fn seek_video(&mut self, direction: Direction) -> bool {
        if self.session.current().map(Entry::kind) != Some(MediaKind::Video) {
            return false;
        }
        let step = self.seek_step_secs;
        let Some(player) = self.surface.player() else {
            return false;
        };
        if player.is_paused() {
            return false;
        }
        match direction {
            Direction::Backward => {
                if player.position_secs() > SEEK_MIN_ELAPSED_SECS {
                    player.seek_by(-step);
                    return true;
                }
            }
            Direction::Forward => {
                if !player.has_ended() {
                    player.seek_by(step);
                    return true;
                }
            }
        }
        false
    }
}

/// Is this key part of the player-transport key set (arrows and paging)?
fn transport_eligible(key: Key) -> bool {
    matches!(
        key,
        Key::ArrowLeft
            | Key::ArrowUp
            | Key::PageUp
            | Key::ArrowRight
            | Key::ArrowDown
            | Key::PageDown
    )
}

/// The enclosing location of a target, the way a relative `.` address
/// would resolve: everything up to and including the last separator.
fn parent_location(target: &str) -> String {
    match target.rfind('/') {
        Some(index) => target[..=index].to_string(),
        None => String::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::MemoryHistory;
    use crate::test_support::{ManualTimers, RecordingSurface, SurfaceEvent};

    type TestController = SlideshowController<RecordingSurface, MemoryHistory, ManualTimers>;

    fn image(target: &str) -> Entry {
        Entry::new(target, MediaKind::Image, GroupId::new("/gallery/"))
    }

    fn video(target: &str) -> Entry {
        Entry::new(target, MediaKind::Video, GroupId::new("/gallery/"))
    }

    fn listing() -> Listing {
        use crate::listing::Node;
        Listing::new(vec![
            Node::leaf(image("/gallery/a.jpg")),
            Node::leaf(video("/gallery/b.mp4")),
            Node::folder(
                GroupId::new("/gallery/sub/"),
                vec![Node::leaf(image("/gallery/sub/c.jpg"))],
            ),
            Node::leaf(image("/gallery/d.jpg")),
            Node::leaf(image("/gallery/e.jpg")),
        ])
    }

    fn controller() -> TestController {
        SlideshowController::new(
            listing(),
            RecordingSurface::new(),
            MemoryHistory::new("/gallery/"),
            ManualTimers::new(),
            &Config::default(),
        )
    }

    fn controller_with(config: Config) -> TestController {
        SlideshowController::new(
            listing(),
            RecordingSurface::new(),
            MemoryHistory::new("/gallery/"),
            ManualTimers::new(),
            &config,
        )
    }

    #[test]
    fn open_presents_and_records_history() {
        let mut c = controller();
        c.open(image("/gallery/a.jpg"));

        assert!(c.is_open());
        assert_eq!(c.surface().image_source.as_deref(), Some("/gallery/a.jpg"));
        assert_eq!(c.history().current_location(), "/gallery/a.jpg");
        assert_eq!(c.session().origin_location(), Some("/gallery/"));
    }

    #[test]
    fn arrow_right_advances_and_pushes_second_entry() {
        let mut c = controller();
        c.open(image("/gallery/a.jpg"));
        assert!(c.handle_key(Key::ArrowRight, Modifiers::NONE));

        assert_eq!(
            c.session().current().map(Entry::target),
            Some("/gallery/b.mp4")
        );
        // origin + A + B
        assert_eq!(c.history().port().len(), 3);
    }

    #[test]
    fn escape_closes_and_restores_origin_address() {
        let mut c = controller();
        c.open(image("/gallery/a.jpg"));
        assert!(c.handle_key(Key::ArrowRight, Modifiers::NONE));
        assert!(c.handle_key(Key::Escape, Modifiers::NONE));

        assert!(!c.is_open());
        assert_eq!(c.history().current_location(), "/gallery/");
        assert_eq!(c.history().port().current_state(), None);
        // origin + A + B + closed
        assert_eq!(c.history().port().len(), 4);
        assert_eq!(c.surface().element_count(), 0);
    }

    #[test]
    fn exit_restores_focus_to_the_activating_element() {
        let mut c = controller();
        c.open(image("/gallery/a.jpg"));
        c.exit();
        assert_eq!(c.surface().focused.as_deref(), Some("/gallery/a.jpg"));
    }

    #[test]
    fn navigation_descends_into_sibling_folder() {
        let mut c = controller();
        c.open(video("/gallery/b.mp4"));
        c.next();
        assert_eq!(
            c.session().current().map(Entry::target),
            Some("/gallery/sub/c.jpg")
        );
    }

    #[test]
    fn exhausted_forward_navigation_closes_the_session() {
        let mut c = controller();
        c.open(image("/gallery/e.jpg"));
        c.next();

        assert!(!c.is_open());
        assert_eq!(c.history().port().current_state(), None);
        assert_eq!(c.history().current_location(), "/gallery/");
    }

    #[test]
    fn exhausted_backward_navigation_closes_the_session() {
        let mut c = controller();
        c.open(image("/gallery/a.jpg"));
        c.previous();
        assert!(!c.is_open());
    }

    #[test]
    fn open_by_target_finds_nested_entries() {
        let mut c = controller();
        assert!(c.open_by_target("/gallery/sub/c.jpg"));
        assert!(c.is_open());
    }

    #[test]
    fn open_by_missing_target_is_a_silent_no_op() {
        let mut c = controller();
        assert!(!c.open_by_target("/gallery/nope.jpg"));
        assert!(!c.is_open());
        assert_eq!(c.history().port().len(), 1);
    }

    #[test]
    fn keys_are_ignored_while_closed() {
        let mut c = controller();
        assert!(!c.handle_key(Key::ArrowRight, Modifiers::NONE));
        assert!(!c.handle_key(Key::Escape, Modifiers::NONE));
    }

    #[test]
    fn unmapped_keys_are_not_consumed() {
        let mut c = controller();
        c.open(image("/gallery/a.jpg"));
        assert!(!c.handle_key(Key::Character('x'), Modifiers::NONE));
    }

    #[test]
    fn shift_enter_steps_backward() {
        let mut c = controller();
        c.open(video("/gallery/b.mp4"));
        // No player transport for Enter; it always navigates.
        c.surface_mut().player = None;
        assert!(c.handle_key(Key::Enter, Modifiers::SHIFT));
        assert_eq!(
            c.session().current().map(Entry::target),
            Some("/gallery/a.jpg")
        );
    }

    #[test]
    fn arrow_seeks_playing_video_instead_of_navigating() {
        let mut c = controller();
        c.open(video("/gallery/b.mp4"));
        c.surface_mut().player.as_mut().expect("player").position = 30.0;

        assert!(c.handle_key(Key::ArrowLeft, Modifiers::NONE));
        let player = c.surface().player.as_ref().expect("player");
        assert_eq!(player.seeks, vec![-10.0]);
        // Still on the video.
        assert_eq!(
            c.session().current().map(Entry::target),
            Some("/gallery/b.mp4")
        );

        assert!(c.handle_key(Key::ArrowRight, Modifiers::NONE));
        let player = c.surface().player.as_ref().expect("player");
        assert_eq!(player.seeks, vec![-10.0, 10.0]);
    }

    #[test]
    fn backward_arrow_navigates_when_video_just_started() {
        let mut c = controller();
        c.open(video("/gallery/b.mp4"));
        // Under a second elapsed: list navigation wins.
        c.surface_mut().player.as_mut().expect("player").position = 0.5;

        assert!(c.handle_key(Key::ArrowLeft, Modifiers::NONE));
        assert_eq!(
            c.session().current().map(Entry::target),
            Some("/gallery/a.jpg")
        );
    }

    #[test]
    fn forward_arrow_navigates_when_video_ended() {
        let mut c = controller();
        c.open(video("/gallery/b.mp4"));
        {
            let player = c.surface_mut().player.as_mut().expect("player");
            player.ended = true;
            player.paused = true;
        }

        assert!(c.handle_key(Key::ArrowRight, Modifiers::NONE));
        assert_eq!(
            c.session().current().map(Entry::target),
            Some("/gallery/sub/c.jpg")
        );
    }

    #[test]
    fn space_toggles_a_mounted_player() {
        let mut c = controller();
        c.open(video("/gallery/b.mp4"));

        assert!(c.handle_key(Key::Space, Modifiers::NONE));
        assert!(c.surface().player.as_ref().expect("player").paused);
        assert!(c.handle_key(Key::Space, Modifiers::NONE));
        assert!(!c.surface().player.as_ref().expect("player").paused);
    }

    #[test]
    fn space_advances_when_no_player_is_mounted() {
        let mut c = controller();
        c.open(image("/gallery/a.jpg"));
        assert!(c.handle_key(Key::Space, Modifiers::NONE));
        assert_eq!(
            c.session().current().map(Entry::target),
            Some("/gallery/b.mp4")
        );
    }

    #[test]
    fn shift_space_steps_backward_when_falling_through() {
        let mut c = controller();
        c.open(video("/gallery/b.mp4"));
        c.surface_mut().player = None;
        assert!(c.handle_key(Key::Space, Modifiers::SHIFT));
        assert_eq!(
            c.session().current().map(Entry::target),
            Some("/gallery/a.jpg")
        );
    }

    #[test]
    fn space_fallthrough_can_be_disabled() {
        let config = Config {
            space_advances: Some(false),
            ..Config::default()
        };
        let mut c = controller_with(config);
        c.open(image("/gallery/a.jpg"));

        assert!(!c.handle_key(Key::Space, Modifiers::NONE));
        assert_eq!(
            c.session().current().map(Entry::target),
            Some("/gallery/a.jpg")
        );
    }

    #[test]
    fn clicking_the_image_advances() {
        let mut c = controller();
        c.open(image("/gallery/a.jpg"));
        assert!(c.click(ClickZone::Image));
        assert_eq!(
            c.session().current().map(Entry::target),
            Some("/gallery/b.mp4")
        );
    }

    #[test]
    fn clicking_outside_the_media_exits() {
        let mut c = controller();
        c.open(image("/gallery/a.jpg"));
        assert!(c.click(ClickZone::Elsewhere));
        assert!(!c.is_open());
    }

    #[test]
    fn clicking_the_player_is_left_to_the_player() {
        let mut c = controller();
        c.open(video("/gallery/b.mp4"));
        assert!(!c.click(ClickZone::Player));
        assert!(c.is_open());
    }

    #[test]
    fn swipe_left_advances_and_swipe_right_goes_back() {
        let mut c = controller();
        c.open(image("/gallery/a.jpg"));

        c.touch_start(200.0, 100.0, 1);
        assert!(c.touch_end(150.0, 110.0));
        assert_eq!(
            c.session().current().map(Entry::target),
            Some("/gallery/b.mp4")
        );

        c.touch_start(200.0, 100.0, 1);
        assert!(c.touch_end(250.0, 110.0));
        assert_eq!(
            c.session().current().map(Entry::target),
            Some("/gallery/a.jpg")
        );
    }

    #[test]
    fn vertical_and_tiny_swipes_do_nothing() {
        let mut c = controller();
        c.open(image("/gallery/a.jpg"));

        c.touch_start(200.0, 100.0, 1);
        assert!(!c.touch_end(240.0, 180.0));
        c.touch_start(200.0, 100.0, 1);
        assert!(!c.touch_end(210.0, 105.0));
        assert_eq!(
            c.session().current().map(Entry::target),
            Some("/gallery/a.jpg")
        );
    }

    #[test]
    fn pointer_activity_shows_toolbar_and_hide_fires_later() {
        let mut c = controller();
        c.open(image("/gallery/a.jpg"));
        c.pointer_moved();
        assert!(c.surface().toolbar_visible);

        let handle = c
            .timers()
            .pending_for(crate::application::TimerPurpose::ToolbarHide)
            .expect("hide armed");
        c.timers_mut().deliver(handle);
        c.timer_fired(handle);
        assert!(!c.surface().toolbar_visible);
    }

    #[test]
    fn pointer_activity_is_ignored_while_closed() {
        let mut c = controller();
        c.pointer_moved();
        assert!(!c.surface().toolbar_visible);
        assert!(c.timers().pending.is_empty());
    }

    #[test]
    fn back_pop_to_null_state_closes_without_pushing() {
        let mut c = controller();
        c.open(image("/gallery/a.jpg"));
        let before = c.history().port().len();

        let popped = c.history_mut().port_mut().back().expect("back entry");
        c.history_popped(popped);

        assert!(!c.is_open());
        assert_eq!(c.surface().element_count(), 0);
        assert_eq!(c.history().port().len(), before);
        assert_eq!(c.history().current_location(), "/gallery/");
    }

    #[test]
    fn back_pop_to_entry_state_re_presents_without_pushing() {
        let mut c = controller();
        c.open(image("/gallery/a.jpg"));
        c.next();
        let before = c.history().port().len();

        let popped = c.history_mut().port_mut().back().expect("back entry");
        c.history_popped(popped);

        assert_eq!(
            c.session().current().map(Entry::target),
            Some("/gallery/a.jpg")
        );
        assert_eq!(c.history().port().len(), before);
    }

    #[test]
    fn forward_pop_reopens_a_closed_overlay() {
        let mut c = controller();
        c.open(image("/gallery/a.jpg"));
        let popped = c.history_mut().port_mut().back().expect("back entry");
        c.history_popped(popped);
        assert!(!c.is_open());

        let popped = c.history_mut().port_mut().forward().expect("forward entry");
        c.history_popped(popped);

        assert!(c.is_open());
        assert_eq!(
            c.session().current().map(Entry::target),
            Some("/gallery/a.jpg")
        );
    }

    #[test]
    fn pop_with_unknown_target_still_presents_the_state() {
        let mut c = controller();
        c.history_popped(Some(HistoryState::new("/elsewhere/x.jpg", MediaKind::Image)));
        assert!(c.is_open());
        assert_eq!(c.surface().image_source.as_deref(), Some("/elsewhere/x.jpg"));
    }

    #[test]
    fn media_loaded_stops_the_waiting_affordance() {
        let mut c = controller();
        c.open(image("/gallery/a.jpg"));
        assert!(!c.timers().pending.is_empty());
        c.media_loaded();
        assert!(c.timers().pending.is_empty());
        assert!(!c.surface().waiting);
    }

    #[test]
    fn exit_cancels_every_outstanding_timer() {
        let mut c = controller();
        c.open(image("/gallery/a.jpg"));
        c.pointer_moved();
        assert!(!c.timers().pending.is_empty());

        c.exit();
        assert!(c.timers().pending.is_empty());
    }

    #[test]
    fn exit_while_closed_is_a_no_op() {
        let mut c = controller();
        c.exit();
        assert_eq!(c.history().port().len(), 1);
        assert!(c.surface().events.is_empty());
    }

    #[test]
    fn second_open_keeps_the_first_origin() {
        let mut c = controller();
        c.open(image("/gallery/a.jpg"));
        c.open(image("/gallery/d.jpg"));
        assert_eq!(c.session().origin_location(), Some("/gallery/"));
    }

    #[test]
    fn navigating_from_image_to_image_reuses_the_surface() {
        let mut c = controller();
        c.open(image("/gallery/d.jpg"));
        c.next();
        let creations = c
            .surface()
            .events
            .iter()
            .filter(|e| **e == SurfaceEvent::CreateImage)
            .count();
        assert_eq!(creations, 1);
        assert_eq!(c.surface().element_count(), 1);
    }
}
