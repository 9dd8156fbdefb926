//! Playback engine: speech, highlight, and pagination for one reading session
//!
//! The engine owns the only cursor. Everything that moves it goes through a
//! method here, and every method that replaces the in-flight request cancels
//! the old one first. Completions carry the request id; anything that is not
//! the current request is ignored.
//!
//! Reset rules:
//! - `pause` keeps cursor and highlight
//! - `stop` keeps cursor, clears highlight
//! - `seek` moves cursor and starts speaking
//! - `navigate` and re-layout reset cursor to 0 and do not resume
//! - an automatic page turn resets cursor to 0 and resumes after the settling delay

use crate::config::ReaderConfig;
use crate::error::{ReaderError, ReaderResult};
use crate::layout::{LayoutPlanner, ResizeDebouncer};
use crate::models::{
    LineHandle, LineView, NavDirection, NavState, PageView, PlaybackCursor, PlaybackRate,
    PlaybackState, ReaderView, ViewportState, VisibleLine,
};
use crate::store::PageStore;

use super::speech::{SpeechRequest, SpeechSynth};
use super::surface::ReadingSurface;

pub struct PlaybackEngine<S: SpeechSynth, V: ReadingSurface> {
    store: PageStore,
    planner: LayoutPlanner,
    config: ReaderConfig,
    speech: S,
    surface: V,

    viewport_width: u32,
    current_page: usize,
    viewport: ViewportState,
    visible: Vec<VisibleLine>,

    cursor: usize,
    state: PlaybackState,
    rate: PlaybackRate,
    highlighted: Option<LineHandle>,

    in_flight: Option<u32>,
    next_request_id: u32,
    resume_at_ms: Option<u64>,
    resize: ResizeDebouncer,
}

impl<S: SpeechSynth, V: ReadingSurface> PlaybackEngine<S, V> {
    /// Open a session on page 1 and render the first window
    pub fn new(
        store: PageStore,
        config: ReaderConfig,
        speech: S,
        surface: V,
        viewport_width: u32,
    ) -> ReaderResult<Self> {
        let planner = LayoutPlanner::new(config.two_page_min_width_px);
        let viewport = planner.plan(viewport_width, 1, store.count());

        let mut engine = Self {
            store,
            planner,
            config,
            speech,
            surface,
            viewport_width,
            current_page: 1,
            viewport,
            visible: Vec::new(),
            cursor: 0,
            state: PlaybackState::Idle,
            rate: config.default_rate,
            highlighted: None,
            in_flight: None,
            next_request_id: 1,
            resume_at_ms: None,
            resize: ResizeDebouncer::new(config.resize_quiet_ms),
        };
        engine.load_window()?;
        Ok(engine)
    }

    // ------------------------------------------------------------------
    // Intents
    // ------------------------------------------------------------------

    /// Start speaking at the cursor. No-op when already playing or when the
    /// window is exhausted.
    pub fn play(&mut self) {
        if self.state.is_playing() {
            return;
        }
        if self.cursor().is_exhausted(self.visible.len()) {
            log::debug!(
                "play ignored: cursor {} exhausted ({} lines)",
                self.cursor,
                self.visible.len()
            );
            return;
        }
        self.resume_at_ms = None;
        self.speak_current();
    }

    /// Cancel speech and hold position. The interrupted line restarts from
    /// its beginning on the next play.
    pub fn pause(&mut self) {
        if !self.state.is_playing() {
            return;
        }
        self.cancel_speech();
        self.resume_at_ms = None;
        self.set_state(PlaybackState::Paused);
    }

    pub fn toggle_play_pause(&mut self) {
        if self.state.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Cancel speech and clear the highlight. The cursor is kept.
    pub fn stop(&mut self) {
        self.cancel_speech();
        self.resume_at_ms = None;
        self.clear_highlight();
        self.set_state(PlaybackState::Idle);
    }

    /// Jump to a visible line and start speaking it.
    ///
    /// Targets past the last visible line are rejected before anything
    /// changes.
    pub fn seek(&mut self, flat_line_index: usize) -> ReaderResult<()> {
        if flat_line_index >= self.visible.len() {
            return Err(ReaderError::OutOfRange {
                what: "line",
                index: flat_line_index,
                len: self.visible.len(),
            });
        }
        self.stop();
        self.cursor = flat_line_index;
        self.speak_current();
        Ok(())
    }

    /// Manual page navigation. Always stops speech; returns whether the
    /// window moved. Never resumes playback.
    pub fn navigate(&mut self, direction: NavDirection) -> ReaderResult<bool> {
        self.stop();

        // step and redraw at the width the user is looking at
        let resized = match self.resize.take() {
            Some(width) => {
                self.viewport_width = width;
                self.viewport = self
                    .planner
                    .plan(width, self.current_page, self.store.count());
                true
            }
            None => false,
        };

        let moved = self.shift_window(direction)?;
        if !moved {
            log::debug!("navigate {:?} refused at page {}", direction, self.current_page);
            if resized {
                self.load_window()?;
            }
        }
        Ok(moved)
    }

    /// Record a viewport resize. The re-layout happens in `tick` once the
    /// resize burst has gone quiet.
    pub fn viewport_resized(&mut self, width: u32, now_ms: u64) {
        self.resize.push(width, now_ms);
    }

    /// Applies to the next request; the one in flight keeps its rate
    pub fn set_rate(&mut self, rate: f64) -> ReaderResult<()> {
        self.rate = PlaybackRate::new(rate)?;
        log::debug!("playback rate set to {}", rate);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Collaborator signals and timers
    // ------------------------------------------------------------------

    /// Completion signal from the speech collaborator
    pub fn speech_finished(&mut self, request_id: u32, now_ms: u64) -> ReaderResult<()> {
        if self.in_flight != Some(request_id) {
            log::debug!(
                "ignoring stale completion {} (in flight: {:?})",
                request_id,
                self.in_flight
            );
            return Ok(());
        }
        self.in_flight = None;
        if self.state != PlaybackState::Speaking {
            return Ok(());
        }

        self.cursor = (self.cursor + 1).min(self.visible.len());
        if self.cursor < self.visible.len() {
            self.speak_current();
            Ok(())
        } else {
            self.enter_page_transition(now_ms)
        }
    }

    /// Failure signal from the speech collaborator: go quiet, no retry
    pub fn speech_failed(&mut self, request_id: u32, reason: &str) {
        if self.in_flight != Some(request_id) {
            return;
        }
        self.in_flight = None;
        log::warn!(
            "{}",
            ReaderError::SpeechUnavailable(format!("request {}: {}", request_id, reason))
        );
        self.clear_highlight();
        self.set_state(PlaybackState::Idle);
    }

    /// Fire due timers: debounced re-layout, then the settling-delay resume
    pub fn tick(&mut self, now_ms: u64) -> ReaderResult<()> {
        if let Some(width) = self.resize.poll(now_ms) {
            self.apply_viewport(width)?;
        }

        match self.resume_at_ms {
            Some(due) if now_ms >= due && self.state == PlaybackState::PageTransition => {
                self.resume_at_ms = None;
                if self.cursor().is_exhausted(self.visible.len()) {
                    // blank window: keep turning
                    self.enter_page_transition(now_ms)
                } else {
                    self.speak_current();
                    Ok(())
                }
            }
            _ => Ok(()),
        }
    }

    /// Earliest time `tick` has work to do
    pub fn next_deadline_ms(&self) -> Option<u64> {
        match (self.resume_at_ms, self.resize.deadline_ms()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn cursor(&self) -> PlaybackCursor {
        PlaybackCursor {
            flat_line_index: self.cursor,
            is_playing: self.state.is_playing(),
        }
    }

    pub fn visible_lines(&self) -> &[VisibleLine] {
        &self.visible
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    pub fn nav_state(&self) -> NavState {
        LayoutPlanner::nav_state(&self.viewport, self.store.count())
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.store.count()
    }

    pub fn rate(&self) -> PlaybackRate {
        self.rate
    }

    pub fn highlighted(&self) -> Option<LineHandle> {
        self.highlighted
    }

    pub fn in_flight_request(&self) -> Option<u32> {
        self.in_flight
    }

    pub fn speech(&self) -> &S {
        &self.speech
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    /// Everything the surface needs to draw the current window
    pub fn view(&self) -> ReaderView {
        let total = self.store.count();
        let nav = self.nav_state();
        let pages = self
            .viewport
            .visible_pages(total)
            .map(|page_index| PageView {
                index: page_index,
                label: format!("Page {} of {}", page_index, total),
                lines: self
                    .visible
                    .iter()
                    .filter(|line| line.handle.page_index == page_index)
                    .map(|line| LineView {
                        flat_index: line.handle.flat_index,
                        line_in_page: line.handle.line_in_page,
                        text: line.text.clone(),
                        highlighted: self.highlighted == Some(line.handle),
                    })
                    .collect(),
            })
            .collect();

        ReaderView {
            total_pages: total,
            pages_visible: self.viewport.pages_visible,
            first_visible_page_index: self.viewport.first_visible_page_index,
            layout_class: self.viewport.layout_class().to_string(),
            pages,
            rewind_disabled: nav.rewind_disabled,
            forward_disabled: nav.forward_disabled,
            state: self.state,
            is_playing: self.state.is_playing(),
            flat_line_index: self.cursor,
            rate: self.rate,
        }
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn speak_current(&mut self) {
        let Some((handle, text)) = self
            .visible
            .get(self.cursor)
            .map(|line| (line.handle, line.text.clone()))
        else {
            return;
        };
        let request = SpeechRequest {
            id: self.allocate_request_id(),
            text,
            rate: self.rate.value(),
        };

        self.clear_highlight();
        self.surface.highlight_line(handle);
        self.highlighted = Some(handle);
        self.surface.scroll_to_line(handle);

        match self.speech.speak(&request) {
            Ok(()) => {
                self.in_flight = Some(request.id);
                self.set_state(PlaybackState::Speaking);
            }
            Err(e) => {
                log::warn!("speech request {} failed: {}", request.id, e);
                self.in_flight = None;
                self.clear_highlight();
                self.set_state(PlaybackState::Idle);
            }
        }
    }

    /// Window exhausted while speaking: turn the page and schedule a resume,
    /// or halt at the end of the document.
    fn enter_page_transition(&mut self, now_ms: u64) -> ReaderResult<()> {
        self.set_state(PlaybackState::PageTransition);
        self.clear_highlight();

        if self.shift_window(NavDirection::Next)? {
            self.resume_at_ms = Some(now_ms.saturating_add(self.config.settle_delay_ms));
            log::debug!(
                "page turn to {}, resuming at {:?}",
                self.current_page,
                self.resume_at_ms
            );
        } else {
            log::info!("reached end of document");
            self.resume_at_ms = None;
            self.set_state(PlaybackState::Idle);
        }
        Ok(())
    }

    /// Step the window by its current size. Caller has already cancelled speech.
    fn shift_window(&mut self, direction: NavDirection) -> ReaderResult<bool> {
        let step = self.viewport.pages_visible;
        match self
            .planner
            .step(direction, self.current_page, step, self.store.count())
        {
            Some(page) => {
                self.current_page = page;
                self.load_window()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn apply_viewport(&mut self, width: u32) -> ReaderResult<()> {
        log::debug!("re-layout for viewport width {}", width);
        self.cancel_speech();
        self.resume_at_ms = None;
        self.clear_highlight();
        self.set_state(PlaybackState::Idle);
        self.viewport_width = width;
        self.load_window()
    }

    /// Re-plan for the current page, reload lines, reset the cursor
    fn load_window(&mut self) -> ReaderResult<()> {
        let total = self.store.count();
        self.viewport = self.planner.plan(self.viewport_width, self.current_page, total);
        self.visible = self
            .store
            .lines_in_window(self.viewport.visible_pages(total))?;
        self.cursor = 0;
        self.highlighted = None;
        let view = self.view();
        self.surface.render_window(&view);
        Ok(())
    }

    fn cancel_speech(&mut self) {
        if let Some(id) = self.in_flight.take() {
            log::debug!("cancelling speech request {}", id);
            self.speech.cancel();
        }
    }

    fn clear_highlight(&mut self) {
        self.surface.clear_highlight();
        self.highlighted = None;
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state.is_playing() != state.is_playing() {
            self.surface.playback_changed(state.is_playing());
        }
        self.state = state;
    }

    fn allocate_request_id(&mut self) -> u32 {
        let id = self.next_request_id;
        self.next_request_id = self.next_request_id.wrapping_add(1).max(1);
        id
    }
}
