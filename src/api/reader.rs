//! WASM API for the reading view
//!
//! `Reader` owns the playback engine for one session. The page supplies a
//! bridge object that speaks, paints, and schedules timers; the engine calls
//! into it and the page calls back with speech completions and user intents.
//!
//! Bridge shape (all methods required):
//! ```js
//! {
//!   speak(id, text, rate),      // throw if speech synthesis is unavailable
//!   cancelSpeech(),
//!   renderWindow(view),
//!   clearHighlight(),
//!   highlightLine(flatIndex),
//!   scrollToLine(flatIndex),
//!   playbackChanged(playing),
//!   scheduleTick(delayMs),      // call reader.tick() after delayMs
//! }
//! ```

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::api::helpers::{
    deserialize, deserialize_or_default, now_ms, reader_error, serialize, SessionStore,
};
use crate::config::ReaderConfig;
use crate::error::{ReaderError, ReaderResult};
use crate::models::{DocumentSnapshot, LineHandle, NavDirection, ReaderView};
use crate::playback::{PlaybackEngine, ReadingSurface, SpeechRequest, SpeechSynth};
use crate::store::persist::load_snapshot;
use crate::store::PageStore;
use crate::{wasm_error, wasm_info, wasm_warn};

#[wasm_bindgen]
extern "C" {
    /// Host object implementing speech, painting, and timers
    pub type ReaderBridge;

    #[wasm_bindgen(method, catch)]
    fn speak(this: &ReaderBridge, id: u32, text: &str, rate: f64) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = cancelSpeech)]
    fn cancel_speech(this: &ReaderBridge);

    #[wasm_bindgen(method, js_name = renderWindow)]
    fn render_window(this: &ReaderBridge, view: JsValue);

    #[wasm_bindgen(method, js_name = clearHighlight)]
    fn clear_highlight(this: &ReaderBridge);

    #[wasm_bindgen(method, js_name = highlightLine)]
    fn highlight_line(this: &ReaderBridge, flat_index: usize);

    #[wasm_bindgen(method, js_name = scrollToLine)]
    fn scroll_to_line(this: &ReaderBridge, flat_index: usize);

    #[wasm_bindgen(method, js_name = playbackChanged)]
    fn playback_changed(this: &ReaderBridge, playing: bool);

    #[wasm_bindgen(method, js_name = scheduleTick)]
    fn schedule_tick(this: &ReaderBridge, delay_ms: f64);
}

/// Speech half of the bridge
struct JsSpeech {
    bridge: Rc<ReaderBridge>,
}

impl SpeechSynth for JsSpeech {
    fn speak(&mut self, request: &SpeechRequest) -> ReaderResult<()> {
        self.bridge
            .speak(request.id, &request.text, request.rate)
            .map_err(|e| ReaderError::SpeechUnavailable(format!("{:?}", e)))
    }

    fn cancel(&mut self) {
        self.bridge.cancel_speech();
    }
}

/// Painting half of the bridge
struct JsSurface {
    bridge: Rc<ReaderBridge>,
}

impl ReadingSurface for JsSurface {
    fn render_window(&mut self, view: &ReaderView) {
        match serialize(view, "View serialization error") {
            Ok(js) => self.bridge.render_window(js),
            Err(_) => wasm_error!("renderWindow skipped: view could not be serialized"),
        }
    }

    fn clear_highlight(&mut self) {
        self.bridge.clear_highlight();
    }

    fn highlight_line(&mut self, line: LineHandle) {
        self.bridge.highlight_line(line.flat_index);
    }

    fn scroll_to_line(&mut self, line: LineHandle) {
        self.bridge.scroll_to_line(line.flat_index);
    }

    fn playback_changed(&mut self, playing: bool) {
        self.bridge.playback_changed(playing);
    }
}

#[wasm_bindgen]
pub struct Reader {
    engine: PlaybackEngine<JsSpeech, JsSurface>,
    bridge: Rc<ReaderBridge>,
}

#[wasm_bindgen]
impl Reader {
    /// Open the document stored by the upload page.
    ///
    /// Returns `undefined` when no document is stored; the page should show
    /// its "no document loaded" message and do nothing else.
    pub fn open(
        bridge: ReaderBridge,
        viewport_width: u32,
        config_js: JsValue,
    ) -> Result<Option<Reader>, JsValue> {
        let store = SessionStore::open().map_err(reader_error)?;
        let Some(snapshot) = load_snapshot(&store) else {
            wasm_warn!("Reader.open: no document loaded");
            return Ok(None);
        };
        Self::from_snapshot_inner(snapshot, bridge, viewport_width, config_js).map(Some)
    }

    /// Open a session on an explicit `{ totalPages, pagesOfLines }` snapshot
    #[wasm_bindgen(js_name = fromSnapshot)]
    pub fn from_snapshot(
        snapshot_js: JsValue,
        bridge: ReaderBridge,
        viewport_width: u32,
        config_js: JsValue,
    ) -> Result<Reader, JsValue> {
        let snapshot: DocumentSnapshot = deserialize(snapshot_js, "Snapshot deserialization error")?;
        Self::from_snapshot_inner(snapshot, bridge, viewport_width, config_js)
    }

    #[wasm_bindgen(js_name = playPause)]
    pub fn play_pause(&mut self) {
        self.engine.toggle_play_pause();
        self.reschedule();
    }

    pub fn stop(&mut self) {
        self.engine.stop();
        self.reschedule();
    }

    /// `direction` is "prev" or "next". Returns whether the window moved.
    pub fn navigate(&mut self, direction: &str) -> Result<bool, JsValue> {
        let direction = NavDirection::parse(direction)
            .ok_or_else(|| js_sys::Error::new(&format!("Unknown direction: {}", direction)))?;
        let moved = self.engine.navigate(direction).map_err(reader_error)?;
        self.reschedule();
        Ok(moved)
    }

    /// Click on a line: speak from there
    #[wasm_bindgen(js_name = seekTo)]
    pub fn seek_to(&mut self, flat_index: usize) -> Result<(), JsValue> {
        self.engine.seek(flat_index).map_err(reader_error)?;
        self.reschedule();
        Ok(())
    }

    #[wasm_bindgen(js_name = setRate)]
    pub fn set_rate(&mut self, rate: f64) -> Result<(), JsValue> {
        self.engine.set_rate(rate).map_err(reader_error)
    }

    #[wasm_bindgen(js_name = viewportResized)]
    pub fn viewport_resized(&mut self, width: u32) {
        self.engine.viewport_resized(width, now_ms());
        self.reschedule();
    }

    /// Utterance `end` event for request `id`
    #[wasm_bindgen(js_name = speechFinished)]
    pub fn speech_finished(&mut self, id: u32) -> Result<(), JsValue> {
        self.engine.speech_finished(id, now_ms()).map_err(reader_error)?;
        self.reschedule();
        Ok(())
    }

    /// Utterance `error` event for request `id`
    #[wasm_bindgen(js_name = speechFailed)]
    pub fn speech_failed(&mut self, id: u32, reason: String) {
        self.engine.speech_failed(id, &reason);
        self.reschedule();
    }

    /// Fire due timers. The bridge's `scheduleTick` says when.
    pub fn tick(&mut self) -> Result<(), JsValue> {
        self.engine.tick(now_ms()).map_err(reader_error)?;
        self.reschedule();
        Ok(())
    }

    /// Current `ReaderView` snapshot
    pub fn view(&self) -> Result<JsValue, JsValue> {
        serialize(&self.engine.view(), "View serialization error")
    }

    #[wasm_bindgen(getter, js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.engine.state().is_playing()
    }

    #[wasm_bindgen(getter, js_name = rateOptions)]
    pub fn rate_options(&self) -> Vec<f64> {
        crate::models::PlaybackRate::OPTIONS.to_vec()
    }
}

impl Reader {
    fn from_snapshot_inner(
        snapshot: DocumentSnapshot,
        bridge: ReaderBridge,
        viewport_width: u32,
        config_js: JsValue,
    ) -> Result<Reader, JsValue> {
        let config: ReaderConfig = deserialize_or_default(config_js, "Config deserialization error")?;
        let store = PageStore::from_snapshot(snapshot).map_err(reader_error)?;
        let bridge = Rc::new(bridge);

        let engine = PlaybackEngine::new(
            store,
            config,
            JsSpeech {
                bridge: Rc::clone(&bridge),
            },
            JsSurface {
                bridge: Rc::clone(&bridge),
            },
            viewport_width,
        )
        .map_err(reader_error)?;

        wasm_info!(
            "Reader opened: {} pages, width {}",
            engine.total_pages(),
            viewport_width
        );
        Ok(Reader { engine, bridge })
    }

    fn reschedule(&self) {
        if let Some(deadline) = self.engine.next_deadline_ms() {
            let delay = deadline.saturating_sub(now_ms());
            self.bridge.schedule_tick(delay as f64);
        }
    }
}
