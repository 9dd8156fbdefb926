// Recording collaborators shared by the integration tests
#![allow(dead_code)]

use read_aloud_wasm::models::{LineHandle, ReaderView, ReconstructedLine};
use read_aloud_wasm::playback::{ReadingSurface, SpeechRequest, SpeechSynth};
use read_aloud_wasm::{PageStore, PlaybackEngine, ReaderConfig, ReaderError, ReaderResult};

#[derive(Debug, Default)]
pub struct RecordingSpeech {
    pub requests: Vec<SpeechRequest>,
    pub cancels: usize,
    pub unavailable: bool,
}

impl RecordingSpeech {
    pub fn last_id(&self) -> u32 {
        self.requests.last().expect("no speech request issued").id
    }

    pub fn spoken_texts(&self) -> Vec<&str> {
        self.requests.iter().map(|r| r.text.as_str()).collect()
    }
}

impl SpeechSynth for RecordingSpeech {
    fn speak(&mut self, request: &SpeechRequest) -> ReaderResult<()> {
        if self.unavailable {
            return Err(ReaderError::SpeechUnavailable("no voices".to_string()));
        }
        self.requests.push(request.clone());
        Ok(())
    }

    fn cancel(&mut self) {
        self.cancels += 1;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    Render { first_page: usize, lines: usize },
    Clear,
    Highlight(usize),
    Scroll(usize),
    Playing(bool),
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub events: Vec<SurfaceEvent>,
    pub last_view: Option<ReaderView>,
    pub highlighted: Option<usize>,
}

impl RecordingSurface {
    pub fn renders(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SurfaceEvent::Render { .. }))
            .count()
    }
}

impl ReadingSurface for RecordingSurface {
    fn render_window(&mut self, view: &ReaderView) {
        self.events.push(SurfaceEvent::Render {
            first_page: view.first_visible_page_index,
            lines: view.line_count(),
        });
        self.last_view = Some(view.clone());
        self.highlighted = None;
    }

    fn clear_highlight(&mut self) {
        self.events.push(SurfaceEvent::Clear);
        self.highlighted = None;
    }

    fn highlight_line(&mut self, line: LineHandle) {
        assert!(self.highlighted.is_none(), "highlight applied without clearing the previous one");
        self.events.push(SurfaceEvent::Highlight(line.flat_index));
        self.highlighted = Some(line.flat_index);
    }

    fn scroll_to_line(&mut self, line: LineHandle) {
        self.events.push(SurfaceEvent::Scroll(line.flat_index));
    }

    fn playback_changed(&mut self, playing: bool) {
        self.events.push(SurfaceEvent::Playing(playing));
    }
}

pub type TestEngine = PlaybackEngine<RecordingSpeech, RecordingSurface>;

/// `lines_per_page[i]` lines on page i+1, texts "p{page}l{line}"
pub fn document(lines_per_page: &[usize]) -> PageStore {
    PageStore::load(
        lines_per_page
            .iter()
            .enumerate()
            .map(|(p, &n)| {
                (0..n)
                    .map(|l| ReconstructedLine::new(format!("p{}l{}", p + 1, l)))
                    .collect()
            })
            .collect(),
    )
    .expect("test document should load")
}

pub fn engine(lines_per_page: &[usize], width: u32) -> TestEngine {
    PlaybackEngine::new(
        document(lines_per_page),
        ReaderConfig::default(),
        RecordingSpeech::default(),
        RecordingSurface::default(),
        width,
    )
    .expect("engine should open")
}

/// Complete the request in flight at `now_ms`
pub fn finish_current(engine: &mut TestEngine, now_ms: u64) {
    let id = engine
        .in_flight_request()
        .expect("a request should be in flight");
    engine.speech_finished(id, now_ms).expect("completion should apply");
}

pub const NARROW: u32 = 800;
pub const WIDE: u32 = 1400;
