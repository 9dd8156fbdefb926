//! Synchronized read-aloud playback
//!
//! `PlaybackEngine` drives a `SpeechSynth` one line at a time and keeps a
//! `ReadingSurface` in step: which window is shown, which line is highlighted,
//! whether the play button reads "play" or "pause".

pub mod engine;
pub mod speech;
pub mod surface;

pub use engine::PlaybackEngine;
pub use speech::{SpeechRequest, SpeechSynth};
pub use surface::ReadingSurface;
