//! Playback state, cursor, and rate

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::error::ReaderError;

/// Playback engine state (sent to JavaScript as a small integer)
#[derive(Serialize_repr, Deserialize_repr, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PlaybackState {
    /// No speech active, cursor retained
    Idle = 0,
    /// One line in flight with the speech collaborator
    Speaking = 1,
    /// User-initiated stop, cursor retained
    Paused = 2,
    /// Between exhausting the window and either loading the next one or halting
    PageTransition = 3,
}

impl PlaybackState {
    /// Whether the play/pause control should show "pause"
    pub fn is_playing(self) -> bool {
        matches!(self, PlaybackState::Speaking | PlaybackState::PageTransition)
    }
}

/// Position of playback within the visible window
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackCursor {
    /// Index into the concatenated lines of the visible pages
    pub flat_line_index: usize,
    pub is_playing: bool,
}

impl PlaybackCursor {
    /// True once every visible line has been spoken
    pub fn is_exhausted(&self, visible_len: usize) -> bool {
        self.flat_line_index >= visible_len
    }
}

/// Speech rate multiplier, restricted to the options offered in the UI
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(try_from = "f64", into = "f64")]
pub struct PlaybackRate(f64);

impl PlaybackRate {
    pub const OPTIONS: [f64; 7] = [0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0];

    pub const NORMAL: PlaybackRate = PlaybackRate(1.0);

    pub fn new(value: f64) -> Result<Self, ReaderError> {
        Self::OPTIONS
            .iter()
            .copied()
            .find(|option| (option - value).abs() < 1e-9)
            .map(PlaybackRate)
            .ok_or(ReaderError::InvalidRate(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for PlaybackRate {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl TryFrom<f64> for PlaybackRate {
    type Error = ReaderError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PlaybackRate> for f64 {
    fn from(rate: PlaybackRate) -> Self {
        rate.0
    }
}
