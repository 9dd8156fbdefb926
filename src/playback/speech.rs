//! Speech collaborator interface
//!
//! The engine issues one request at a time and waits for the host to report
//! completion with the request id. Ids let the engine drop completions that
//! belong to a request it already cancelled.

use serde::{Deserialize, Serialize};

use crate::error::ReaderResult;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SpeechRequest {
    pub id: u32,
    pub text: String,
    pub rate: f64,
}

pub trait SpeechSynth {
    /// Start speaking. Completion is reported later through
    /// `PlaybackEngine::speech_finished` with `request.id`.
    fn speak(&mut self, request: &SpeechRequest) -> ReaderResult<()>;

    /// Cancel the request in flight, synchronously
    fn cancel(&mut self);
}
