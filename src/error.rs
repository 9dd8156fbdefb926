//! Error types for the read-aloud module
//!
//! Load and upload failures (`EmptyDocument`, `ExtractionFailure`,
//! `InvalidFileType`) are shown to the user. `OutOfRange` is an invariant
//! violation and should not surface in normal use. `SpeechUnavailable` leaves
//! playback idle without retrying.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReaderError {
    /// Document has no pages
    #[error("document has no pages")]
    EmptyDocument,

    /// Page or line access outside the loaded bounds
    #[error("{what} index {index} out of range (len {len})")]
    OutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    /// Speech collaborator missing or failed to speak
    #[error("speech unavailable: {0}")]
    SpeechUnavailable(String),

    /// The PDF text extractor failed on a page
    #[error("text extraction failed on page {page}: {reason}")]
    ExtractionFailure { page: usize, reason: String },

    /// Upload was not a PDF
    #[error("invalid file type: {0}")]
    InvalidFileType(String),

    /// Rate is not one of the offered options
    #[error("unsupported playback rate: {0}")]
    InvalidRate(f64),

    /// Key-value store refused a read or write
    #[error("storage error: {0}")]
    Storage(String),
}

impl ReaderError {
    /// Short message for the page, in the wording the UI uses
    pub fn user_message(&self) -> &'static str {
        match self {
            ReaderError::EmptyDocument => "No document loaded. Please upload a PDF first.",
            ReaderError::ExtractionFailure { .. } | ReaderError::Storage(_) => {
                "Failed to process PDF. Please try again."
            }
            ReaderError::InvalidFileType(_) => "Invalid file type. Please upload a PDF.",
            ReaderError::SpeechUnavailable(_) => "Speech is not available in this browser.",
            ReaderError::InvalidRate(_) => "Unsupported playback speed.",
            ReaderError::OutOfRange { .. } => "Something went wrong. Please reload the page.",
        }
    }
}

pub type ReaderResult<T> = Result<T, ReaderError>;
