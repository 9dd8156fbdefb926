//! Raw text fragments and the lines reconstructed from them
//!
//! A fragment is what the PDF text extractor hands back: a run of characters
//! with a page-space origin and a rendered width. PDF y grows upward.

use serde::{Deserialize, Serialize};

/// One contiguous run of characters extracted from a PDF page
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PositionedFragment {
    /// The characters of the run, exactly as extracted
    pub text: String,

    /// Horizontal origin in page space
    pub x: f64,

    /// Vertical origin in page space (baseline, grows upward)
    pub y: f64,

    /// Rendered width of the run
    pub width: f64,
}

impl PositionedFragment {
    pub fn new(text: impl Into<String>, x: f64, y: f64, width: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            width,
        }
    }

    /// Right edge of the rendered run
    pub fn end_x(&self) -> f64 {
        self.x + self.width
    }

    /// Horizontal gap from the end of this run to the start of `next`.
    /// Negative when the runs overlap.
    pub fn gap_to(&self, next: &PositionedFragment) -> f64 {
        next.x - self.end_x()
    }
}

/// Plain text of one visual line, single-spaced and trimmed
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ReconstructedLine {
    pub text: String,
}

impl ReconstructedLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl From<&str> for ReconstructedLine {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for ReconstructedLine {
    fn from(text: String) -> Self {
        Self { text }
    }
}
