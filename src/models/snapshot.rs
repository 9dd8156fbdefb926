//! Serializable snapshots: the persisted document and the reader view
//!
//! `DocumentSnapshot` is what the upload page writes to session storage.
//! `ReaderView` is everything the reading surface needs to redraw itself.

use serde::{Deserialize, Serialize};

use super::playback::{PlaybackRate, PlaybackState};

/// Reconstructed document as persisted between the upload and reading views
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSnapshot {
    pub total_pages: usize,
    pub pages_of_lines: Vec<Vec<String>>,
}

impl DocumentSnapshot {
    pub fn new(pages_of_lines: Vec<Vec<String>>) -> Self {
        Self {
            total_pages: pages_of_lines.len(),
            pages_of_lines,
        }
    }
}

/// One line as the surface draws it
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineView {
    pub flat_index: usize,
    pub line_in_page: usize,
    pub text: String,
    pub highlighted: bool,
}

/// One page of the visible window
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub index: usize,
    /// e.g. "Page 3 of 12"
    pub label: String,
    pub lines: Vec<LineView>,
}

/// Full surface snapshot
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReaderView {
    pub total_pages: usize,
    pub pages_visible: usize,
    pub first_visible_page_index: usize,
    pub layout_class: String,
    pub pages: Vec<PageView>,
    pub rewind_disabled: bool,
    pub forward_disabled: bool,
    pub state: PlaybackState,
    pub is_playing: bool,
    pub flat_line_index: usize,
    pub rate: PlaybackRate,
}

impl ReaderView {
    /// Total lines across the visible pages
    pub fn line_count(&self) -> usize {
        self.pages.iter().map(|page| page.lines.len()).sum()
    }
}
