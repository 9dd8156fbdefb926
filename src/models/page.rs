//! Pages of reconstructed lines and the handles that address them

use serde::{Deserialize, Serialize};

use super::fragment::ReconstructedLine;

/// One page of the loaded document (1-based index)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Page {
    pub index: usize,
    pub lines: Vec<ReconstructedLine>,
}

impl Page {
    pub fn new(index: usize, lines: Vec<ReconstructedLine>) -> Self {
        Self { index, lines }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Identity of one line in the visible window.
///
/// `flat_index` is only meaningful for the window it was issued for; every
/// window change renumbers from 0.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct LineHandle {
    pub page_index: usize,
    pub line_in_page: usize,
    pub flat_index: usize,
}

/// A visible line paired with its handle
#[derive(Clone, Debug, PartialEq)]
pub struct VisibleLine {
    pub handle: LineHandle,
    pub text: String,
}
