//! Page store: the loaded document, read-only after load
//!
//! Pages are addressed 1-based, the way the reader labels them.

pub mod persist;

use std::ops::RangeInclusive;

use crate::error::{ReaderError, ReaderResult};
use crate::models::{DocumentSnapshot, LineHandle, Page, ReconstructedLine, VisibleLine};

#[derive(Clone, Debug, PartialEq)]
pub struct PageStore {
    pages: Vec<Page>,
}

impl PageStore {
    /// Load per-page line sequences. Fails on a document with no pages.
    pub fn load(pages_of_lines: Vec<Vec<ReconstructedLine>>) -> ReaderResult<Self> {
        if pages_of_lines.is_empty() {
            return Err(ReaderError::EmptyDocument);
        }

        let pages: Vec<Page> = pages_of_lines
            .into_iter()
            .enumerate()
            .map(|(i, lines)| Page::new(i + 1, lines))
            .collect();

        log::info!(
            "page store loaded: {} pages, {} lines",
            pages.len(),
            pages.iter().map(Page::line_count).sum::<usize>()
        );
        Ok(Self { pages })
    }

    /// Load from the persisted snapshot format
    pub fn from_snapshot(snapshot: DocumentSnapshot) -> ReaderResult<Self> {
        if snapshot.total_pages == 0 {
            return Err(ReaderError::EmptyDocument);
        }
        Self::load(
            snapshot
                .pages_of_lines
                .into_iter()
                .map(|page| page.into_iter().map(ReconstructedLine::from).collect())
                .collect(),
        )
    }

    /// Page by 1-based index
    pub fn get(&self, page_index: usize) -> ReaderResult<&Page> {
        page_index
            .checked_sub(1)
            .and_then(|i| self.pages.get(i))
            .ok_or(ReaderError::OutOfRange {
                what: "page",
                index: page_index,
                len: self.pages.len(),
            })
    }

    pub fn count(&self) -> usize {
        self.pages.len()
    }

    /// Flatten the lines of a page range into handles numbered from 0
    pub fn lines_in_window(&self, pages: RangeInclusive<usize>) -> ReaderResult<Vec<VisibleLine>> {
        let mut visible = Vec::new();
        for page_index in pages {
            let page = self.get(page_index)?;
            for (line_in_page, line) in page.lines.iter().enumerate() {
                visible.push(VisibleLine {
                    handle: LineHandle {
                        page_index,
                        line_in_page,
                        flat_index: visible.len(),
                    },
                    text: line.text.clone(),
                });
            }
        }
        Ok(visible)
    }
}
