//! Viewport window and navigation types

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Which pages are on screen.
///
/// `first_visible_page_index` is 1-based. The window may nominally extend past
/// the last page; `visible_pages` clips it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ViewportState {
    pub pages_visible: usize,
    pub first_visible_page_index: usize,
}

impl ViewportState {
    /// Last page index the window would cover, ignoring the document end
    pub fn nominal_last_index(&self) -> usize {
        self.first_visible_page_index + self.pages_visible - 1
    }

    /// Page indices actually rendered for a document of `total_pages`
    pub fn visible_pages(&self, total_pages: usize) -> RangeInclusive<usize> {
        let last = self.nominal_last_index().min(total_pages);
        self.first_visible_page_index..=last
    }

    pub fn is_two_page(&self) -> bool {
        self.pages_visible == 2
    }

    /// CSS class the surface puts on the page container
    pub fn layout_class(&self) -> &'static str {
        if self.is_two_page() {
            "two-page-layout"
        } else {
            "single-page-layout"
        }
    }
}

/// Direction of a page-window step
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NavDirection {
    Prev,
    Next,
}

impl NavDirection {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "prev" | "previous" | "rewind" => Some(Self::Prev),
            "next" | "forward" => Some(Self::Next),
            _ => None,
        }
    }
}

/// Enabled/disabled state of the rewind and forward buttons
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NavState {
    pub rewind_disabled: bool,
    pub forward_disabled: bool,
}
