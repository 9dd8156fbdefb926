//! Layout planning: one- or two-page windows and window navigation

pub mod debounce;

pub use debounce::ResizeDebouncer;

use crate::models::{NavDirection, NavState, ViewportState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutPlanner {
    two_page_min_width_px: u32,
}

impl LayoutPlanner {
    pub fn new(two_page_min_width_px: u32) -> Self {
        Self {
            two_page_min_width_px,
        }
    }

    pub fn pages_visible(&self, viewport_width_px: u32) -> usize {
        if viewport_width_px >= self.two_page_min_width_px {
            2
        } else {
            1
        }
    }

    /// Window for the given width starting at `current_page_index`.
    ///
    /// The window always starts at the current page; near the end of the
    /// document it simply renders fewer pages rather than moving back.
    pub fn plan(
        &self,
        viewport_width_px: u32,
        current_page_index: usize,
        total_pages: usize,
    ) -> ViewportState {
        ViewportState {
            pages_visible: self.pages_visible(viewport_width_px),
            first_visible_page_index: current_page_index.clamp(1, total_pages.max(1)),
        }
    }

    /// New current page after stepping a full window, or `None` if the step
    /// is not allowed. `step` is the window size at the time of the action.
    pub fn step(
        &self,
        direction: NavDirection,
        current_page_index: usize,
        step: usize,
        total_pages: usize,
    ) -> Option<usize> {
        match direction {
            NavDirection::Prev if current_page_index > 1 => {
                Some(current_page_index.saturating_sub(step).max(1))
            }
            NavDirection::Next if current_page_index + step <= total_pages => {
                Some(current_page_index + step)
            }
            _ => None,
        }
    }

    pub fn nav_state(viewport: &ViewportState, total_pages: usize) -> NavState {
        NavState {
            rewind_disabled: viewport.first_visible_page_index <= 1,
            forward_disabled: viewport.nominal_last_index() >= total_pages,
        }
    }
}

impl Default for LayoutPlanner {
    fn default() -> Self {
        Self::new(1100)
    }
}
