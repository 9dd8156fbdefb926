//! Rendering surface interface
//!
//! The engine never touches the DOM. It tells the surface what changed and
//! the surface decides how to show it.

use crate::models::{LineHandle, ReaderView};

pub trait ReadingSurface {
    /// The visible window changed; redraw pages and lines from `view`
    fn render_window(&mut self, view: &ReaderView);

    /// Remove the highlight from every line
    fn clear_highlight(&mut self);

    /// Highlight one line. Called only after `clear_highlight`.
    fn highlight_line(&mut self, line: LineHandle);

    /// Bring a line into view
    fn scroll_to_line(&mut self, line: LineHandle);

    /// Playing flag flipped (play/pause button icon)
    fn playback_changed(&mut self, playing: bool);
}
