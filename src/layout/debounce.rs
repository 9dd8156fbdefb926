//! Resize debouncing
//!
//! A burst of resize events collapses into one re-layout for the last width,
//! fired once no event has arrived for the quiet window.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizeDebouncer {
    quiet_ms: u64,
    pending: Option<PendingResize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingResize {
    width: u32,
    due_ms: u64,
}

impl ResizeDebouncer {
    pub fn new(quiet_ms: u64) -> Self {
        Self {
            quiet_ms,
            pending: None,
        }
    }

    /// Record a resize; restarts the quiet window
    pub fn push(&mut self, width: u32, now_ms: u64) {
        self.pending = Some(PendingResize {
            width,
            due_ms: now_ms.saturating_add(self.quiet_ms),
        });
    }

    /// Width to apply, once the quiet window has elapsed
    pub fn poll(&mut self, now_ms: u64) -> Option<u32> {
        match self.pending {
            Some(p) if now_ms >= p.due_ms => {
                self.pending = None;
                Some(p.width)
            }
            _ => None,
        }
    }

    /// Width of the pending resize, applied now regardless of the quiet window
    pub fn take(&mut self) -> Option<u32> {
        self.pending.take().map(|p| p.width)
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        self.pending.map(|p| p.due_ms)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
