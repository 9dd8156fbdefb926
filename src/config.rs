//! Tunables for reconstruction, layout, and playback
//!
//! JavaScript may pass a partial object; anything missing keeps its default.

use serde::{Deserialize, Serialize};

use crate::models::PlaybackRate;

/// Geometric thresholds for line reconstruction, in PDF units
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ReconstructOptions {
    /// Fragments closer than this vertically share a line
    pub line_tolerance: f64,
    /// Horizontal gap above which a space is inserted between fragments
    pub word_gap: f64,
}

impl Default for ReconstructOptions {
    fn default() -> Self {
        Self {
            line_tolerance: 5.0,
            word_gap: 2.0,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ReaderConfig {
    /// Viewports at least this wide show two pages side by side
    pub two_page_min_width_px: u32,
    /// Pause after an automatic page turn before speech resumes
    pub settle_delay_ms: u64,
    /// Quiet window that collapses a burst of resize events
    pub resize_quiet_ms: u64,
    pub default_rate: PlaybackRate,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            two_page_min_width_px: 1100,
            settle_delay_ms: 200,
            resize_quiet_ms: 250,
            default_rate: PlaybackRate::NORMAL,
        }
    }
}
