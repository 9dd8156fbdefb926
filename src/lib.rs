//! PDF Read-Aloud WASM Module
//!
//! Reconstructs readable lines from positioned PDF text fragments and drives
//! line-by-line speech with synchronized highlighting and page turning.
//! The core modules are plain Rust; `api` is the JavaScript boundary.

pub mod api;
pub mod config;
pub mod error;
pub mod ingest;
pub mod layout;
pub mod models;
pub mod playback;
pub mod reconstruct;
pub mod store;

// Re-export commonly used types
pub use config::{ReaderConfig, ReconstructOptions};
pub use error::{ReaderError, ReaderResult};
pub use models::*;
pub use playback::PlaybackEngine;
pub use reconstruct::{reconstruct, reconstruct_with};
pub use store::PageStore;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }

    log::info!("PDF read-aloud WASM module initialized");
}
