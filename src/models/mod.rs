//! Data models for the read-aloud module
//!
//! Fragments and lines produced by reconstruction, pages held by the store,
//! viewport and playback state, and the serializable snapshots exchanged with
//! JavaScript.

pub mod fragment;
pub mod page;
pub mod playback;
pub mod snapshot;
pub mod viewport;

// Re-export commonly used types
pub use fragment::*;
pub use page::*;
pub use playback::*;
pub use snapshot::*;
pub use viewport::*;
