//! Read-aloud WASM API
//!
//! JavaScript-facing surface of the module.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros, serde conversion, clock and session storage
//! - `document`: upload side (reconstruct pages, build and persist the document)
//! - `reader`: reading side (`Reader` session driving speech and highlighting)

pub mod helpers;
pub mod document;
pub mod reader;

pub use document::{build_document_js, check_upload_type_js, load_stored_document, persist_document, reconstruct_page};
pub use reader::{Reader, ReaderBridge};
