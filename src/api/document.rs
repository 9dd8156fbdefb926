//! WASM API for the upload side: reconstruction and persistence
//!
//! The page extracts fragments with its PDF library and hands them over here.
//! Reconstruction happens in Rust; the result goes to session storage for the
//! reader page.

use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, deserialize_or_default, reader_error, serialize, SessionStore};
use crate::config::ReconstructOptions;
use crate::ingest::{build_document, check_upload_type};
use crate::models::{DocumentSnapshot, PositionedFragment};
use crate::reconstruct::reconstruct;
use crate::store::persist::{load_snapshot, save_snapshot};
use crate::{wasm_error, wasm_info, wasm_log};

/// One page as sent from JavaScript: its fragments, or the extractor's error
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum PageInput {
    Fragments(Vec<PositionedFragment>),
    Failed { error: String },
}

impl PageInput {
    fn into_result(self) -> Result<Vec<PositionedFragment>, String> {
        match self {
            PageInput::Fragments(fragments) => Ok(fragments),
            PageInput::Failed { error } => Err(error),
        }
    }
}

/// Reconstruct one page's lines
///
/// # Parameters
/// - `fragments_js`: array of `{ text, x, y, width }`
///
/// # Returns
/// Array of line strings, top to bottom
#[wasm_bindgen(js_name = reconstructPage)]
pub fn reconstruct_page(fragments_js: JsValue) -> Result<JsValue, JsValue> {
    let fragments: Vec<PositionedFragment> = deserialize(fragments_js, "Fragment deserialization error")?;
    let lines: Vec<String> = reconstruct(&fragments).into_iter().map(|l| l.text).collect();
    wasm_log!("reconstructPage: {} fragments -> {} lines", fragments.len(), lines.len());
    serialize(&lines, "Line serialization error")
}

/// Throws "Invalid file type. Please upload a PDF." for anything but a PDF
#[wasm_bindgen(js_name = checkUploadType)]
pub fn check_upload_type_js(mime_type: &str) -> Result<(), JsValue> {
    check_upload_type(mime_type).map_err(reader_error)
}

/// Reconstruct every page of a document
///
/// # Parameters
/// - `pages_js`: array with one entry per page, either a fragment array or
///   `{ error: "..." }` when extraction failed for that page
/// - `options_js`: optional `{ lineTolerance, wordGap }`
///
/// # Returns
/// `{ totalPages, pagesOfLines }`. Any failed page aborts the whole document.
#[wasm_bindgen(js_name = buildDocument)]
pub fn build_document_js(pages_js: JsValue, options_js: JsValue) -> Result<JsValue, JsValue> {
    let pages: Vec<PageInput> = deserialize(pages_js, "Page deserialization error")?;
    let options: ReconstructOptions =
        deserialize_or_default(options_js, "Options deserialization error")?;

    wasm_info!("buildDocument: {} pages", pages.len());
    let snapshot = build_document(pages.into_iter().map(PageInput::into_result), &options)
        .map_err(reader_error)?;
    serialize(&snapshot, "Snapshot serialization error")
}

/// Write a built document to session storage for the reader page
#[wasm_bindgen(js_name = persistDocument)]
pub fn persist_document(snapshot_js: JsValue) -> Result<(), JsValue> {
    let snapshot: DocumentSnapshot = deserialize(snapshot_js, "Snapshot deserialization error")?;
    let mut store = SessionStore::open().map_err(reader_error)?;
    save_snapshot(&mut store, &snapshot).map_err(reader_error)?;
    wasm_info!("persistDocument: {} pages stored", snapshot.total_pages);
    Ok(())
}

/// Stored document, or `null` when none was loaded
#[wasm_bindgen(js_name = loadStoredDocument)]
pub fn load_stored_document() -> Result<JsValue, JsValue> {
    let store = match SessionStore::open() {
        Ok(store) => store,
        Err(e) => {
            wasm_error!("loadStoredDocument: {}", e);
            return Ok(JsValue::NULL);
        }
    };
    match load_snapshot(&store) {
        Some(snapshot) => serialize(&snapshot, "Snapshot serialization error"),
        None => Ok(JsValue::NULL),
    }
}
