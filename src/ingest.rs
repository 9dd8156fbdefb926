//! Upload-side pipeline: extract, reconstruct, persist
//!
//! Every page must extract cleanly. The first failure abandons the upload and
//! nothing is written to the store.

use crate::config::ReconstructOptions;
use crate::error::{ReaderError, ReaderResult};
use crate::models::{DocumentSnapshot, PositionedFragment};
use crate::reconstruct::reconstruct_with;
use crate::store::persist::{save_snapshot, KeyValueStore};

pub const PDF_MIME_TYPE: &str = "application/pdf";

/// External PDF text extractor, one page at a time (1-based)
pub trait TextExtractor {
    fn page_count(&self) -> usize;
    fn page_fragments(&mut self, page_index: usize) -> Result<Vec<PositionedFragment>, String>;
}

/// Reject anything that is not a PDF before extraction starts
pub fn check_upload_type(mime_type: &str) -> ReaderResult<()> {
    if mime_type.trim().eq_ignore_ascii_case(PDF_MIME_TYPE) {
        Ok(())
    } else {
        Err(ReaderError::InvalidFileType(mime_type.to_string()))
    }
}

/// Reconstruct already-extracted pages. Page `i` of the input is page `i + 1`
/// of the document; an `Err` entry aborts the whole build.
pub fn build_document<I, E>(pages: I, opts: &ReconstructOptions) -> ReaderResult<DocumentSnapshot>
where
    I: IntoIterator<Item = Result<Vec<PositionedFragment>, E>>,
    E: std::fmt::Display,
{
    let mut pages_of_lines = Vec::new();
    for (i, page) in pages.into_iter().enumerate() {
        let fragments = page.map_err(|e| ReaderError::ExtractionFailure {
            page: i + 1,
            reason: e.to_string(),
        })?;
        let lines = reconstruct_with(&fragments, opts);
        pages_of_lines.push(lines.into_iter().map(|line| line.text).collect());
    }

    if pages_of_lines.is_empty() {
        return Err(ReaderError::EmptyDocument);
    }
    Ok(DocumentSnapshot::new(pages_of_lines))
}

/// Pull every page from the extractor, reconstruct, and persist once
pub fn ingest_document<X, K>(
    extractor: &mut X,
    store: &mut K,
    opts: &ReconstructOptions,
) -> ReaderResult<DocumentSnapshot>
where
    X: TextExtractor,
    K: KeyValueStore,
{
    let total = extractor.page_count();
    log::info!("ingesting document: {} pages", total);

    let pages = (1..=total).map(|page_index| extractor.page_fragments(page_index));
    let snapshot = build_document(pages, opts).map_err(|e| {
        log::warn!("ingest abandoned: {}", e);
        e
    })?;

    save_snapshot(store, &snapshot)?;
    Ok(snapshot)
}
