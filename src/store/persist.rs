//! Session persistence of the reconstructed document
//!
//! The upload view writes two keys once; the reader view reads them once at
//! start. Missing keys or a zero page count mean "no document loaded".

use std::collections::HashMap;

use crate::error::{ReaderError, ReaderResult};
use crate::models::DocumentSnapshot;

pub const TOTAL_PAGES_KEY: &str = "pdfTotalPages";
pub const PAGES_TEXT_KEY: &str = "pdfPagesText";

/// Minimal string key-value store (session storage in the browser)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> ReaderResult<()>;
}

/// In-memory store for tests and non-browser hosts
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> ReaderResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Write the snapshot under both keys.
///
/// Pages go first so a refused write never pairs a new count with the
/// previous document's pages.
pub fn save_snapshot<K: KeyValueStore>(store: &mut K, snapshot: &DocumentSnapshot) -> ReaderResult<()> {
    let pages_json = serde_json::to_string(&snapshot.pages_of_lines)
        .map_err(|e| ReaderError::Storage(format!("encode pages: {}", e)))?;

    store.set(PAGES_TEXT_KEY, &pages_json)?;
    store.set(TOTAL_PAGES_KEY, &snapshot.total_pages.to_string())?;

    log::info!(
        "saved document snapshot: {} pages, {} bytes of text",
        snapshot.total_pages,
        pages_json.len()
    );
    Ok(())
}

/// Read the snapshot back. `None` means there is no document to read.
pub fn load_snapshot<K: KeyValueStore>(store: &K) -> Option<DocumentSnapshot> {
    let total_pages = store
        .get(TOTAL_PAGES_KEY)
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)?;
    let pages_json = store.get(PAGES_TEXT_KEY)?;

    let pages_of_lines: Vec<Vec<String>> = match serde_json::from_str(&pages_json) {
        Ok(pages) => pages,
        Err(e) => {
            log::warn!("stored pages are unreadable, treating as no document: {}", e);
            return None;
        }
    };

    if pages_of_lines.is_empty() {
        return None;
    }
    if pages_of_lines.len() != total_pages {
        log::warn!(
            "stored page count {} disagrees with {} stored pages; using the pages",
            total_pages,
            pages_of_lines.len()
        );
    }

    Some(DocumentSnapshot::new(pages_of_lines))
}
