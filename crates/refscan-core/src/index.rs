use crate::error::RefscanError;
use crate::extraction::PdfExtractor;
use crate::identifier::extract_identifiers;
use crate::scan::{self, DocumentFailure};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::path::Path;

/// Reverse index mapping each identifier to the documents containing it.
///
/// Identifier order is first-seen order across the scan; each entry lists
/// document names in first-seen order with no duplicates, even when an
/// identifier recurs on several pages of the same document.
#[derive(Debug, Clone, Default)]
pub struct Index {
    keys: Vec<String>,
    entries: HashMap<String, Vec<String>>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `document` contains `identifier`. Appends the document
    /// to the identifier's entry unless it is already listed.
    pub fn insert(&mut self, identifier: &str, document: &str) {
        if !self.entries.contains_key(identifier) {
            self.keys.push(identifier.to_string());
        }
        let documents = self.entries.entry(identifier.to_string()).or_default();
        if !documents.iter().any(|d| d == document) {
            documents.push(document.to_string());
        }
    }

    pub fn get(&self, identifier: &str) -> Option<&[String]> {
        self.entries.get(identifier).map(|v| v.as_slice())
    }

    /// Number of distinct identifiers.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Identifiers in first-seen order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(|k| k.as_str())
    }
}

impl Serialize for Index {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.keys.len()))?;
        for key in &self.keys {
            map.serialize_entry(key, &self.entries[key])?;
        }
        map.end()
    }
}

/// Result of an indexing run over one directory.
#[derive(Debug, Clone)]
pub struct IndexOutcome {
    pub index: Index,
    /// Number of PDF files found, including ones that failed to read.
    pub files_scanned: usize,
    pub failures: Vec<DocumentFailure>,
}

/// Build the identifier index for every PDF in `dir`.
///
/// Pages whose extraction failed contribute nothing; documents that cannot
/// be read at all end up in `failures` and in no index entry. The index is
/// built fresh from the current directory listing on every call.
pub fn build_index(
    dir: &Path,
    extractor: &dyn PdfExtractor,
) -> Result<IndexOutcome, RefscanError> {
    let scan = scan::scan_directory(dir, extractor)?;

    let mut index = Index::new();
    for document in &scan.documents {
        for page in &document.pages {
            let Some(text) = page.text() else { continue };
            for identifier in extract_identifiers(text) {
                index.insert(&identifier, &document.name);
            }
        }
    }

    Ok(IndexOutcome {
        index,
        files_scanned: scan.files_scanned,
        failures: scan.failures,
    })
}
