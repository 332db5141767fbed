use crate::error::RefscanError;
use crate::extraction::PdfExtractor;
use crate::scan::{self, DocumentFailure};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One page on which the search term was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMatch {
    pub document: String,
    pub page_number: usize,
}

/// Result of searching one term across a directory.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub term: String,
    /// Matches in document order, then page order. One entry per
    /// (document, page) even if the term occurs several times on a page.
    pub matches: Vec<SearchMatch>,
    pub files_scanned: usize,
    pub failures: Vec<DocumentFailure>,
}

impl SearchOutcome {
    pub fn found_any(&self) -> bool {
        !self.matches.is_empty()
    }
}

/// Search every PDF in `dir` for a literal term.
///
/// Containment is case-sensitive and exact as extracted; no normalization
/// of whitespace, diacritics or number formatting. Pages whose extraction
/// failed never match; unreadable documents are recorded in `failures`.
pub fn search_directory(
    term: &str,
    dir: &Path,
    extractor: &dyn PdfExtractor,
) -> Result<SearchOutcome, RefscanError> {
    let scan = scan::scan_directory(dir, extractor)?;

    let mut matches = Vec::new();
    for document in &scan.documents {
        for page in &document.pages {
            let Some(text) = page.text() else { continue };
            if text.contains(term) {
                matches.push(SearchMatch {
                    document: document.name.clone(),
                    page_number: page.page_number,
                });
            }
        }
    }

    Ok(SearchOutcome {
        term: term.to_string(),
        matches,
        files_scanned: scan.files_scanned,
        failures: scan.failures,
    })
}
