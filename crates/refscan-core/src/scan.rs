use crate::error::RefscanError;
use crate::extraction::{Page, PdfExtractor};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A document whose pages were extracted successfully.
#[derive(Debug, Clone)]
pub struct ScannedDocument {
    /// File name within the scanned directory.
    pub name: String,
    pub pages: Vec<Page>,
}

/// A document that could not be read or decoded at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentFailure {
    pub document: String,
    pub reason: String,
}

/// Result of scanning one directory: successfully extracted documents plus
/// a side list of per-document failures. A failing document never aborts
/// the scan of its siblings.
#[derive(Debug, Clone)]
pub struct DirectoryScan {
    pub documents: Vec<ScannedDocument>,
    pub failures: Vec<DocumentFailure>,
    /// Number of PDF files found in the directory, including failed ones.
    pub files_scanned: usize,
}

/// List file names ending in `.pdf` (case-insensitive) in a directory.
///
/// Not recursive. Names are sorted so index and search output do not
/// depend on the platform's directory listing order.
pub fn pdf_files_in(dir: &Path) -> Result<Vec<String>, RefscanError> {
    if !dir.is_dir() {
        return Err(RefscanError::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        // Suffix match rather than Path::extension(), so a bare ".pdf"
        // (extension-less in Path terms) is still picked up.
        if name.to_ascii_lowercase().ends_with(".pdf") && entry.path().is_file() {
            names.push(name);
        }
    }

    names.sort();
    Ok(names)
}

/// Scan every PDF in a directory through the given extractor.
///
/// Each document is processed independently: an unreadable file or a
/// whole-document decode failure is recorded in `failures` and processing
/// continues with the next file. Only a missing directory is fatal.
pub fn scan_directory(
    dir: &Path,
    extractor: &dyn PdfExtractor,
) -> Result<DirectoryScan, RefscanError> {
    let names = pdf_files_in(dir)?;
    let files_scanned = names.len();

    let mut documents = Vec::new();
    let mut failures = Vec::new();

    for name in names {
        let path = dir.join(&name);
        let outcome = std::fs::read(&path)
            .map_err(RefscanError::from)
            .and_then(|bytes| extractor.extract_pages(&bytes));
        match outcome {
            Ok(pages) => documents.push(ScannedDocument { name, pages }),
            Err(e) => failures.push(DocumentFailure {
                document: name,
                reason: e.to_string(),
            }),
        }
    }

    Ok(DirectoryScan {
        documents,
        failures,
        files_scanned,
    })
}
