pub mod lopdf_backend;

use crate::error::RefscanError;
use serde::{Deserialize, Serialize};

/// Outcome of text extraction for a single page.
///
/// A page that cannot yield text (broken content stream, unsupported
/// encoding, image-only page) is recorded as `ExtractionFailed` instead of
/// aborting the document, so callers can treat it as "no content" without
/// error-handling control flow at every call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageContent {
    Text(String),
    ExtractionFailed(String),
}

/// One page of a document, addressed by 1-based ordinal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub page_number: usize,
    pub content: PageContent,
}

impl Page {
    /// Extracted text, or `None` when extraction failed for this page.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            PageContent::Text(t) => Some(t),
            PageContent::ExtractionFailed(_) => None,
        }
    }
}

/// Trait for PDF text extraction backends.
///
/// A backend returns one [`Page`] per physical page, in document order.
/// Only whole-document failures (file is not a readable PDF) surface as
/// `Err`; per-page failures are embedded in the page sequence.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one Page per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<Page>, RefscanError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
