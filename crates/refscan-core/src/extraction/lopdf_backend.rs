use crate::error::RefscanError;
use crate::extraction::{Page, PageContent, PdfExtractor};
use lopdf::Document;

/// PDF extraction backend using lopdf.
///
/// Pages are decoded independently: a malformed content stream on one page
/// yields an `ExtractionFailed` entry while the remaining pages are still
/// extracted.
pub struct LopdfExtractor;

impl LopdfExtractor {
    pub fn new() -> Self {
        LopdfExtractor
    }
}

impl Default for LopdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for LopdfExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<Page>, RefscanError> {
        let doc = Document::load_mem(pdf_bytes)
            .map_err(|e| RefscanError::DocumentUnreadable(e.to_string()))?;

        // get_pages() keys are page numbers in physical order; re-number
        // via enumerate so ordinals are always contiguous and 1-based.
        let pages = doc
            .get_pages()
            .into_keys()
            .enumerate()
            .map(|(i, page_number)| {
                let content = match doc.extract_text(&[page_number]) {
                    Ok(text) => PageContent::Text(text),
                    Err(e) => PageContent::ExtractionFailed(e.to_string()),
                };
                Page {
                    page_number: i + 1,
                    content,
                }
            })
            .collect();

        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "lopdf"
    }
}
