use refscan_core::extraction::lopdf_backend::LopdfExtractor;
use refscan_core::{PageContent, PdfExtractor, RefscanError};
use std::path::PathBuf;

/// Print the per-page extracted text of one PDF, so users can see exactly
/// what the index and search operate on.
pub fn run(file: PathBuf) -> Result<(), RefscanError> {
    let pdf_bytes = std::fs::read(&file)?;
    let extractor = LopdfExtractor::new();
    let pages = extractor.extract_pages(&pdf_bytes)?;

    for page in &pages {
        println!("--- Page {} ---", page.page_number);
        match &page.content {
            PageContent::Text(text) => println!("{text}"),
            PageContent::ExtractionFailed(reason) => println!("[extraction failed: {reason}]"),
        }
    }

    Ok(())
}
