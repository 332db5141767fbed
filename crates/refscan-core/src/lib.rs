pub mod error;
pub mod extraction;
pub mod identifier;
pub mod index;
pub mod scan;
pub mod search;

pub use error::RefscanError;
pub use extraction::{Page, PageContent, PdfExtractor};
pub use index::{build_index, Index, IndexOutcome};
pub use scan::{pdf_files_in, scan_directory, DirectoryScan, DocumentFailure, ScannedDocument};
pub use search::{search_directory, SearchMatch, SearchOutcome};
