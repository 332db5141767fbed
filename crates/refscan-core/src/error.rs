use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RefscanError {
    #[error("directory '{}' not found", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("could not read document as PDF: {0}")]
    DocumentUnreadable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
