use refscan_core::{Index, RefscanError};
use std::path::Path;

/// Write the index as pretty-printed UTF-8 JSON, fully overwriting any
/// previous artifact. Non-ASCII document names are written literally.
pub fn write_index(index: &Index, path: &Path) -> Result<(), RefscanError> {
    let json = serde_json::to_string_pretty(index)?;
    std::fs::write(path, json)?;
    Ok(())
}
