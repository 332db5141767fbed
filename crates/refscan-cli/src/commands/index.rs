use refscan_core::extraction::lopdf_backend::LopdfExtractor;
use refscan_core::RefscanError;
use std::path::PathBuf;

use crate::output;

pub fn run(directory: PathBuf, out: PathBuf) -> Result<(), RefscanError> {
    let extractor = LopdfExtractor::new();
    let outcome = refscan_core::build_index(&directory, &extractor)?;

    for failure in &outcome.failures {
        eprintln!(
            "  warning: could not read '{}': {}",
            failure.document, failure.reason
        );
    }

    output::json::write_index(&outcome.index, &out)?;

    println!(
        "Indexed {} file(s) in '{}': {} unique identifier(s), saved to '{}'",
        outcome.files_scanned,
        directory.display(),
        outcome.index.len(),
        out.display()
    );

    Ok(())
}
