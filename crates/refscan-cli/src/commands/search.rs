use refscan_core::extraction::lopdf_backend::LopdfExtractor;
use refscan_core::RefscanError;
use std::path::PathBuf;

use crate::output;

pub fn run(term: &str, directory: PathBuf, output_format: &str) -> Result<(), RefscanError> {
    let extractor = LopdfExtractor::new();
    let outcome = refscan_core::search_directory(term, &directory, &extractor)?;

    if outcome.files_scanned == 0 {
        println!("No PDF files found in '{}'.", directory.display());
        return Ok(());
    }

    for failure in &outcome.failures {
        eprintln!(
            "  warning: could not read '{}': {}",
            failure.document, failure.reason
        );
    }

    match output_format {
        "json" => println!("{}", serde_json::to_string_pretty(&outcome)?),
        _ => print!("{}", output::report::format_search(&outcome)),
    }

    Ok(())
}
