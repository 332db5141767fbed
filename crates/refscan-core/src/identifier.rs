use once_cell::sync::Lazy;
use regex::Regex;

/// Reference numbers are maximal digit runs of 8 to 13 characters bounded
/// by word boundaries. Shorter or longer runs are ignored entirely, never
/// truncated or split.
static IDENTIFIER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{8,13}\b").unwrap());

/// Extract all candidate identifiers from one page's text.
///
/// Matches are non-overlapping, scanned left to right, and returned in
/// order of occurrence (duplicates included; de-duplication is the
/// index's concern). Digit runs split by spaces, dashes or line breaks
/// are not merged.
pub fn extract_identifiers(text: &str) -> Vec<String> {
    IDENTIFIER_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
