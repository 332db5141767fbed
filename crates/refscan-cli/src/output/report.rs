use refscan_core::SearchOutcome;

/// Render a search outcome as human-readable lines: one per match, then a
/// final summary saying whether anything was found.
pub fn format_search(outcome: &SearchOutcome) -> String {
    let mut out = String::new();

    for m in &outcome.matches {
        out.push_str(&format!(
            "found '{}' in '{}' on page {}\n",
            outcome.term, m.document, m.page_number
        ));
    }

    if outcome.found_any() {
        out.push_str(&format!("{} match(es) found\n", outcome.matches.len()));
    } else {
        out.push_str(&format!("'{}' not found in any PDF file\n", outcome.term));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use refscan_core::SearchMatch;

    fn outcome(term: &str, matches: Vec<SearchMatch>) -> SearchOutcome {
        SearchOutcome {
            term: term.to_string(),
            matches,
            files_scanned: 1,
            failures: vec![],
        }
    }

    #[test]
    fn formats_one_line_per_match_plus_summary() {
        let o = outcome(
            "99998888",
            vec![
                SearchMatch {
                    document: "test_upload_99.pdf".into(),
                    page_number: 1,
                },
                SearchMatch {
                    document: "test_upload_99.pdf".into(),
                    page_number: 3,
                },
            ],
        );

        let text = format_search(&o);
        assert_eq!(
            text,
            "found '99998888' in 'test_upload_99.pdf' on page 1\n\
             found '99998888' in 'test_upload_99.pdf' on page 3\n\
             2 match(es) found\n"
        );
    }

    #[test]
    fn zero_matches_yield_not_found_summary() {
        let text = format_search(&outcome("00000000", vec![]));
        assert_eq!(text, "'00000000' not found in any PDF file\n");
    }
}
