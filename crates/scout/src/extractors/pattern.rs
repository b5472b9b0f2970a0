// ABOUTME: Heading-keyword heuristic used when every selector strategy for a field fails.
// ABOUTME: Finds a heading mentioning a keyword and returns the first substantial text near it.

//! Heuristic pattern finder.
//!
//! This is deliberately approximate. A heading that merely mentions a
//! keyword in prose still counts as a match.

use scraper::ElementRef;

use crate::diagnostics::Diagnostics;
use crate::dom::{enclosing_section, inner_text, ExtractionContext};

/// Heading-like elements scanned for keywords.
pub const HEADER_QUERY: &str = "h1, h2, h3, h4, h5, h6, section";

/// Text-bearing nodes considered under a matched heading.
const CONTENT_QUERY: &str = "p, div > span, div.pv-shared-text-with-see-more";

/// Content must be longer than this many characters to qualify.
pub const MIN_CONTENT_CHARS: usize = 10;

/// Returns the first qualifying text under a heading that mentions one of
/// `keywords`, or an empty string.
pub fn find_by_pattern<S: AsRef<str>>(
    keywords: &[S],
    context: &ExtractionContext<'_>,
    diag: &Diagnostics,
) -> String {
    for (header, keyword) in matching_headers(keywords, context, diag) {
        let Some(region) = enclosing_section(header) else {
            continue;
        };

        let candidates = match ExtractionContext::subtree(region).select_all(CONTENT_QUERY) {
            Ok(candidates) => candidates,
            Err(err) => {
                diag.error(format_args!("Error with selector {}: {}", CONTENT_QUERY, err.reason));
                return String::new();
            }
        };

        let found = candidates
            .into_iter()
            .map(inner_text)
            .find(|text| text.chars().count() > MIN_CONTENT_CHARS);

        if let Some(text) = found {
            diag.log(format_args!("Found text under heading matching '{}'", keyword));
            return text;
        }
    }

    String::new()
}

/// Heading-like elements whose text contains a keyword, in document order,
/// each paired with the first keyword it matched.
pub(crate) fn matching_headers<'a, S: AsRef<str>>(
    keywords: &[S],
    context: &ExtractionContext<'a>,
    diag: &Diagnostics,
) -> Vec<(ElementRef<'a>, String)> {
    let headers = match context.select_all(HEADER_QUERY) {
        Ok(headers) => headers,
        Err(err) => {
            diag.error(format_args!("Error with selector {}: {}", HEADER_QUERY, err.reason));
            return Vec::new();
        }
    };

    let keywords: Vec<String> = keywords.iter().map(|k| k.as_ref().to_lowercase()).collect();

    headers
        .into_iter()
        .filter_map(|header| {
            let text = inner_text(header).to_lowercase();
            keywords
                .iter()
                .find(|keyword| text.contains(keyword.as_str()))
                .map(|keyword| (header, keyword.clone()))
        })
        .collect()
}
