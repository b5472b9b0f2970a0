// ABOUTME: Ordered-strategy text extraction: the first strategy whose first match has text wins.
// ABOUTME: Bad selectors are logged and skipped; keyword fields fall back to the heading heuristic.

//! Fallback text extraction.
//!
//! Key behaviors:
//! - Strategies are tried in declared order; the first non-empty match wins.
//! - Each strategy resolves exactly one element (the first in document order).
//!   If that element renders no text the next strategy is tried.
//! - A strategy that fails to compile is a non-match, never an abort.

use crate::diagnostics::Diagnostics;
use crate::dom::{inner_text, ExtractionContext};
use crate::extractors::pattern::find_by_pattern;
use crate::extractors::registry::FieldSpec;

/// Extracts a field's text, falling back to the heading heuristic when the
/// field has keywords. Returns an empty string when nothing matches.
pub fn extract_text(
    field: &FieldSpec,
    context: &ExtractionContext<'_>,
    diag: &Diagnostics,
) -> String {
    if let Some(text) = first_match(&field.strategies, context, diag) {
        return text;
    }

    if !field.has_keywords() {
        return String::new();
    }

    diag.log(format_args!(
        "No selector matched {}, searching headings",
        field.field
    ));
    find_by_pattern(&field.keywords, context, diag)
}

/// Returns the rendered text of the first strategy that matches non-empty text.
pub fn first_match<S: AsRef<str>>(
    strategies: &[S],
    context: &ExtractionContext<'_>,
    diag: &Diagnostics,
) -> Option<String> {
    strategies
        .iter()
        .find_map(|strategy| match_strategy(strategy.as_ref(), context, diag))
}

fn match_strategy(
    strategy: &str,
    context: &ExtractionContext<'_>,
    diag: &Diagnostics,
) -> Option<String> {
    match context.select_first(strategy) {
        Ok(Some(el)) => {
            let text = inner_text(el);
            if text.is_empty() {
                return None;
            }
            diag.log(format_args!("Found text with selector: {}", strategy));
            Some(text)
        }
        Ok(None) => None,
        Err(err) => {
            diag.error(format_args!("Error with selector {}: {}", strategy, err.reason));
            None
        }
    }
}
