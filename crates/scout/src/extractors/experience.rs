// ABOUTME: Experience list extraction: container strategies with per-item role fallback.
// ABOUTME: Falls back to list items under a work-related heading; never returns more than three roles.

//! Multi-item extraction for recent experience.
//!
//! Key behaviors:
//! - The first section strategy that matches any container is authoritative;
//!   later section strategies are not consulted.
//! - Only the first [`MAX_EXPERIENCES`] containers are read. Each one walks the
//!   role strategies independently; containers without role text are skipped.
//! - When that yields nothing, list items under the first work-related
//!   heading are used instead, keeping only the first line of each.

use crate::diagnostics::Diagnostics;
use crate::dom::{enclosing_section, inner_text, ExtractionContext};
use crate::extractors::fallback::first_match;
use crate::extractors::pattern::matching_headers;
use crate::extractors::registry::ExperienceSpec;

/// Upper bound on returned experience entries.
pub const MAX_EXPERIENCES: usize = 3;

/// Item-like elements collected under a matched heading.
const ITEM_QUERY: &str = "li, .pv-entity__summary-info, .pvs-entity";

/// Items must be longer than this many characters to count.
const MIN_ITEM_CHARS: usize = 5;

/// Extracts up to [`MAX_EXPERIENCES`] role strings.
pub fn extract_experiences(
    spec: &ExperienceSpec,
    context: &ExtractionContext<'_>,
    diag: &Diagnostics,
) -> Vec<String> {
    let roles = from_containers(spec, context, diag);
    if !roles.is_empty() {
        return roles;
    }

    diag.log("Falling back to text pattern search for experiences");
    from_headings(&spec.sections.keywords, context, diag)
}

fn from_containers(
    spec: &ExperienceSpec,
    context: &ExtractionContext<'_>,
    diag: &Diagnostics,
) -> Vec<String> {
    for strategy in &spec.sections.strategies {
        let containers = match context.select_all(strategy) {
            Ok(containers) => containers,
            Err(err) => {
                diag.error(format_args!(
                    "Error extracting experiences with selector {}: {}",
                    strategy, err.reason
                ));
                continue;
            }
        };

        if containers.is_empty() {
            continue;
        }

        diag.log(format_args!(
            "Found {} experiences with selector: {}",
            containers.len(),
            strategy
        ));

        return containers
            .into_iter()
            .take(MAX_EXPERIENCES)
            .filter_map(|container| {
                first_match(
                    &spec.roles.strategies,
                    &ExtractionContext::subtree(container),
                    diag,
                )
            })
            .collect();
    }

    Vec::new()
}

fn from_headings<S: AsRef<str>>(
    keywords: &[S],
    context: &ExtractionContext<'_>,
    diag: &Diagnostics,
) -> Vec<String> {
    for (header, keyword) in matching_headers(keywords, context, diag) {
        let Some(region) = enclosing_section(header) else {
            continue;
        };

        let items = match ExtractionContext::subtree(region).select_all(ITEM_QUERY) {
            Ok(items) => items,
            Err(err) => {
                diag.error(format_args!("Error with selector {}: {}", ITEM_QUERY, err.reason));
                return Vec::new();
            }
        };

        let roles: Vec<String> = items
            .into_iter()
            .take(MAX_EXPERIENCES)
            .filter_map(|item| {
                let text = inner_text(item);
                if text.chars().count() <= MIN_ITEM_CHARS {
                    return None;
                }
                text.lines().next().map(|line| line.trim().to_string())
            })
            .collect();

        if !roles.is_empty() {
            diag.log(format_args!(
                "Found {} experiences under heading matching '{}'",
                roles.len(),
                keyword
            ));
            return roles;
        }
    }

    Vec::new()
}
