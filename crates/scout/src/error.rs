// ABOUTME: Error types for profile extraction: selector faults, request outcomes, registry loading.
// ABOUTME: SelectorError never escapes an extractor; ExtractError is what callers of the pipeline see.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// A single CSS strategy that could not be compiled.
///
/// Extractors log these and move on to the next strategy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid selector {query:?}: {reason}")]
pub struct SelectorError {
    pub query: String,
    pub reason: String,
}

impl SelectorError {
    pub fn new(query: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self {
            query: query.into(),
            reason: reason.to_string(),
        }
    }
}

/// Failure outcomes of a profile extraction request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The page URL did not pass the profile classifier. No extraction was attempted.
    #[error("not a profile page: {url}")]
    NotProfilePage { url: String },

    /// Something unexpected broke the extraction pass.
    #[error("extraction failed: {message}")]
    ExtractionFailed { message: String },
}

impl ExtractError {
    /// Creates a NotProfilePage outcome for the given URL.
    pub fn not_profile_page(url: impl Into<String>) -> Self {
        ExtractError::NotProfilePage { url: url.into() }
    }

    /// Creates an ExtractionFailed outcome from any displayable cause.
    pub fn failed(cause: impl fmt::Display) -> Self {
        ExtractError::ExtractionFailed {
            message: cause.to_string(),
        }
    }

    /// Returns true if this is a NotProfilePage outcome.
    pub fn is_not_profile_page(&self) -> bool {
        matches!(self, ExtractError::NotProfilePage { .. })
    }

    /// Returns true if this is an ExtractionFailed outcome.
    pub fn is_extraction_failed(&self) -> bool {
        matches!(self, ExtractError::ExtractionFailed { .. })
    }
}

/// Errors raised while loading a selector registry from JSON.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to read selector registry {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse selector registry: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_error_display_names_the_query() {
        let err = SelectorError::new("[[[bad", "unexpected token");
        assert_eq!(
            err.to_string(),
            "invalid selector \"[[[bad\": unexpected token"
        );
    }

    #[test]
    fn extract_error_helpers() {
        let npp = ExtractError::not_profile_page("https://site.example/feed");
        assert!(npp.is_not_profile_page());
        assert!(!npp.is_extraction_failed());
        assert_eq!(npp.to_string(), "not a profile page: https://site.example/feed");

        let failed = ExtractError::failed("boom");
        assert!(failed.is_extraction_failed());
        assert_eq!(failed.to_string(), "extraction failed: boom");
    }
}
