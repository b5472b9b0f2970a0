// ABOUTME: Main library entry point for the outreach-scout profile extractor.
// ABOUTME: Re-exports the public API: ProfileExtractor, ExtractorBuilder, ProfileRecord, errors, registry.

//! Scout - resilient field extraction from professional profile pages.
//!
//! Profile markup changes without notice, so every field is located through
//! an ordered list of CSS strategies, with a heading-keyword heuristic as the
//! last resort. Missing fields come back as fixed placeholder strings rather
//! than nulls.
//!
//! # Example
//!
//! ```no_run
//! use outreach_scout::{ExtractError, ProfileExtractor};
//!
//! fn main() -> Result<(), ExtractError> {
//!     let html = std::fs::read_to_string("profile.html").unwrap();
//!     let extractor = ProfileExtractor::builder().build();
//!     let record = extractor.extract_html(&html, "https://www.linkedin.com/in/jdoe")?;
//!     println!("{}: {}", record.name, record.headline);
//!     Ok(())
//! }
//! ```

pub mod classify;
pub mod diagnostics;
pub mod dom;
pub mod error;
pub mod extractor;
pub mod extractors;
pub mod message;
pub mod navigation;
pub mod options;
pub mod page;
pub mod prompt;
pub mod record;

pub use crate::classify::{is_target_profile_page, ProfileClassifier};
pub use crate::diagnostics::{DiagnosticSink, Diagnostics, Level, MemorySink, TracingSink};
pub use crate::dom::ExtractionContext;
pub use crate::error::{ExtractError, RegistryError, SelectorError};
pub use crate::extractor::ProfileExtractor;
pub use crate::extractors::{
    builtin_registry, extract_experiences, extract_text, find_by_pattern, load_registry_file,
    parse_registry, ExperienceSpec, FieldSpec, SelectorRegistry, MAX_EXPERIENCES,
};
pub use crate::message::{ExtensionRequest, ExtensionResponse, FailurePayload};
pub use crate::navigation::{NavigationEvent, NavigationWatcher};
pub use crate::options::{ExtractorBuilder, Options};
pub use crate::page::{FilePage, PageSource, StaticPage};
pub use crate::prompt::{build_prompt, parse_reply, GeneratedOutreach};
pub use crate::record::{ExtractionOutcome, ProfileRecord, RawProfile};
