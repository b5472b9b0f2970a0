// ABOUTME: ProfileExtractor, the orchestrator: classifier gate, per-field extraction, record assembly.
// ABOUTME: A failing field degrades to its placeholder; only a panic in the pass fails the request.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use scraper::Html;

use crate::diagnostics::Diagnostics;
use crate::dom::ExtractionContext;
use crate::error::ExtractError;
use crate::extractors::{builtin_registry, extract_experiences, extract_text, SelectorRegistry};
use crate::options::{ExtractorBuilder, Options};
use crate::record::{ExtractionOutcome, RawProfile};

/// Extracts profile records from page snapshots.
///
/// Holds only configuration; every call reads its document fresh and keeps
/// nothing between calls.
#[derive(Debug, Clone)]
pub struct ProfileExtractor {
    opts: Options,
    diagnostics: Diagnostics,
}

impl ProfileExtractor {
    /// Create a new ExtractorBuilder.
    pub fn builder() -> ExtractorBuilder {
        ExtractorBuilder::new()
    }

    /// Create an extractor from options.
    pub fn new(opts: Options) -> Self {
        let diagnostics = match &opts.sink {
            Some(sink) => Diagnostics::with_sink(opts.debug, sink.clone()),
            None => Diagnostics::new(opts.debug),
        };
        Self { opts, diagnostics }
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// The registry in effect: the configured one, or the builtin.
    pub fn registry(&self) -> &SelectorRegistry {
        match &self.opts.registry {
            Some(registry) => registry,
            None => builtin_registry(),
        }
    }

    /// Runs the classifier gate.
    pub fn is_target_profile_page(&self, url: &str) -> bool {
        self.opts.classifier.is_profile_url(url)
    }

    /// Parses an HTML snapshot and extracts a profile from it.
    ///
    /// The URL is classified before the HTML is parsed.
    pub fn extract_html(&self, html: &str, url: &str) -> ExtractionOutcome {
        if !self.is_target_profile_page(url) {
            return Err(ExtractError::not_profile_page(url));
        }
        let document = Html::parse_document(html);
        self.extract_profile(&document, url)
    }

    /// Extracts a profile from a parsed document.
    ///
    /// Returns `NotProfilePage` without touching the document when the URL
    /// fails the classifier.
    pub fn extract_profile(&self, document: &Html, url: &str) -> ExtractionOutcome {
        if !self.is_target_profile_page(url) {
            return Err(ExtractError::not_profile_page(url));
        }

        match panic::catch_unwind(AssertUnwindSafe(|| self.extract_fields(document))) {
            Ok(raw) => Ok(raw.into_record(url)),
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                self.diagnostics
                    .error(format_args!("Exception during extraction: {}", message));
                Err(ExtractError::failed(message))
            }
        }
    }

    fn extract_fields(&self, document: &Html) -> RawProfile {
        let diag = &self.diagnostics;
        let registry = self.registry();
        let context = ExtractionContext::document(document);

        diag.log("Starting profile data extraction");

        let headline = extract_text(&registry.headline, &context, diag);
        let about = extract_text(&registry.about, &context, diag);
        let experience = extract_experiences(&registry.experience, &context, diag);
        let name = extract_text(&registry.name, &context, diag);

        diag.log("Extraction complete");

        RawProfile {
            name,
            headline,
            about,
            experience,
        }
    }
}

impl Default for ProfileExtractor {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unexpected panic".to_string()
    }
}
