// ABOUTME: Configuration options for profile extraction and the ExtractorBuilder.
// ABOUTME: ExtractorBuilder provides a fluent API for constructing ProfileExtractor instances.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::classify::ProfileClassifier;
use crate::diagnostics::DiagnosticSink;
use crate::extractor::ProfileExtractor;
use crate::extractors::SelectorRegistry;

/// Wait applied by the request handler before extracting, to let client-side rendering finish.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Configuration options for a profile extractor.
#[derive(Clone)]
pub struct Options {
    pub debug: bool,
    pub settle_delay: Duration,
    pub registry: Option<SelectorRegistry>,
    pub classifier: ProfileClassifier,
    pub sink: Option<Arc<dyn DiagnosticSink>>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            debug: false,
            settle_delay: DEFAULT_SETTLE_DELAY,
            registry: None,
            classifier: ProfileClassifier::default(),
            sink: None,
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("debug", &self.debug)
            .field("settle_delay", &self.settle_delay)
            .field("registry", &self.registry)
            .field("classifier", &self.classifier)
            .field("sink", &self.sink.as_ref().map(|_| "custom"))
            .finish()
    }
}

/// Builder for constructing ProfileExtractor instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ExtractorBuilder {
    opts: Options,
}

impl ExtractorBuilder {
    /// Create a new ExtractorBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Emit progress notes as well as errors.
    pub fn debug(mut self, debug: bool) -> Self {
        self.opts.debug = debug;
        self
    }

    /// Set the wait before extraction in the request handler.
    pub fn settle_delay(mut self, delay: Duration) -> Self {
        self.opts.settle_delay = delay;
        self
    }

    /// Use a custom selector registry instead of the builtin one.
    pub fn registry(mut self, registry: SelectorRegistry) -> Self {
        self.opts.registry = Some(registry);
        self
    }

    /// Restrict profile pages to the given hosts (and their subdomains).
    pub fn hosts<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.opts.classifier = ProfileClassifier::for_hosts(hosts);
        self
    }

    /// Use a specific classifier.
    pub fn classifier(mut self, classifier: ProfileClassifier) -> Self {
        self.opts.classifier = classifier;
        self
    }

    /// Send diagnostics to a custom sink instead of `tracing`.
    pub fn sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.opts.sink = Some(sink);
        self
    }

    /// Build the ProfileExtractor with the configured options.
    pub fn build(self) -> ProfileExtractor {
        ProfileExtractor::new(self.opts)
    }
}

impl Default for ExtractorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MemorySink;
    use crate::extractors::FieldSpec;

    #[test]
    fn test_defaults() {
        let opts = Options::default();
        assert!(!opts.debug);
        assert_eq!(opts.settle_delay, Duration::from_millis(500));
        assert!(opts.registry.is_none());
        assert!(opts.classifier.hosts().is_empty());
        assert!(opts.sink.is_none());
    }

    #[test]
    fn test_builder_sets_fields() {
        let registry = SelectorRegistry {
            name: FieldSpec::new("name", ["h1"]),
            ..Default::default()
        };
        let extractor = ExtractorBuilder::new()
            .debug(true)
            .settle_delay(Duration::ZERO)
            .registry(registry.clone())
            .hosts(["linkedin.com"])
            .sink(Arc::new(MemorySink::new()))
            .build();

        let opts = extractor.options();
        assert!(opts.debug);
        assert_eq!(opts.settle_delay, Duration::ZERO);
        assert_eq!(opts.registry.as_ref(), Some(&registry));
        assert_eq!(opts.classifier.hosts(), &["linkedin.com".to_string()]);
        assert!(opts.sink.is_some());
        assert!(format!("{:?}", opts).contains("custom"));
    }
}
