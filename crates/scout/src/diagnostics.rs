// ABOUTME: Injectable diagnostic sink for extractor log lines, gated by a debug flag.
// ABOUTME: The default sink forwards to tracing; MemorySink keeps lines in memory for inspection.

//! Diagnostics plumbing.
//!
//! Extractors never log through a global. They receive a [`Diagnostics`]
//! handle (via the extractor options) and report through it:
//!
//! - `log` lines are progress notes, emitted only when debug is on.
//! - `error` lines report faults that were absorbed, such as a selector that
//!   failed to compile. They are always emitted.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// Severity of a diagnostic line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Error,
}

/// Destination for diagnostic lines.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, level: Level, message: &str);
}

/// Forwards diagnostic lines to `tracing` under the `outreach_scout` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, level: Level, message: &str) {
        match level {
            Level::Debug => tracing::debug!(target: "outreach_scout", "{}", message),
            Level::Error => tracing::error!(target: "outreach_scout", "{}", message),
        }
    }
}

/// Keeps every diagnostic line in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<(Level, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all recorded lines, oldest first.
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns only the message text of recorded lines.
    pub fn messages(&self) -> Vec<String> {
        self.lines().into_iter().map(|(_, msg)| msg).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }
}

impl DiagnosticSink for MemorySink {
    fn record(&self, level: Level, message: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((level, message.to_string()));
    }
}

/// Handle passed to every extractor.
#[derive(Clone)]
pub struct Diagnostics {
    debug: bool,
    sink: Arc<dyn DiagnosticSink>,
}

impl Diagnostics {
    /// Creates a handle backed by [`TracingSink`].
    pub fn new(debug: bool) -> Self {
        Self::with_sink(debug, Arc::new(TracingSink))
    }

    /// Creates a handle backed by a caller-supplied sink.
    pub fn with_sink(debug: bool, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { debug, sink }
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug
    }

    /// Records a progress note if debug is enabled.
    pub fn log(&self, message: impl fmt::Display) {
        if self.debug {
            self.sink.record(Level::Debug, &message.to_string());
        }
    }

    /// Records an absorbed fault.
    pub fn error(&self, message: impl fmt::Display) {
        self.sink.record(Level::Error, &message.to_string());
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new(false)
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_lines_are_gated_by_flag() {
        let sink = Arc::new(MemorySink::new());
        let quiet = Diagnostics::with_sink(false, sink.clone());
        quiet.log("hidden");
        assert!(sink.is_empty());

        let loud = Diagnostics::with_sink(true, sink.clone());
        loud.log("shown");
        assert_eq!(sink.lines(), vec![(Level::Debug, "shown".to_string())]);
    }

    #[test]
    fn errors_are_always_recorded() {
        let sink = Arc::new(MemorySink::new());
        let diag = Diagnostics::with_sink(false, sink.clone());
        diag.error("bad selector");
        assert_eq!(sink.messages(), vec!["bad selector"]);
        assert_eq!(sink.lines()[0].0, Level::Error);
    }

    #[test]
    fn memory_sink_keeps_lines_after_a_poisoned_lock() {
        let sink = Arc::new(MemorySink::new());
        sink.record(Level::Debug, "before");

        let poisoner = sink.clone();
        let joined = std::thread::spawn(move || {
            let _guard = poisoner.lines.lock().unwrap();
            panic!("poison the lock");
        })
        .join();
        assert!(joined.is_err());
        assert!(sink.lines.is_poisoned());

        sink.record(Level::Error, "after");
        assert_eq!(sink.messages(), vec!["before", "after"]);
        assert!(!sink.is_empty());
    }
}
