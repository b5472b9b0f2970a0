// ABOUTME: Navigation watcher for single-page-app URL changes on profile pages.
// ABOUTME: Optional collaborator; extraction never depends on it.

use crate::classify::ProfileClassifier;
use crate::diagnostics::Diagnostics;

/// A URL change seen by the watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEvent {
    pub from: String,
    pub to: String,
    /// Whether the new URL is itself a profile page.
    pub is_profile: bool,
}

/// Tracks the last seen URL and reports when it changes.
#[derive(Debug, Clone)]
pub struct NavigationWatcher {
    last_url: String,
    classifier: ProfileClassifier,
    diagnostics: Diagnostics,
}

impl NavigationWatcher {
    /// Starts watching from `initial_url`, but only on profile pages.
    pub fn for_page(
        initial_url: impl Into<String>,
        classifier: ProfileClassifier,
        diagnostics: Diagnostics,
    ) -> Option<Self> {
        let last_url = initial_url.into();
        if !classifier.is_profile_url(&last_url) {
            return None;
        }
        Some(Self {
            last_url,
            classifier,
            diagnostics,
        })
    }

    pub fn last_url(&self) -> &str {
        &self.last_url
    }

    /// Call on every DOM mutation batch with the current URL.
    pub fn observe(&mut self, url: &str) -> Option<NavigationEvent> {
        if url == self.last_url {
            return None;
        }
        let from = std::mem::replace(&mut self.last_url, url.to_string());
        self.diagnostics.log(format_args!(
            "URL changed from {} to {}, profile might have changed",
            from, url
        ));
        Some(NavigationEvent {
            from,
            to: url.to_string(),
            is_profile: self.classifier.is_profile_url(url),
        })
    }
}
