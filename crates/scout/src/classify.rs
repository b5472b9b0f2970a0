// ABOUTME: Profile page classifier: gate that decides whether a URL is a profile page.
// ABOUTME: Matches the /in/<slug> path pattern, optionally restricted to a host list.

use url::Url;

/// Host of the profile site the builtin selectors target.
pub const LINKEDIN_HOST: &str = "linkedin.com";

/// First path segment of a profile URL.
const PROFILE_SEGMENT: &str = "in";

/// Decides whether a URL points at a profile page.
///
/// With no hosts configured any host qualifies. A configured host matches
/// itself and its subdomains (`linkedin.com` accepts `www.linkedin.com`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileClassifier {
    hosts: Vec<String>,
}

impl ProfileClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the classifier to the given hosts.
    pub fn for_hosts<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            hosts: hosts
                .into_iter()
                .map(|h| h.as_ref().trim().trim_start_matches('.').to_lowercase())
                .filter(|h| !h.is_empty())
                .collect(),
        }
    }

    /// Classifier accepting only the profile site's own hosts.
    pub fn linkedin() -> Self {
        Self::for_hosts([LINKEDIN_HOST])
    }

    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    /// Returns true if `url` is an http(s) URL with a `/in/<slug>` path on an allowed host.
    pub fn is_profile_url(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url.trim()) else {
            return false;
        };

        if !matches!(parsed.scheme(), "http" | "https") {
            return false;
        }

        if !self.host_allowed(parsed.host_str().unwrap_or("")) {
            return false;
        }

        let Some(mut segments) = parsed.path_segments() else {
            return false;
        };

        segments.next() == Some(PROFILE_SEGMENT)
            && segments.next().map_or(false, |slug| !slug.is_empty())
    }

    fn host_allowed(&self, host: &str) -> bool {
        if self.hosts.is_empty() {
            return true;
        }
        self.hosts.iter().any(|allowed| {
            host == allowed
                || host
                    .strip_suffix(allowed.as_str())
                    .map_or(false, |prefix| prefix.ends_with('.'))
        })
    }
}

/// Classifies a URL with the default (any-host) classifier.
pub fn is_target_profile_page(url: &str) -> bool {
    ProfileClassifier::default().is_profile_url(url)
}
