// ABOUTME: PageSource seam: where the current page URL and rendered HTML come from.
// ABOUTME: StaticPage holds a snapshot in memory; FilePage reads a saved snapshot from disk.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Supplies the current page to the request handler.
pub trait PageSource {
    /// URL of the page as the browser reports it.
    fn url(&self) -> Result<String>;

    /// Rendered document serialized as HTML.
    fn html(&self) -> Result<String>;
}

/// A page snapshot held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPage {
    url: String,
    html: String,
}

impl StaticPage {
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            html: html.into(),
        }
    }
}

impl PageSource for StaticPage {
    fn url(&self) -> Result<String> {
        Ok(self.url.clone())
    }

    fn html(&self) -> Result<String> {
        Ok(self.html.clone())
    }
}

/// A saved HTML snapshot on disk, read lazily when the handler asks for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePage {
    url: String,
    path: PathBuf,
}

impl FilePage {
    pub fn new(url: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            path: path.into(),
        }
    }
}

impl PageSource for FilePage {
    fn url(&self) -> Result<String> {
        Ok(self.url.clone())
    }

    fn html(&self) -> Result<String> {
        fs::read_to_string(&self.path)
            .with_context(|| format!("reading snapshot {}", self.path.display()))
    }
}
