// ABOUTME: ExtractionContext, the read-only scope (document or subtree) a strategy is evaluated in.
// ABOUTME: Selector compilation failures come back as SelectorError values, never panics.

use scraper::{ElementRef, Html, Selector};

use crate::error::SelectorError;

/// Compiles one strategy string into a CSS selector.
pub fn compile(query: &str) -> Result<Selector, SelectorError> {
    Selector::parse(query).map_err(|err| SelectorError::new(query, err))
}

/// The scope a strategy is evaluated against.
///
/// Matching follows `querySelector` semantics: the selector is matched
/// against the whole tree, but only descendants of the scope are returned.
#[derive(Debug, Clone, Copy)]
pub struct ExtractionContext<'a> {
    scope: ElementRef<'a>,
}

impl<'a> ExtractionContext<'a> {
    /// Scope covering the whole document.
    pub fn document(doc: &'a Html) -> Self {
        Self {
            scope: doc.root_element(),
        }
    }

    /// Scope limited to the descendants of `scope`.
    pub fn subtree(scope: ElementRef<'a>) -> Self {
        Self { scope }
    }

    pub fn scope(&self) -> ElementRef<'a> {
        self.scope
    }

    /// Returns the first element in document order matching `query`.
    pub fn select_first(&self, query: &str) -> Result<Option<ElementRef<'a>>, SelectorError> {
        let selector = compile(query)?;
        Ok(self.scope.select(&selector).next())
    }

    /// Returns every element matching `query`, in document order.
    pub fn select_all(&self, query: &str) -> Result<Vec<ElementRef<'a>>, SelectorError> {
        let selector = compile(query)?;
        Ok(self.scope.select(&selector).collect())
    }
}
