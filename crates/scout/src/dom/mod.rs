// ABOUTME: DOM helpers for reading a parsed profile snapshot.
// ABOUTME: Rendered-text approximation, ancestor lookup, and the scoped extraction context.

//! DOM utilities over `scraper`'s tree.
//!
//! - `text`: an `innerText`-like rendering of an element and section lookup.
//! - `context`: [`ExtractionContext`], the scope every strategy runs against.

pub mod context;
pub mod text;

pub use context::{compile, ExtractionContext};
pub use text::{enclosing_section, inner_text, normalize_whitespace};
