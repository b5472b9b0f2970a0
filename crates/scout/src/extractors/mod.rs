// ABOUTME: Field extraction strategies for profile snapshots.
// ABOUTME: Registry data, ordered-selector fallback, heading heuristics, and the experience list.

//! Extraction layer.
//!
//! Submodules:
//! - `registry`: field specs (ordered strategies + fallback keywords).
//! - `loader`: builtin and file-based registries.
//! - `fallback`: first-match-wins text extraction over a strategy list.
//! - `pattern`: keyword search over headings, the last resort.
//! - `experience`: bounded multi-item extraction with its own fallback.

pub mod experience;
pub mod fallback;
pub mod loader;
pub mod pattern;
pub mod registry;

pub use experience::{extract_experiences, MAX_EXPERIENCES};
pub use fallback::{extract_text, first_match};
pub use loader::{builtin_registry, load_registry_file, parse_registry};
pub use pattern::find_by_pattern;
pub use registry::{ExperienceSpec, FieldSpec, SelectorRegistry};
