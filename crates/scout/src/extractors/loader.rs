// ABOUTME: Loads selector registries: the embedded builtin one and JSON overrides from disk.
// ABOUTME: The builtin registry is parsed once per process and shared read-only.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;

use crate::error::RegistryError;
use crate::extractors::registry::SelectorRegistry;

/// Embedded JSON holding the builtin profile selectors.
const BUILTIN_SELECTORS_JSON: &str = include_str!("../../data/profile_selectors.json");

static BUILTIN_REGISTRY: Lazy<SelectorRegistry> = Lazy::new(|| {
    parse_registry(BUILTIN_SELECTORS_JSON).expect("failed to parse builtin selector registry")
});

/// Returns the builtin registry.
///
/// # Panics
///
/// Panics on first use if the embedded JSON is malformed.
pub fn builtin_registry() -> &'static SelectorRegistry {
    &BUILTIN_REGISTRY
}

/// Parses a registry from a JSON string.
pub fn parse_registry(json: &str) -> Result<SelectorRegistry, RegistryError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses a registry from a JSON file.
pub fn load_registry_file(path: impl AsRef<Path>) -> Result<SelectorRegistry, RegistryError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| RegistryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_registry(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_parses() {
        let registry = builtin_registry();
        assert_eq!(registry.name.strategies.len(), 4);
        assert_eq!(registry.headline.strategies.len(), 3);
        assert_eq!(registry.about.strategies.len(), 3);
        assert_eq!(registry.experience.sections.strategies.len(), 3);
        assert_eq!(registry.experience.roles.strategies.len(), 4);
    }

    #[test]
    fn builtin_registry_keeps_declared_order() {
        let registry = builtin_registry();
        assert_eq!(registry.headline.strategies[0], ".text-body-medium.break-words");
        assert_eq!(registry.name.strategies[3], "[data-field='name']");
    }

    #[test]
    fn builtin_registry_keywords() {
        let registry = builtin_registry();
        assert!(!registry.name.has_keywords());
        assert_eq!(registry.headline.keywords, vec!["profession", "headline", "title"]);
        assert_eq!(registry.about.keywords, vec!["about", "summary", "bio"]);
        assert_eq!(
            registry.experience.sections.keywords,
            vec!["experience", "work", "career", "employment"]
        );
        assert!(!registry.experience.roles.has_keywords());
    }

    #[test]
    fn builtin_registry_has_no_invalid_strategies() {
        assert!(builtin_registry().invalid_strategies().is_empty());
    }

    #[test]
    fn load_registry_file_reports_missing_file() {
        let err = load_registry_file("/nonexistent/selectors.json").unwrap_err();
        assert!(matches!(err, RegistryError::Io { .. }));
    }

    #[test]
    fn parse_registry_reports_bad_json() {
        let err = parse_registry("{ not json").unwrap_err();
        assert!(matches!(err, RegistryError::Json(_)));
    }
}
