// ABOUTME: Selector registry data model: per-field ordered CSS strategies plus fallback keywords.
// ABOUTME: Strategies are listed from most markup-specific to most generic and are walked in that order.

//! Selector registry definitions.
//!
//! The profile site reshuffles its markup across UI experiments, so no single
//! selector is trusted. Each logical field carries an ordered strategy list
//! and the extractors walk it deterministically: first match wins, no scoring.

use serde::{Deserialize, Serialize};

use crate::dom::compile;
use crate::error::SelectorError;

/// Strategies and fallback keywords for one logical output field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FieldSpec {
    /// Logical field name, used in diagnostics
    pub field: String,
    /// CSS selectors to try in order
    #[serde(default)]
    pub strategies: Vec<String>,
    /// Heading keywords for the heuristic fallback; empty disables it
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl FieldSpec {
    pub fn new<I, S>(field: impl Into<String>, strategies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            field: field.into(),
            strategies: strategies.into_iter().map(Into::into).collect(),
            keywords: Vec::new(),
        }
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if the heuristic fallback applies to this field.
    pub fn has_keywords(&self) -> bool {
        !self.keywords.is_empty()
    }
}

/// Two-level strategy set for the experience list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ExperienceSpec {
    /// Container strategies; keywords drive the heading fallback
    pub sections: FieldSpec,
    /// Per-container role text strategies
    pub roles: FieldSpec,
}

/// All field specs used for one profile extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SelectorRegistry {
    pub name: FieldSpec,
    pub headline: FieldSpec,
    pub about: FieldSpec,
    pub experience: ExperienceSpec,
}

impl SelectorRegistry {
    /// Every field spec in the registry.
    pub fn fields(&self) -> [&FieldSpec; 5] {
        [
            &self.name,
            &self.headline,
            &self.about,
            &self.experience.sections,
            &self.experience.roles,
        ]
    }

    /// Compiles every strategy and returns the ones that fail.
    ///
    /// Invalid strategies are tolerated at extraction time; this is for
    /// reporting them up front when a registry is loaded from disk.
    pub fn invalid_strategies(&self) -> Vec<SelectorError> {
        self.fields()
            .iter()
            .flat_map(|spec| spec.strategies.iter())
            .filter_map(|query| compile(query).err())
            .collect()
    }
}
