// ABOUTME: ProfileRecord, the extraction output, plus the placeholder strings for missing fields.
// ABOUTME: Every field of a record is non-empty so consumers can render it without checks.

use serde::{Deserialize, Serialize};

use crate::error::ExtractError;
use crate::extractors::MAX_EXPERIENCES;

pub const NO_NAME: &str = "No name found";
pub const NO_HEADLINE: &str = "No headline found";
pub const NO_ABOUT: &str = "No about section found";
pub const NO_EXPERIENCE: &str = "No experience found";

/// Extracted profile fields with placeholders substituted for anything missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub name: String,
    pub headline: String,
    pub about: String,
    pub experience: Vec<String>,
    pub url: String,
}

/// Result of one extraction request.
pub type ExtractionOutcome = Result<ProfileRecord, ExtractError>;

/// Raw extractor output; empty strings and an empty list mean "not found".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawProfile {
    pub name: String,
    pub headline: String,
    pub about: String,
    pub experience: Vec<String>,
}

impl RawProfile {
    /// Builds the record, substituting placeholders and capping experience.
    pub fn into_record(self, url: impl Into<String>) -> ProfileRecord {
        let mut experience: Vec<String> = self
            .experience
            .into_iter()
            .filter(|role| !role.trim().is_empty())
            .take(MAX_EXPERIENCES)
            .collect();
        if experience.is_empty() {
            experience.push(NO_EXPERIENCE.to_string());
        }

        ProfileRecord {
            name: or_placeholder(self.name, NO_NAME),
            headline: or_placeholder(self.headline, NO_HEADLINE),
            about: or_placeholder(self.about, NO_ABOUT),
            experience,
            url: url.into(),
        }
    }
}

fn or_placeholder(value: String, placeholder: &str) -> String {
    if value.trim().is_empty() {
        placeholder.to_string()
    } else {
        value
    }
}

impl ProfileRecord {
    pub fn has_name(&self) -> bool {
        self.name != NO_NAME
    }

    pub fn has_headline(&self) -> bool {
        self.headline != NO_HEADLINE
    }

    pub fn has_about(&self) -> bool {
        self.about != NO_ABOUT
    }

    pub fn has_experience(&self) -> bool {
        !(self.experience.len() == 1 && self.experience[0] == NO_EXPERIENCE)
    }

    /// Names of the fields that fell back to placeholders.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.has_name() {
            missing.push("name");
        }
        if !self.has_headline() {
            missing.push("headline");
        }
        if !self.has_about() {
            missing.push("about");
        }
        if !self.has_experience() {
            missing.push("experience");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_raw_profile_gets_placeholders() {
        let record = RawProfile::default().into_record("https://site.example/in/jdoe");
        assert_eq!(
            record,
            ProfileRecord {
                name: NO_NAME.to_string(),
                headline: NO_HEADLINE.to_string(),
                about: NO_ABOUT.to_string(),
                experience: vec![NO_EXPERIENCE.to_string()],
                url: "https://site.example/in/jdoe".to_string(),
            }
        );
        assert_eq!(
            record.missing_fields(),
            vec!["name", "headline", "about", "experience"]
        );
    }

    #[test]
    fn test_found_fields_are_kept() {
        let raw = RawProfile {
            name: "Jane Doe".to_string(),
            headline: "Engineer".to_string(),
            about: "   ".to_string(),
            experience: vec!["A".into(), "B".into(), "C".into(), "D".into()],
        };
        let record = raw.into_record("u");
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.headline, "Engineer");
        assert_eq!(record.about, NO_ABOUT);
        assert_eq!(record.experience, vec!["A", "B", "C"]);
        assert_eq!(record.missing_fields(), vec!["about"]);
    }

    #[test]
    fn test_serializes_with_expected_field_names() {
        let record = RawProfile::default().into_record("u");
        let json = serde_json::to_value(&record).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        for key in ["name", "headline", "about", "experience", "url"] {
            assert!(keys.contains(&key), "missing key {}", key);
        }
        assert_eq!(keys.len(), 5);
    }
}
