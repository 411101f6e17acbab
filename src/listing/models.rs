// src/listing/models.rs
use serde::{Deserialize, Serialize};

use crate::utils::error::AppError;

/// One scholarship listing after field extraction.
/// Fields are display strings taken verbatim from the page (whitespace
/// trimmed, nothing else normalized).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScholarshipRecord {
    pub name: String,
    /// Display form, e.g. "June 6, 2024". Parsed on demand when the record
    /// is filtered and sorted; never stored as a date.
    pub deadline: String,
    pub url: String,
}

/// The set of user-supplied keywords, trimmed and case-folded once at
/// construction. Read-only for the rest of the run.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    /// Parses a comma-separated keyword line. Empty segments after trimming
    /// are dropped; an empty resulting set is a configuration error.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let keywords: Vec<String> = input
            .split(',')
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        if keywords.is_empty() {
            return Err(AppError::Config(
                "no usable keywords provided (expected a comma-separated list)".to_string(),
            ));
        }

        Ok(Self { keywords })
    }

    /// True if at least one keyword occurs in `text` as a case-insensitive
    /// substring. Substring containment is intentional: "stem" matches
    /// "biostemistry".
    pub fn matches(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.keywords.iter().any(|k| text.contains(k.as_str()))
    }

    /// Keywords joined for display in logs and the metadata sidecar.
    pub fn join(&self, sep: &str) -> String {
        self.keywords.join(sep)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.keywords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_drops_empty_segments() {
        let set = KeywordSet::parse(" stem ,, art ,  ").unwrap();
        assert_eq!(set.as_slice(), &["stem".to_string(), "art".to_string()]);
    }

    #[test]
    fn parse_case_folds_keywords() {
        let set = KeywordSet::parse("STEM").unwrap();
        assert_eq!(set.as_slice(), &["stem".to_string()]);
    }

    #[test]
    fn empty_input_is_a_config_error() {
        assert!(matches!(KeywordSet::parse(""), Err(AppError::Config(_))));
        assert!(matches!(KeywordSet::parse(" , , "), Err(AppError::Config(_))));
    }

    #[test]
    fn matches_is_case_insensitive_substring_containment() {
        let set = KeywordSet::parse("stem, art").unwrap();
        assert!(set.matches("This STEM scholarship supports undergraduates"));
        // Substring, not whole-word: "stem" inside a longer token still matches.
        assert!(set.matches("A degree in biostemistry"));
        assert!(!set.matches("For business majors only"));
    }
}
