//! Controlled vocabularies for review statuses and clinical significance
//!
//! A [`Vocabulary`] bundles the fixed lookup tables the classifier validates
//! against:
//!
//! - the review-status name table (raw schema string to [`ReviewStatus`])
//! - the closed set of significance tokens
//! - phrase aliases used by the default matcher to turn free text into tokens
//!
//! The built-in tables cover the ClinVar VCV release schema. A replacement can
//! be loaded from TOML once at startup; the classifier only ever borrows it.
//!
//! ```toml
//! significance_terms = ["benign", "pathogenic"]
//!
//! [review_statuses]
//! "criteria provided, single submitter" = "single_submitter"
//!
//! [aliases]
//! "vus" = "uncertain_significance"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use super::review_status::ReviewStatus;

/// Errors that can occur while loading a vocabulary
#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    /// I/O error reading the vocabulary file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The file is not valid vocabulary TOML
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// An alias points at a token outside the significance set
    #[error("alias '{alias}' maps to unknown significance term '{term}'")]
    UnknownAliasTarget {
        /// Alias phrase
        alias: String,
        /// Target token missing from `significance_terms`
        term: String,
    },
}

const BUILTIN_REVIEW_STATUSES: &[(&str, ReviewStatus)] = &[
    ("no assertion provided", ReviewStatus::NoAssertion),
    ("no classification provided", ReviewStatus::NoAssertion),
    ("no classifications from unflagged records", ReviewStatus::NoAssertion),
    ("no interpretation for the single variant", ReviewStatus::NoAssertion),
    ("flagged submission", ReviewStatus::NoAssertion),
    ("no assertion criteria provided", ReviewStatus::NoCriteria),
    ("criteria provided, single submitter", ReviewStatus::SingleSubmitter),
    (
        "criteria provided, conflicting interpretations",
        ReviewStatus::ConflictingInterpretations,
    ),
    (
        "criteria provided, conflicting classifications",
        ReviewStatus::ConflictingInterpretations,
    ),
    ("criteria provided, multiple submitters", ReviewStatus::MultipleSubmitters),
    (
        "criteria provided, multiple submitters, no conflicts",
        ReviewStatus::MultipleSubmittersNoConflict,
    ),
    ("reviewed by expert panel", ReviewStatus::ExpertPanel),
    ("practice guideline", ReviewStatus::PracticeGuideline),
];

const BUILTIN_SIGNIFICANCE_TERMS: &[&str] = &[
    // Germline
    "pathogenic",
    "likely_pathogenic",
    "pathogenic_low_penetrance",
    "likely_pathogenic_low_penetrance",
    "uncertain_significance",
    "likely_benign",
    "benign",
    "conflicting_interpretations",
    "established_risk_allele",
    "likely_risk_allele",
    "uncertain_risk_allele",
    "drug_response",
    "risk_factor",
    "protective",
    "association",
    "association_not_found",
    "affects",
    "confers_sensitivity",
    "other",
    "not_provided",
    // Oncogenicity
    "oncogenic",
    "likely_oncogenic",
    // Somatic clinical impact
    "tier_i_strong",
    "tier_ii_potential",
    "tier_iii_unknown",
    "tier_iv_benign",
];

const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("conflicting interpretations of pathogenicity", "conflicting_interpretations"),
    ("conflicting classifications of pathogenicity", "conflicting_interpretations"),
    ("pathogenic, low penetrance", "pathogenic_low_penetrance"),
    ("likely pathogenic, low penetrance", "likely_pathogenic_low_penetrance"),
    ("tier i - strong", "tier_i_strong"),
    ("tier ii - potential", "tier_ii_potential"),
    ("tier iii - unknown", "tier_iii_unknown"),
    ("tier iv - benign/likely benign", "tier_iv_benign"),
    ("no classification for the single variant", "not_provided"),
    ("no classifications from unflagged records", "not_provided"),
    ("vus", "uncertain_significance"),
];

/// Review-status table, significance term set and matcher aliases
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Controlled set of significance tokens
    significance_terms: BTreeSet<String>,

    /// Raw review-status string to ranked status
    review_statuses: BTreeMap<String, ReviewStatus>,

    /// Lowercase free-text phrase to significance token
    #[serde(default)]
    aliases: BTreeMap<String, String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Vocabulary {
    /// The tables for the ClinVar VCV release schema
    pub fn builtin() -> Self {
        Self {
            significance_terms: BUILTIN_SIGNIFICANCE_TERMS
                .iter()
                .map(|t| t.to_string())
                .collect(),
            review_statuses: BUILTIN_REVIEW_STATUSES
                .iter()
                .map(|(raw, status)| (raw.to_string(), *status))
                .collect(),
            aliases: BUILTIN_ALIASES
                .iter()
                .map(|(phrase, term)| (phrase.to_string(), term.to_string()))
                .collect(),
        }
    }

    /// Load a vocabulary from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, VocabularyError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Parse a vocabulary from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, VocabularyError> {
        let vocabulary: Vocabulary = toml::from_str(content)?;
        vocabulary.check_aliases()?;
        Ok(vocabulary)
    }

    fn check_aliases(&self) -> Result<(), VocabularyError> {
        for (alias, term) in &self.aliases {
            if !self.significance_terms.contains(term) {
                return Err(VocabularyError::UnknownAliasTarget {
                    alias: alias.clone(),
                    term: term.clone(),
                });
            }
        }
        Ok(())
    }

    /// Look up a raw review-status string
    pub fn review_status(&self, raw: &str) -> Option<ReviewStatus> {
        self.review_statuses.get(raw).copied()
    }

    /// Whether `term` belongs to the controlled significance set
    pub fn is_significance_term(&self, term: &str) -> bool {
        self.significance_terms.contains(term)
    }

    /// Token for a lowercase free-text phrase, if one is aliased
    pub fn alias(&self, phrase: &str) -> Option<&str> {
        self.aliases.get(phrase).map(String::as_str)
    }

    /// The controlled significance set
    pub fn significance_terms(&self) -> impl Iterator<Item = &str> {
        self.significance_terms.iter().map(String::as_str)
    }

    /// The review-status name table
    pub fn review_statuses(&self) -> impl Iterator<Item = (&str, ReviewStatus)> {
        self.review_statuses.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_review_statuses() {
        let vocab = Vocabulary::builtin();
        assert_eq!(
            vocab.review_status("criteria provided, single submitter"),
            Some(ReviewStatus::SingleSubmitter)
        );
        assert_eq!(
            vocab.review_status("criteria provided, multiple submitters, no conflicts"),
            Some(ReviewStatus::MultipleSubmittersNoConflict)
        );
        assert_eq!(
            vocab.review_status("no assertion criteria provided"),
            Some(ReviewStatus::NoCriteria)
        );
        assert_eq!(vocab.review_status("Reviewed by expert panel"), None);
        assert_eq!(vocab.review_status("four stars"), None);
    }

    #[test]
    fn test_every_status_is_reachable() {
        let vocab = Vocabulary::builtin();
        for status in ReviewStatus::ALL {
            assert!(
                vocab.review_statuses().any(|(_, s)| s == status),
                "no raw string maps to {}",
                status
            );
        }
    }

    #[test]
    fn test_builtin_aliases_are_valid() {
        let vocab = Vocabulary::builtin();
        assert!(vocab.check_aliases().is_ok());
        assert_eq!(vocab.alias("vus"), Some("uncertain_significance"));
        assert!(vocab.is_significance_term("likely_pathogenic"));
        assert!(!vocab.is_significance_term("likely pathogenic"));
    }

    #[test]
    fn test_toml_round_trip() {
        let vocab = Vocabulary::builtin();
        let text = toml::to_string_pretty(&vocab).unwrap();
        let parsed = Vocabulary::from_toml_str(&text).unwrap();
        assert_eq!(parsed, vocab);
    }

    #[test]
    fn test_partial_toml() {
        let toml = r#"
            significance_terms = ["benign", "pathogenic"]

            [review_statuses]
            "practice guideline" = "practice_guideline"
        "#;

        let vocab = Vocabulary::from_toml_str(toml).unwrap();
        assert_eq!(vocab.significance_terms().count(), 2);
        assert_eq!(
            vocab.review_status("practice guideline"),
            Some(ReviewStatus::PracticeGuideline)
        );
        assert_eq!(vocab.alias("vus"), None);
    }

    #[test]
    fn test_alias_to_unknown_term_rejected() {
        let toml = r#"
            significance_terms = ["benign"]

            [review_statuses]

            [aliases]
            "vus" = "uncertain_significance"
        "#;

        let err = Vocabulary::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, VocabularyError::UnknownAliasTarget { .. }));
    }

    #[test]
    fn test_unknown_status_name_rejected() {
        let toml = r#"
            significance_terms = []

            [review_statuses]
            "practice guideline" = "five_stars"
        "#;

        assert!(matches!(
            Vocabulary::from_toml_str(toml),
            Err(VocabularyError::TomlError(_))
        ));
    }
}
