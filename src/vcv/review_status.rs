//! Ranked review status of a classification
//!
//! Variants are declared from lowest to highest confidence; the derived
//! `Ord` is the ranking.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Review-confidence tier, ordered low to high
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    /// No assertion provided
    #[default]
    NoAssertion,
    /// No assertion criteria provided
    NoCriteria,
    /// Criteria provided, single submitter
    SingleSubmitter,
    /// Criteria provided, conflicting interpretations
    ConflictingInterpretations,
    /// Criteria provided, multiple submitters
    MultipleSubmitters,
    /// Criteria provided, multiple submitters, no conflicts
    MultipleSubmittersNoConflict,
    /// Reviewed by expert panel
    ExpertPanel,
    /// Practice guideline
    PracticeGuideline,
}

impl ReviewStatus {
    /// Every status, lowest rank first
    pub const ALL: [ReviewStatus; 8] = [
        ReviewStatus::NoAssertion,
        ReviewStatus::NoCriteria,
        ReviewStatus::SingleSubmitter,
        ReviewStatus::ConflictingInterpretations,
        ReviewStatus::MultipleSubmitters,
        ReviewStatus::MultipleSubmittersNoConflict,
        ReviewStatus::ExpertPanel,
        ReviewStatus::PracticeGuideline,
    ];

    /// Numeric rank, 0 for `NoAssertion`
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Snake-case name used in output
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoAssertion => "no_assertion",
            Self::NoCriteria => "no_criteria",
            Self::SingleSubmitter => "single_submitter",
            Self::ConflictingInterpretations => "conflicting_interpretations",
            Self::MultipleSubmitters => "multiple_submitters",
            Self::MultipleSubmittersNoConflict => "multiple_submitters_no_conflict",
            Self::ExpertPanel => "expert_panel",
            Self::PracticeGuideline => "practice_guideline",
        }
    }

    /// The higher-ranked of two statuses
    pub fn higher(self, other: ReviewStatus) -> ReviewStatus {
        self.max(other)
    }

    /// Highest-ranked status in `statuses`; `NoAssertion` when empty
    pub fn highest<I>(statuses: I) -> ReviewStatus
    where
        I: IntoIterator<Item = ReviewStatus>,
    {
        statuses
            .into_iter()
            .fold(ReviewStatus::NoAssertion, ReviewStatus::higher)
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
