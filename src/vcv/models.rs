//! Data models for classified archive records

use serde::Serialize;
use std::fmt;

use super::element::Element;
use super::review_status::ReviewStatus;
use super::tags;

/// Interpretive dimension of a classification entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationKind {
    /// Germline classification
    Germline,
    /// Oncogenicity classification
    Oncogenicity,
    /// Somatic clinical impact
    Somatic,
    /// Evidence-only entry without a classification type
    NoClassification,
}

impl ClassificationKind {
    /// The typed kinds, in resolution order
    pub const TYPED: [ClassificationKind; 3] = [
        ClassificationKind::Germline,
        ClassificationKind::Oncogenicity,
        ClassificationKind::Somatic,
    ];

    /// Element name inside `Classifications`
    pub fn tag(self) -> &'static str {
        match self {
            Self::Germline => tags::GERMLINE_CLASSIFICATION,
            Self::Oncogenicity => tags::ONCOGENICITY_CLASSIFICATION,
            Self::Somatic => tags::SOMATIC_CLINICAL_IMPACT,
            Self::NoClassification => tags::NO_CLASSIFICATION,
        }
    }

    /// Lowercase display name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Germline => "germline",
            Self::Oncogenicity => "oncogenicity",
            Self::Somatic => "somatic",
            Self::NoClassification => "no classification",
        }
    }
}

impl fmt::Display for ClassificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classification of a record, borrowed from its element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationEntry<'a> {
    /// Which dimension this entry classifies
    pub kind: ClassificationKind,
    /// Raw review-status text
    pub review_status: Option<&'a str>,
    /// Free-text description
    pub description: Option<&'a str>,
}

impl<'a> ClassificationEntry<'a> {
    /// Read an entry from its element
    pub fn from_element(kind: ClassificationKind, element: &'a Element) -> Self {
        Self {
            kind,
            review_status: element.child_text(tags::REVIEW_STATUS),
            description: element.child_text(tags::DESCRIPTION),
        }
    }
}

/// The single populated record shape of an archive record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantRecord<'a> {
    /// `ClassifiedRecord`
    Classified(&'a Element),
    /// `InterpretedRecord`
    Interpreted(&'a Element),
    /// `IncludedRecord`
    Included(&'a Element),
}

impl<'a> VariantRecord<'a> {
    /// Element name of this shape
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Classified(_) => tags::CLASSIFIED_RECORD,
            Self::Interpreted(_) => tags::INTERPRETED_RECORD,
            Self::Included(_) => tags::INCLUDED_RECORD,
        }
    }

    /// The underlying element
    pub fn element(&self) -> &'a Element {
        match self {
            Self::Classified(e) | Self::Interpreted(e) | Self::Included(e) => e,
        }
    }
}

/// Identification fields plus the dispatched record shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord<'a> {
    /// Accession, e.g. "VCV000000002"
    pub accession: String,
    /// Record version
    pub version: String,
    /// Last-updated date as returned by the date parser
    pub date: i64,
    /// The populated record shape
    pub variant: VariantRecord<'a>,
}

/// Normalized output item for one archive record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VcvItem {
    accession: String,
    version: String,
    date: i64,
    review_status: ReviewStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    significance: Option<Vec<String>>,
}

impl VcvItem {
    /// Build an item; items are never modified afterwards
    pub fn new(
        accession: String,
        version: String,
        date: i64,
        review_status: ReviewStatus,
        significance: Option<Vec<String>>,
    ) -> Self {
        Self {
            accession,
            version,
            date,
            review_status,
            significance,
        }
    }

    /// Record accession
    pub fn accession(&self) -> &str {
        &self.accession
    }

    /// Record version
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Last-updated date
    pub fn date(&self) -> i64 {
        self.date
    }

    /// Resolved review status
    pub fn review_status(&self) -> ReviewStatus {
        self.review_status
    }

    /// Significance tokens; `None` when no classification offered any
    pub fn significance(&self) -> Option<&[String]> {
        self.significance.as_deref()
    }
}
