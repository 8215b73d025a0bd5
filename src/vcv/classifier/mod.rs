//! Record classification
//!
//! Turns one `VariationArchive` element into a [`VcvItem`]. The work splits
//! into three steps:
//!
//! 1. **Dispatch**: read accession, version and date, then find the single
//!    populated record shape (`ClassifiedRecord`, `InterpretedRecord` or
//!    `IncludedRecord`). Shape elements without children count as absent.
//! 2. **Resolution**: current-schema `Classifications` are resolved per
//!    classification kind ([`ClassificationKind`]); legacy `Interpretations`
//!    are scanned for clinical-significance entries. `IncludedRecord` uses
//!    whichever of the two it carries.
//! 3. **Validation**: review statuses go through the vocabulary's name table
//!    and every significance token must be in its controlled set.
//!
//! Any violation is returned as a [`ClassifyError`]; records without children
//! are skipped with `Ok(None)`.
//!
//! [`ClassificationKind`]: crate::vcv::models::ClassificationKind

use log::{debug, trace};

use super::date::{DateParser, IsoDateParser};
use super::element::Element;
use super::matcher::{PhraseMatcher, SignificanceMatcher};
use super::models::{RawRecord, VariantRecord, VcvItem};
use super::review_status::ReviewStatus;
use super::tags;
use super::vocabulary::Vocabulary;

pub use error::ClassifyError;

mod classified;
mod error;
mod legacy;


/// Review status and significance resolved for one record
#[derive(Debug, Clone, PartialEq, Eq)]
struct Resolution {
    review_status: ReviewStatus,
    significance: Option<Vec<String>>,
}

/// Record identity carried into error messages
#[derive(Debug, Clone, Copy)]
struct RecordId<'a> {
    accession: &'a str,
    version: &'a str,
}

impl RecordId<'_> {
    fn missing_classifications(&self) -> ClassifyError {
        ClassifyError::MissingClassifications {
            accession: self.accession.to_string(),
            version: self.version.to_string(),
        }
    }

    fn unrecognized_type(&self) -> ClassifyError {
        ClassifyError::UnrecognizedClassificationType {
            accession: self.accession.to_string(),
            version: self.version.to_string(),
        }
    }

    fn missing_review_status(&self) -> ClassifyError {
        ClassifyError::MissingReviewStatus {
            accession: self.accession.to_string(),
            version: self.version.to_string(),
        }
    }
}

/// Classifies archive records against a borrowed [`Vocabulary`]
pub struct VcvClassifier<'v, D = IsoDateParser, M = PhraseMatcher<'v>> {
    vocabulary: &'v Vocabulary,
    dates: D,
    matcher: M,
}

impl<'v> VcvClassifier<'v> {
    /// Classifier with the ISO date parser and the vocabulary's phrase matcher
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Self::with_parts(vocabulary, IsoDateParser, PhraseMatcher::new(vocabulary))
    }
}

impl<'v, D: DateParser, M: SignificanceMatcher> VcvClassifier<'v, D, M> {
    /// Classifier with a custom date parser and matcher
    pub fn with_parts(vocabulary: &'v Vocabulary, dates: D, matcher: M) -> Self {
        Self {
            vocabulary,
            dates,
            matcher,
        }
    }

    /// The vocabulary lookups are validated against
    pub fn vocabulary(&self) -> &'v Vocabulary {
        self.vocabulary
    }

    /// Classify one archive record.
    ///
    /// Returns `Ok(None)` for a record element without children.
    pub fn classify(&self, record: &Element) -> Result<Option<VcvItem>, ClassifyError> {
        if !record.has_children() {
            debug!(
                "Skipping empty record {}",
                record.attribute(tags::ACCESSION).unwrap_or("<unknown>")
            );
            return Ok(None);
        }

        let raw = self.raw_record(record)?;
        let id = RecordId {
            accession: &raw.accession,
            version: &raw.version,
        };

        let resolution = match raw.variant {
            VariantRecord::Classified(variant) => self.resolve_classifications(id, variant)?,
            VariantRecord::Interpreted(variant) => self.resolve_interpretations(id, variant)?,
            VariantRecord::Included(variant) => {
                let transitional = variant
                    .child(tags::CLASSIFICATIONS)
                    .is_some_and(|c| !c.is_empty());
                if transitional {
                    self.resolve_classifications(id, variant)?
                } else {
                    self.resolve_interpretations(id, variant)?
                }
            }
        };

        trace!(
            "{}.{} ({}): {} {:?}",
            raw.accession,
            raw.version,
            raw.variant.tag(),
            resolution.review_status,
            resolution.significance
        );

        Ok(Some(VcvItem::new(
            raw.accession,
            raw.version,
            raw.date,
            resolution.review_status,
            resolution.significance,
        )))
    }

    /// Read identification fields and find the single populated record shape
    pub fn raw_record<'e>(&self, record: &'e Element) -> Result<RawRecord<'e>, ClassifyError> {
        let accession =
            record
                .attribute(tags::ACCESSION)
                .ok_or_else(|| ClassifyError::MissingAttribute {
                    accession: "<unknown>".to_string(),
                    attribute: tags::ACCESSION,
                })?;
        let version = required_attribute(record, accession, tags::VERSION)?;
        let raw_date = required_attribute(record, accession, tags::DATE_LAST_UPDATED)?;
        let date = self
            .dates
            .parse_date(raw_date)
            .map_err(|source| ClassifyError::InvalidDate {
                accession: accession.to_string(),
                source,
            })?;

        let populated: Vec<VariantRecord<'e>> = [
            populated_child(record, tags::CLASSIFIED_RECORD).map(VariantRecord::Classified),
            populated_child(record, tags::INTERPRETED_RECORD).map(VariantRecord::Interpreted),
            populated_child(record, tags::INCLUDED_RECORD).map(VariantRecord::Included),
        ]
        .into_iter()
        .flatten()
        .collect();

        match populated.as_slice() {
            [variant] => Ok(RawRecord {
                accession: accession.to_string(),
                version: version.to_string(),
                date,
                variant: *variant,
            }),
            _ => Err(ClassifyError::AmbiguousVariant {
                accession: accession.to_string(),
                populated: populated.len(),
            }),
        }
    }

    fn lookup_review_status(&self, id: RecordId<'_>, raw: &str) -> Result<ReviewStatus, ClassifyError> {
        self.vocabulary
            .review_status(raw)
            .ok_or_else(|| ClassifyError::UnmappedReviewStatus {
                accession: id.accession.to_string(),
                version: id.version.to_string(),
                status: raw.to_string(),
            })
    }

    /// Run the matcher and reject any token outside the controlled set
    fn matched_terms(
        &self,
        id: RecordId<'_>,
        description: Option<&str>,
        explanation: Option<&str>,
    ) -> Result<Vec<String>, ClassifyError> {
        let terms = self.matcher.match_terms(description, explanation);
        if let Some(invalid) = terms
            .iter()
            .find(|t| !self.vocabulary.is_significance_term(t))
        {
            return Err(ClassifyError::InvalidSignificance {
                accession: id.accession.to_string(),
                version: id.version.to_string(),
                term: invalid.clone(),
            });
        }
        Ok(terms)
    }
}

fn required_attribute<'e>(
    record: &'e Element,
    accession: &str,
    attribute: &'static str,
) -> Result<&'e str, ClassifyError> {
    record
        .attribute(attribute)
        .ok_or_else(|| ClassifyError::MissingAttribute {
            accession: accession.to_string(),
            attribute,
        })
}

fn populated_child<'e>(record: &'e Element, name: &str) -> Option<&'e Element> {
    record.child(name).filter(|e| e.has_children())
}
