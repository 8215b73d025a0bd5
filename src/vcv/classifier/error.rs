use crate::vcv::date::DateError;
use crate::vcv::models::ClassificationKind;

/// Schema and vocabulary violations found while classifying a record.
///
/// Every variant is fatal for the stream being processed.
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    /// Zero or more than one record shape is populated
    #[error("malformed record {accession}: ambiguous variant ({populated} populated record types)")]
    AmbiguousVariant {
        /// Record accession
        accession: String,
        /// Number of populated record shapes
        populated: usize,
    },

    /// A required identification attribute is missing
    #[error("record {accession} is missing required attribute {attribute}")]
    MissingAttribute {
        /// Record accession, or "<unknown>" when the accession itself is missing
        accession: String,
        /// Attribute name
        attribute: &'static str,
    },

    /// The `DateLastUpdated` value could not be parsed
    #[error("record {accession} has an invalid last-updated date: {source}")]
    InvalidDate {
        /// Record accession
        accession: String,
        /// Date parser error
        #[source]
        source: DateError,
    },

    /// `Classifications` is absent or empty
    #[error("missing classifications in {accession}.{version}")]
    MissingClassifications {
        /// Record accession
        accession: String,
        /// Record version
        version: String,
    },

    /// `Classifications` holds no recognized classification kind
    #[error("no recognized classification type in {accession}.{version}")]
    UnrecognizedClassificationType {
        /// Record accession
        accession: String,
        /// Record version
        version: String,
    },

    /// A classification entry has no review status
    #[error("no review status provided for {kind} classification in {accession}.{version}")]
    MissingClassificationReviewStatus {
        /// Record accession
        accession: String,
        /// Record version
        version: String,
        /// Kind of the offending entry
        kind: ClassificationKind,
    },

    /// A legacy record has no `ReviewStatus`
    #[error("no review status provided in {accession}.{version}")]
    MissingReviewStatus {
        /// Record accession
        accession: String,
        /// Record version
        version: String,
    },

    /// A raw review status is not in the status table
    #[error("unmapped review status '{status}' in {accession}.{version}")]
    UnmappedReviewStatus {
        /// Record accession
        accession: String,
        /// Record version
        version: String,
        /// Raw status text
        status: String,
    },

    /// A significance term is outside the controlled vocabulary
    #[error("invalid clinical significance found: {term} (in {accession}.{version})")]
    InvalidSignificance {
        /// Record accession
        accession: String,
        /// Record version
        version: String,
        /// Offending term
        term: String,
    },
}
