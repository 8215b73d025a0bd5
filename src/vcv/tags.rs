//! Element and attribute names of the ClinVar VCV release schema

/// Top-level archive record
pub const VARIATION_ARCHIVE: &str = "VariationArchive";

/// Record accession attribute (e.g. "VCV000000002")
pub const ACCESSION: &str = "Accession";

/// Record version attribute
pub const VERSION: &str = "Version";

/// Record last-updated date attribute
pub const DATE_LAST_UPDATED: &str = "DateLastUpdated";

// =========================================================================
// Record variants
// =========================================================================

/// Current-schema record
pub const CLASSIFIED_RECORD: &str = "ClassifiedRecord";

/// Legacy interpreted record
pub const INTERPRETED_RECORD: &str = "InterpretedRecord";

/// Included record (legacy or VCV 2.5 transitional shape)
pub const INCLUDED_RECORD: &str = "IncludedRecord";

// =========================================================================
// Classifications
// =========================================================================

/// Container of typed classifications
pub const CLASSIFICATIONS: &str = "Classifications";

/// Germline classification entry
pub const GERMLINE_CLASSIFICATION: &str = "GermlineClassification";

/// Oncogenicity classification entry
pub const ONCOGENICITY_CLASSIFICATION: &str = "OncogenicityClassification";

/// Somatic clinical impact entry
pub const SOMATIC_CLINICAL_IMPACT: &str = "SomaticClinicalImpact";

/// Evidence-only entry without a classification type
pub const NO_CLASSIFICATION: &str = "NoClassification";

// =========================================================================
// Legacy interpretations
// =========================================================================

/// Container of legacy interpretations
pub const INTERPRETATIONS: &str = "Interpretations";

/// Interpretation type attribute
pub const TYPE: &str = "Type";

/// The only interpretation type that carries clinical significance
pub const CLINICAL_SIGNIFICANCE: &str = "Clinical significance";

// =========================================================================
// Shared leaf elements
// =========================================================================

/// Review status text element
pub const REVIEW_STATUS: &str = "ReviewStatus";

/// Description text element
pub const DESCRIPTION: &str = "Description";

/// Explanation text element
pub const EXPLANATION: &str = "Explanation";
