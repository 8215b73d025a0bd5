//! # VCV Release Module
//!
//! This module provides streaming classification of ClinVar variation archive
//! (VCV) releases: large XML documents holding one `VariationArchive` record
//! per variant.
//!
//! ## Design Goals
//!
//! - **Streaming**: One record subtree in memory at a time
//! - **Strict**: Unknown review statuses and significance terms are fatal
//! - **Schema-tolerant**: Current, legacy and transitional record shapes
//!
//! ## VCV Structure
//!
//! ```text
//! ClinVarVariationRelease
//! └── VariationArchive* (Accession, Version, DateLastUpdated)
//!     ├── ClassifiedRecord (current schema)
//!     │   └── Classifications
//!     │       ├── GermlineClassification
//!     │       ├── OncogenicityClassification
//!     │       ├── SomaticClinicalImpact
//!     │       └── NoClassification
//!     │           ├── ReviewStatus
//!     │           └── Description
//!     ├── InterpretedRecord (legacy schema)
//!     │   ├── ReviewStatus
//!     │   └── Interpretations
//!     │       └── Interpretation* (Type)
//!     │           ├── Description
//!     │           └── Explanation
//!     └── IncludedRecord (either of the above)
//! ```

pub mod classifier;
pub mod converter;
pub mod date;
pub mod element;
pub mod matcher;
pub mod models;
pub mod review_status;
pub mod streamer;
pub mod tags;
pub mod vocabulary;

pub use classifier::{ClassifyError, VcvClassifier};
pub use converter::{ConversionConfig, ConversionError, ConversionStats, VcvConverter, VcvItems};
pub use date::{DateError, DateParser, IsoDateParser};
pub use element::Element;
pub use matcher::{PhraseMatcher, SignificanceMatcher};
pub use models::{ClassificationEntry, ClassificationKind, RawRecord, VariantRecord, VcvItem};
pub use review_status::ReviewStatus;
pub use streamer::{RecordIterator, StreamError, VcvStreamer};
pub use vocabulary::{Vocabulary, VocabularyError};
