//! # vcv-digest - Streaming ClinVar VCV Classification
//!
//! `vcv_digest` reads ClinVar variation archive (VCV) release XML and reduces
//! every archive record to a compact item: accession, version, last-updated
//! date, one aggregate review status and a list of normalized
//! clinical-significance terms.
//!
//! ## Key Features
//!
//! - **Streaming**: Releases are tens of gigabytes; records are materialized
//!   one at a time with a quick-xml pull parser, and `.xml.gz` input is
//!   decompressed on the fly.
//!
//! - **All Record Shapes**: Current-schema `ClassifiedRecord`, legacy
//!   `InterpretedRecord` and transitional `IncludedRecord` records resolve to
//!   the same item type.
//!
//! - **Multi-Kind Resolution**: Germline, oncogenicity and somatic
//!   classifications on one record are merged; the most authoritative review
//!   status wins.
//!
//! - **Controlled Vocabulary**: Review statuses and significance terms are
//!   validated against a [`Vocabulary`](vcv::Vocabulary) table that can be
//!   replaced from TOML.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vcv_digest::vcv::{VcvClassifier, VcvItems, VcvStreamer, Vocabulary};
//!
//! let vocabulary = Vocabulary::builtin();
//! let classifier = VcvClassifier::new(&vocabulary);
//! let streamer = VcvStreamer::open("ClinVarVCVRelease_2024-03.xml.gz")?;
//!
//! for item in VcvItems::new(streamer, &classifier) {
//!     let item = item?;
//!     println!("{} {}", item.accession(), item.review_status());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Converting to JSON Lines
//!
//! ```rust,no_run
//! use vcv_digest::vcv::{VcvConverter, Vocabulary};
//!
//! let vocabulary = Vocabulary::builtin();
//! let stats = VcvConverter::new(&vocabulary).convert("release.xml", "release.jsonl")?;
//! println!("{}", stats);
//! # Ok::<(), vcv_digest::vcv::ConversionError>(())
//! ```
//!
//! Each output line is one item:
//!
//! ```text
//! {"accession":"VCV000000002","version":"3","date":1706659200000,"review_status":"single_submitter","significance":["likely_pathogenic"]}
//! ```
//!
//! ## Architecture
//!
//! Everything lives under [`vcv`]:
//!
//! - [`vcv::streamer`]: pull parser yielding one [`vcv::Element`] tree per record
//! - [`vcv::classifier`]: dispatch, resolution and validation of one record
//! - [`vcv::vocabulary`]: review-status table and significance term set
//! - [`vcv::converter`]: lazy item sequence and JSON Lines conversion

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod vcv;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::vcv::{
        ClassificationKind, ClassifyError, ConversionConfig, ConversionError, ConversionStats,
        DateParser, Element, IsoDateParser, PhraseMatcher, ReviewStatus, SignificanceMatcher,
        StreamError, VcvClassifier, VcvConverter, VcvItem, VcvItems, VcvStreamer, Vocabulary,
    };
}
