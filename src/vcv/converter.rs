//! VCV release to JSON Lines converter
//!
//! [`VcvItems`] chains the streamer and the classifier into a lazy sequence
//! of items; [`VcvConverter`] drains it into a JSON Lines file and reports
//! [`ConversionStats`].

use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use log::info;

use super::classifier::{ClassifyError, VcvClassifier};
use super::date::DateParser;
use super::matcher::SignificanceMatcher;
use super::models::VcvItem;
use super::review_status::ReviewStatus;
use super::streamer::{RecordIterator, StreamError, VcvStreamer};
use super::vocabulary::Vocabulary;

/// Errors that can occur during conversion
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// Error reading the release document
    #[error("VCV parsing error: {0}")]
    StreamError(#[from] StreamError),

    /// A record violated the schema or the vocabulary
    #[error("Classification error: {0}")]
    ClassifyError(#[from] ClassifyError),

    /// I/O error during file operations
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error serializing an item
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Lazy sequence of classified items.
///
/// Empty records are skipped. The sequence ends after the first error.
pub struct VcvItems<'c, 'v, R: BufRead, D, M> {
    records: RecordIterator<R>,
    classifier: &'c VcvClassifier<'v, D, M>,
    skipped: usize,
    failed: bool,
}

impl<'c, 'v, R, D, M> VcvItems<'c, 'v, R, D, M>
where
    R: BufRead,
    D: DateParser,
    M: SignificanceMatcher,
{
    /// Classify the records of `streamer` as they are pulled
    pub fn new(streamer: VcvStreamer<R>, classifier: &'c VcvClassifier<'v, D, M>) -> Self {
        Self {
            records: streamer.records(),
            classifier,
            skipped: 0,
            failed: false,
        }
    }

    /// Number of record elements read so far
    pub fn records_read(&self) -> usize {
        self.records.records_read()
    }

    /// Number of empty records skipped so far
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<R, D, M> Iterator for VcvItems<'_, '_, R, D, M>
where
    R: BufRead,
    D: DateParser,
    M: SignificanceMatcher,
{
    type Item = Result<VcvItem, ConversionError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let record = match self.records.next()? {
                Ok(record) => record,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e.into()));
                }
            };
            match self.classifier.classify(&record) {
                Ok(Some(item)) => return Some(Ok(item)),
                Ok(None) => self.skipped += 1,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e.into()));
                }
            }
        }
    }
}

/// Configuration for a conversion run
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Log progress every this many written items (0 disables progress logging)
    pub progress_interval: usize,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            progress_interval: 100_000,
        }
    }
}

/// Statistics from a conversion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Record elements read from the input
    pub records_read: usize,
    /// Items written to the output
    pub items_written: usize,
    /// Empty records skipped
    pub empty_records: usize,
    /// Written items per resolved review status
    pub review_status_counts: BTreeMap<ReviewStatus, usize>,
    /// Written items without any significance term
    pub items_without_significance: usize,
    /// Input file size in bytes (0 for in-memory streams)
    pub source_file_size: u64,
}

impl ConversionStats {
    fn record(&mut self, item: &VcvItem) {
        self.items_written += 1;
        *self
            .review_status_counts
            .entry(item.review_status())
            .or_default() += 1;
        if item.significance().is_none_or(<[String]>::is_empty) {
            self.items_without_significance += 1;
        }
    }

    /// Format the summary with colors (requires console feature)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            use console::style;

            let mut output = String::new();
            output.push_str(&format!("{}\n", style("VCV Conversion Summary").bold().cyan()));
            output.push_str(&format!("{}\n", style("======================").cyan()));
            output.push_str(&format!(
                "{}: {}\n",
                style("Records read").bold(),
                self.records_read
            ));
            output.push_str(&format!(
                "{}: {}\n",
                style("Items written").bold(),
                style(self.items_written).green()
            ));
            output.push_str(&format!(
                "{}: {}\n",
                style("Empty records skipped").bold(),
                style(self.empty_records).yellow()
            ));
            output.push_str(&format!(
                "{}: {}\n",
                style("Items without significance").bold(),
                self.items_without_significance
            ));
            output.push_str(&format!("{}\n", style("Review status").bold()));
            for (status, count) in &self.review_status_counts {
                output.push_str(&format!("  {:<32} {}\n", status.as_str(), count));
            }
            output
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            format!("{}", self)
        }
    }
}

impl fmt::Display for ConversionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "VCV Conversion Summary")?;
        writeln!(f, "======================")?;
        writeln!(f, "Records read: {}", self.records_read)?;
        writeln!(f, "Items written: {}", self.items_written)?;
        writeln!(f, "Empty records skipped: {}", self.empty_records)?;
        writeln!(
            f,
            "Items without significance: {}",
            self.items_without_significance
        )?;
        writeln!(f, "Review status")?;
        for (status, count) in &self.review_status_counts {
            writeln!(f, "  {:<32} {}", status.as_str(), count)?;
        }
        Ok(())
    }
}

/// Converts VCV releases to JSON Lines
pub struct VcvConverter<'v> {
    vocabulary: &'v Vocabulary,
    config: ConversionConfig,
}

impl<'v> VcvConverter<'v> {
    /// Create a converter with default configuration
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Self::with_config(vocabulary, ConversionConfig::default())
    }

    /// Create a converter with custom configuration
    pub fn with_config(vocabulary: &'v Vocabulary, config: ConversionConfig) -> Self {
        Self { vocabulary, config }
    }

    /// Convert a release file (plain or `.gz`) to a JSON Lines file
    pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<ConversionStats, ConversionError> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!("Converting {} to {}", input_path.display(), output_path.display());

        let source_file_size = std::fs::metadata(input_path)?.len();
        let streamer = VcvStreamer::open(input_path)?;
        let output = BufWriter::new(File::create(output_path)?);

        let mut stats = self.convert_stream(streamer, output)?;
        stats.source_file_size = source_file_size;
        Ok(stats)
    }

    /// Classify every record of `streamer` and write one JSON object per line
    pub fn convert_stream<R: BufRead, W: Write>(
        &self,
        streamer: VcvStreamer<R>,
        mut output: W,
    ) -> Result<ConversionStats, ConversionError> {
        let classifier = VcvClassifier::new(self.vocabulary);
        let mut items = VcvItems::new(streamer, &classifier);
        let mut stats = ConversionStats::default();

        for item in items.by_ref() {
            let item = item?;
            serde_json::to_writer(&mut output, &item)?;
            output.write_all(b"\n")?;
            stats.record(&item);

            if self.config.progress_interval > 0
                && stats.items_written % self.config.progress_interval == 0
            {
                info!("Written {} items", stats.items_written);
            }
        }
        output.flush()?;

        stats.records_read = items.records_read();
        stats.empty_records = items.skipped();

        info!("Conversion complete!");
        info!("  Records read: {}", stats.records_read);
        info!("  Items written: {}", stats.items_written);
        info!("  Empty records skipped: {}", stats.empty_records);

        Ok(stats)
    }
}
