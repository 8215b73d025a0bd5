//! Streaming VCV release reader using quick-xml
//!
//! The reader walks the top-level sequence of `VariationArchive` elements and
//! materializes one record subtree at a time, so memory use is bounded by the
//! largest single record rather than by the document.
//!
//! quick-xml does not process DTDs or resolve external entities; `DOCTYPE`
//! declarations are skipped like any other prolog event.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

use super::element::Element;
use super::tags;

pub use error::StreamError;
pub use iterators::RecordIterator;

mod error;
mod iterators;
mod tree;


/// Default input buffer size for release parsing (64KB)
pub const DEFAULT_INPUT_BUFFER_SIZE: usize = 64 * 1024;

/// Streaming reader over the archive records of a VCV release
pub struct VcvStreamer<R: BufRead> {
    reader: Reader<R>,
    records_read: usize,
}

impl<R: BufRead> VcvStreamer<R> {
    /// Create a new streamer from a BufRead source
    pub fn new(reader: R) -> Self {
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.config_mut().trim_text(true);

        Self {
            reader: xml_reader,
            records_read: 0,
        }
    }

    /// Number of record elements produced so far, empty ones included
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Iterate over all remaining records
    pub fn records(self) -> RecordIterator<R> {
        RecordIterator {
            streamer: self,
            failed: false,
        }
    }

    /// Read the next archive record from the stream.
    ///
    /// Returns `Ok(None)` once the document is exhausted. Self-closing record
    /// elements are returned as childless elements.
    pub fn next_record(&mut self) -> Result<Option<Element>, StreamError> {
        let mut buf = Vec::new();
        loop {
            match self.reader.read_event_into(&mut buf)? {
                Event::Start(e) if e.name().as_ref() == tags::VARIATION_ARCHIVE.as_bytes() => {
                    let root = tree::element_from_start(&e)?;
                    let record = self.read_subtree(root)?;
                    self.records_read += 1;
                    return Ok(Some(record));
                }
                Event::Empty(e) if e.name().as_ref() == tags::VARIATION_ARCHIVE.as_bytes() => {
                    let record = tree::element_from_start(&e)?;
                    self.records_read += 1;
                    return Ok(Some(record));
                }
                Event::Eof => return Ok(None),
                _ => {}
            }
            buf.clear();
        }
    }
}

impl VcvStreamer<Box<dyn BufRead>> {
    /// Open a release file for streaming with default buffer size (64KB).
    ///
    /// Files ending in `.gz` are decompressed on the fly.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StreamError> {
        Self::open_with_buffer_size(path, DEFAULT_INPUT_BUFFER_SIZE)
    }

    /// Open a release file for streaming with custom buffer size
    pub fn open_with_buffer_size<P: AsRef<Path>>(
        path: P,
        buffer_size: usize,
    ) -> Result<Self, StreamError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let is_gzip = path.extension().is_some_and(|ext| ext == "gz");

        let reader: Box<dyn BufRead> = if is_gzip {
            gzip_reader(file, buffer_size)?
        } else {
            Box::new(BufReader::with_capacity(buffer_size, file))
        };
        Ok(Self::new(reader))
    }
}

#[cfg(feature = "gzip")]
fn gzip_reader(file: File, buffer_size: usize) -> Result<Box<dyn BufRead>, StreamError> {
    let decoder = flate2::read::MultiGzDecoder::new(file);
    Ok(Box::new(BufReader::with_capacity(buffer_size, decoder)))
}

#[cfg(not(feature = "gzip"))]
fn gzip_reader(_file: File, _buffer_size: usize) -> Result<Box<dyn BufRead>, StreamError> {
    Err(StreamError::InvalidStructure(
        "gzip input requires the gzip feature".to_string(),
    ))
}
