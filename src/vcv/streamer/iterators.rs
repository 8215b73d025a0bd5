use std::io::BufRead;

use super::{StreamError, VcvStreamer};
use crate::vcv::element::Element;

/// Iterator over archive records in a VCV release.
///
/// Stops after the first error.
pub struct RecordIterator<R: BufRead> {
    pub(super) streamer: VcvStreamer<R>,
    pub(super) failed: bool,
}

impl<R: BufRead> RecordIterator<R> {
    /// Number of records produced so far
    pub fn records_read(&self) -> usize {
        self.streamer.records_read()
    }
}

impl<R: BufRead> Iterator for RecordIterator<R> {
    type Item = Result<Element, StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.streamer.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => None,
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for RecordIterator<R> {}
