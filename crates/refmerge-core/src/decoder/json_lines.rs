//! Newline-delimited JSON reference stream.

use super::{DecodedRef, RefReader};
use crate::error::{RefMergeError, Result};
use std::io::BufRead;

/// Reads one [`DecodedRef`] per line. Blank lines are skipped.
pub struct JsonLinesReader<R> {
    inner: R,
    line: usize,
    buf: String,
}

impl<R: BufRead> JsonLinesReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: 0,
            buf: String::new(),
        }
    }

    /// Number of lines consumed so far.
    pub fn line(&self) -> usize {
        self.line
    }
}

impl<R: BufRead> RefReader for JsonLinesReader<R> {
    fn next_ref(&mut self) -> Result<Option<DecodedRef>> {
        loop {
            self.buf.clear();
            if self.inner.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;

            let trimmed = self.buf.trim();
            if trimmed.is_empty() {
                continue;
            }

            return serde_json::from_str(trimmed).map(Some).map_err(|e| {
                RefMergeError::Decode(format!("line {}: {}", self.line, e))
            });
        }
    }
}
