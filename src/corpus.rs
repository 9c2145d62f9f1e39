// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Streaming line reader.
//!
//! Yields each non-empty line of the corpus paired with its `docID`, the
//! 0-based count of non-empty lines before it. Empty lines are consumed but
//! neither yielded nor counted. A line holding only whitespace is not empty.
//! Line terminators (`\n` or `\r\n`) are stripped, as is a lone `\r`
//! ending the last line.

use std::io::BufRead;

use crate::error::{PipelineError, Stage};

/// One non-empty corpus line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusLine {
    pub doc_id: u64,
    pub text: String,
}

/// Lazy, finite, non-restartable iterator over non-empty lines.
pub struct LineReader<R> {
    source: R,
    buf: Vec<u8>,
    next_doc_id: u64,
    line_number: usize,
    done: bool,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            buf: Vec::new(),
            next_doc_id: 0,
            line_number: 0,
            done: false,
        }
    }

    /// Number of non-empty lines yielded so far.
    pub fn lines_read(&self) -> u64 {
        self.next_doc_id
    }

    fn read_line(&mut self) -> Result<Option<CorpusLine>, PipelineError> {
        loop {
            self.buf.clear();
            let n = self
                .source
                .read_until(b'\n', &mut self.buf)
                .map_err(|e| PipelineError::io(Stage::Read, e))?;
            if n == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            if self.buf.last() == Some(&b'\n') {
                self.buf.pop();
            }
            // a final line may end in a bare `\r`
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
            if self.buf.is_empty() {
                continue;
            }

            let text = String::from_utf8(std::mem::take(&mut self.buf)).map_err(|_| {
                PipelineError::Decode {
                    line_number: self.line_number,
                }
            })?;
            let doc_id = self.next_doc_id;
            self.next_doc_id += 1;
            return Ok(Some(CorpusLine { doc_id, text }));
        }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<CorpusLine, PipelineError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_line() {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
