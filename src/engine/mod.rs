// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The narrow interface the pipeline consumes from the full-text engine.
//!
//! Writing goes through a [`DocumentSink`], reading through a
//! [`TermSearcher`]. Both are acquired once per phase and consumed by
//! `close`; dropping either on an error path releases the engine's locks and
//! file handles. [`LineIndex`] implements both on top of tantivy.

mod line_index;
mod tokenizer;

pub use line_index::{LineHit, LineIndex, LineIndexReader, LineIndexWriter};
pub use tokenizer::{corpus_analyzer, CorpusTokenizer, CORPUS_TOKENIZER};

use serde::Serialize;

use crate::document::LineDocument;
use crate::error::PipelineError;

/// Result of a ranked top-K search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Hits {
    /// Number of matching documents, including those past the limit.
    pub total_hits: usize,
    /// `docID`s of the returned hits, best first.
    pub doc_ids: Vec<u64>,
}

impl Hits {
    pub fn contains(&self, doc_id: u64) -> bool {
        self.doc_ids.contains(&doc_id)
    }
}

/// Write side: documents are appended in `docID` order, then committed.
pub trait DocumentSink {
    fn add(&mut self, doc: &LineDocument) -> Result<(), PipelineError>;

    /// Commit everything added and release the writer.
    fn close(self) -> Result<(), PipelineError>
    where
        Self: Sized;
}

/// Read side over a committed index.
pub trait TermSearcher {
    /// Exact-term search on the text field, top `limit` hits.
    fn search_term(&self, word: &str, limit: usize) -> Result<Hits, PipelineError>;

    /// Number of committed documents.
    fn num_docs(&self) -> u64;

    /// Stored text of document `doc_id`, if present.
    fn document(&self, doc_id: u64) -> Result<Option<String>, PipelineError>;

    fn close(self) -> Result<(), PipelineError>
    where
        Self: Sized,
    {
        Ok(())
    }
}
