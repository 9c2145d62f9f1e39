// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! [`MemoryIndex`] is a tiny in-memory engine with fault injection, used to
//! exercise the failure paths tantivy never takes on its own.

#![doc(hidden)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::document::LineDocument;
use crate::engine::{DocumentSink, Hits, TermSearcher};
use crate::error::PipelineError;
use crate::ingest::IngestSummary;
use crate::observer::RunObserver;
use crate::sampler::Sample;
use crate::tokenize::tokens;
use crate::verify::{VerifyOutcome, VerifyStage};

#[derive(Default)]
struct MemoryState {
    pending: Vec<LineDocument>,
    committed: Vec<LineDocument>,
    is_committed: bool,
    fail_at: Option<u64>,
    dropped_hits: HashSet<u64>,
    stored_overrides: HashMap<u64, String>,
    searches: usize,
}

/// Shared handle over an in-memory line index.
#[derive(Clone, Default)]
pub struct MemoryIndex {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// An index already committed with `lines` as documents 0..n.
    pub fn with_lines(lines: &[&str]) -> Self {
        let index = Self::new();
        {
            let mut state = index.state.borrow_mut();
            state.committed = lines
                .iter()
                .enumerate()
                .map(|(i, text)| LineDocument::new(i as u64, *text))
                .collect();
            state.is_committed = true;
        }
        index
    }

    /// Reject the document with this `docID` at submission.
    pub fn failing_at(self, doc_id: u64) -> Self {
        self.state.borrow_mut().fail_at = Some(doc_id);
        self
    }

    /// Leave this `docID` out of every hit list.
    pub fn dropping_hit(self, doc_id: u64) -> Self {
        self.state.borrow_mut().dropped_hits.insert(doc_id);
        self
    }

    /// Serve `doc.text` as the stored text of `doc.doc_id`, leaving its terms.
    pub fn storing(self, doc: LineDocument) -> Self {
        self.state
            .borrow_mut()
            .stored_overrides
            .insert(doc.doc_id, doc.text);
        self
    }

    pub fn sink(&self) -> MemorySink {
        MemorySink {
            state: Rc::clone(&self.state),
        }
    }

    pub fn is_committed(&self) -> bool {
        self.state.borrow().is_committed
    }

    pub fn documents(&self) -> Vec<LineDocument> {
        self.state.borrow().committed.clone()
    }

    pub fn searches(&self) -> usize {
        self.state.borrow().searches
    }
}

pub struct MemorySink {
    state: Rc<RefCell<MemoryState>>,
}

impl DocumentSink for MemorySink {
    fn add(&mut self, doc: &LineDocument) -> Result<(), PipelineError> {
        let mut state = self.state.borrow_mut();
        if state.fail_at == Some(doc.doc_id) {
            return Err(PipelineError::AddDocument {
                doc_id: doc.doc_id,
                text: doc.text.clone(),
                source: tantivy::TantivyError::InvalidArgument("injected failure".to_string()),
            });
        }
        state.pending.push(doc.clone());
        Ok(())
    }

    fn close(self) -> Result<(), PipelineError> {
        let mut state = self.state.borrow_mut();
        let pending = std::mem::take(&mut state.pending);
        state.committed = pending;
        state.is_committed = true;
        Ok(())
    }
}

impl TermSearcher for MemoryIndex {
    fn search_term(&self, word: &str, limit: usize) -> Result<Hits, PipelineError> {
        let mut state = self.state.borrow_mut();
        state.searches += 1;

        let matching: Vec<u64> = state
            .committed
            .iter()
            .filter(|doc| tokens(&doc.text).any(|t| t == word))
            .map(|doc| doc.doc_id)
            .collect();
        let doc_ids = matching
            .iter()
            .copied()
            .filter(|id| !state.dropped_hits.contains(id))
            .take(limit)
            .collect();
        Ok(Hits {
            total_hits: matching.len(),
            doc_ids,
        })
    }

    fn num_docs(&self) -> u64 {
        self.state.borrow().committed.len() as u64
    }

    fn document(&self, doc_id: u64) -> Result<Option<String>, PipelineError> {
        let state = self.state.borrow();
        if let Some(text) = state.stored_overrides.get(&doc_id) {
            return Ok(Some(text.clone()));
        }
        Ok(state
            .committed
            .iter()
            .find(|doc| doc.doc_id == doc_id)
            .map(|doc| doc.text.clone()))
    }
}

/// Records notifications by name.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub lines: Vec<u64>,
    pub samples: Vec<Sample>,
    pub summaries: Vec<IngestSummary>,
    pub stages: Vec<&'static str>,
    pub outcomes: Vec<&'static str>,
}

impl RunObserver for RecordingObserver {
    fn on_line(&mut self, doc: &LineDocument) {
        self.lines.push(doc.doc_id);
    }

    fn on_sample(&mut self, sample: &Sample, _eligible_count: u64) {
        self.samples.push(sample.clone());
    }

    fn on_ingested(&mut self, summary: &IngestSummary) {
        self.summaries.push(summary.clone());
    }

    fn on_verify_stage(&mut self, stage: &VerifyStage) {
        self.stages.push(match stage {
            VerifyStage::Reopened { .. } => "reopened",
            VerifyStage::Queried { .. } => "queried",
            VerifyStage::Checked { .. } => "checked",
        });
    }

    fn on_verified(&mut self, outcome: &VerifyOutcome) {
        self.outcomes.push(outcome.as_str());
    }
}
