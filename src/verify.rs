// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Round-trip verification of a committed build.
//!
//! The verifier walks a typed state machine; each step consumes the previous
//! state, so a check cannot run on results that were never queried:
//!
//! ```text
//! Reopened ──query──▶ Queried ──check──▶ Checked ──▶ Verified
//!                        │                  │
//!                        └──── MissingHit   └──── WordNotInDocument
//! ```
//!
//! Failures here are verification errors, not I/O errors: they mean the
//! engine did not make searchable what the pipeline wrote.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::engine::{Hits, TermSearcher};
use crate::error::PipelineError;
use crate::observer::RunObserver;
use crate::sampler::Sample;
use crate::tokenize::tokens;

/// Progress notifications emitted while verifying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyStage {
    Reopened { num_docs: u64 },
    Queried { hits: Hits, elapsed: Duration },
    Checked { doc_id: u64 },
}

/// Evidence of a successful round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    pub word: String,
    pub doc_id: u64,
    pub total_hits: usize,
    pub returned_hits: usize,
    #[serde(skip)]
    pub search_elapsed: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    Verified(Verification),
    /// No eligible token was sampled, so no query was issued.
    Skipped,
}

impl VerifyOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerifyOutcome::Verified(_) => "verified",
            VerifyOutcome::Skipped => "skipped",
        }
    }
}

/// A committed index opened for reading, with the sample to look for.
pub struct Reopened<'a, S> {
    searcher: &'a S,
    sample: &'a Sample,
}

/// Top-K hits for the sampled word.
pub struct Queried<'a, S> {
    searcher: &'a S,
    sample: &'a Sample,
    hits: Hits,
    elapsed: Duration,
}

/// The sampled line was found and contains the sampled word.
pub struct Checked {
    verification: Verification,
}

impl<'a, S: TermSearcher> Reopened<'a, S> {
    pub fn new(searcher: &'a S, sample: &'a Sample) -> Self {
        Self { searcher, sample }
    }

    /// Exact-term search for the sampled word.
    pub fn query(self, top_k: usize) -> Result<Queried<'a, S>, PipelineError> {
        let start = Instant::now();
        let hits = self.searcher.search_term(&self.sample.word, top_k)?;
        Ok(Queried {
            searcher: self.searcher,
            sample: self.sample,
            hits,
            elapsed: start.elapsed(),
        })
    }
}

impl<S: TermSearcher> Queried<'_, S> {
    pub fn hits(&self) -> &Hits {
        &self.hits
    }

    /// The sampled line must be among the hits, and its stored text must
    /// re-tokenize to include the sampled word.
    pub fn check(self) -> Result<Checked, PipelineError> {
        let Sample { word, line_index } = self.sample;
        let doc_id = *line_index;

        if !self.hits.contains(doc_id) {
            return Err(PipelineError::MissingHit {
                doc_id,
                word: word.clone(),
                total_hits: self.hits.total_hits,
            });
        }

        let text = self
            .searcher
            .document(doc_id)?
            .ok_or_else(|| PipelineError::DocumentUnavailable {
                doc_id,
                word: word.clone(),
            })?;

        if !tokens(&text).any(|token| token == *word) {
            return Err(PipelineError::WordNotInDocument {
                doc_id,
                word: word.clone(),
                text,
            });
        }

        Ok(Checked {
            verification: Verification {
                word: word.clone(),
                doc_id,
                total_hits: self.hits.total_hits,
                returned_hits: self.hits.doc_ids.len(),
                search_elapsed: self.elapsed,
            },
        })
    }
}

impl Checked {
    pub fn doc_id(&self) -> u64 {
        self.verification.doc_id
    }

    pub fn into_verification(self) -> Verification {
        self.verification
    }
}

/// Verify `sample` against a reopened index.
///
/// With no sample (zero eligible tokens) nothing is queried and the outcome
/// is [`VerifyOutcome::Skipped`].
pub fn verify<S: TermSearcher>(
    searcher: &S,
    sample: Option<&Sample>,
    top_k: usize,
    observer: &mut dyn RunObserver,
) -> Result<VerifyOutcome, PipelineError> {
    let Some(sample) = sample else {
        observer.on_verified(&VerifyOutcome::Skipped);
        return Ok(VerifyOutcome::Skipped);
    };

    let reopened = Reopened::new(searcher, sample);
    observer.on_verify_stage(&VerifyStage::Reopened {
        num_docs: searcher.num_docs(),
    });

    let queried = reopened.query(top_k)?;
    observer.on_verify_stage(&VerifyStage::Queried {
        hits: queried.hits().clone(),
        elapsed: queried.elapsed,
    });

    let checked = queried.check()?;
    observer.on_verify_stage(&VerifyStage::Checked {
        doc_id: checked.doc_id(),
    });

    let outcome = VerifyOutcome::Verified(checked.into_verification());
    observer.on_verified(&outcome);
    Ok(outcome)
}
