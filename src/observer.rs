// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Run observers: the logging collaborator handed to ingestion and
//! verification.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. [`TracingObserver`] turns them into `tracing` events; the
//! binary installs the subscriber once at startup. [`ProgressObserver`] adds a
//! spinner for long corpora.

use tracing::{debug, info, warn};

use crate::document::LineDocument;
use crate::ingest::IngestSummary;
use crate::sampler::Sample;
use crate::verify::{VerifyOutcome, VerifyStage};

pub trait RunObserver {
    fn on_line(&mut self, _doc: &LineDocument) {}

    /// A new token replaced the held sample.
    fn on_sample(&mut self, _sample: &Sample, _eligible_count: u64) {}

    fn on_ingested(&mut self, _summary: &IngestSummary) {}

    fn on_verify_stage(&mut self, _stage: &VerifyStage) {}

    fn on_verified(&mut self, _outcome: &VerifyOutcome) {}
}

/// Discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RunObserver for NoopObserver {}

/// Emits `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl RunObserver for TracingObserver {
    fn on_sample(&mut self, sample: &Sample, eligible_count: u64) {
        debug!(
            word = %sample.word,
            line = sample.line_index,
            eligible = eligible_count,
            "sample replaced"
        );
    }

    fn on_ingested(&mut self, summary: &IngestSummary) {
        info!(
            lines = summary.lines,
            words = summary.eligible_tokens,
            elapsed = ?summary.elapsed,
            "Processed {} lines and {} words",
            summary.lines,
            summary.eligible_tokens
        );
        if let Some(sample) = &summary.sample {
            info!(
                word = %sample.word,
                line = sample.line_index,
                "Testing selected keyword"
            );
        }
    }

    fn on_verify_stage(&mut self, stage: &VerifyStage) {
        match stage {
            VerifyStage::Reopened { num_docs } => debug!(num_docs, "index reopened"),
            VerifyStage::Queried { hits, elapsed } => info!(
                total_hits = hits.total_hits,
                returned = hits.doc_ids.len(),
                "Found {} hits in {:?}",
                hits.total_hits,
                elapsed
            ),
            VerifyStage::Checked { doc_id } => debug!(doc_id, "sampled line found and re-tokenized"),
        }
    }

    fn on_verified(&mut self, outcome: &VerifyOutcome) {
        match outcome {
            VerifyOutcome::Verified(_) => info!("Index done and verified"),
            VerifyOutcome::Skipped => warn!("no eligible tokens; verification skipped"),
        }
    }
}

/// Spinner over the line count, forwarding everything to an inner observer.
#[cfg(feature = "progress")]
pub struct ProgressObserver<O> {
    inner: O,
    bar: indicatif::ProgressBar,
}

#[cfg(feature = "progress")]
impl<O: RunObserver> ProgressObserver<O> {
    const TICK_EVERY: u64 = 1024;

    pub fn new(inner: O) -> Self {
        let bar = indicatif::ProgressBar::new_spinner();
        let template = "{spinner:.cyan} {prefix:<12} {pos} lines {msg}";
        if let Ok(style) = indicatif::ProgressStyle::with_template(template) {
            bar.set_style(style);
        }
        bar.set_prefix("Indexing");
        Self { inner, bar }
    }
}

#[cfg(feature = "progress")]
impl<O: RunObserver> RunObserver for ProgressObserver<O> {
    fn on_line(&mut self, doc: &LineDocument) {
        let done = doc.doc_id + 1;
        if done % Self::TICK_EVERY == 0 {
            self.bar.set_position(done);
        }
        self.inner.on_line(doc);
    }

    fn on_sample(&mut self, sample: &Sample, eligible_count: u64) {
        self.inner.on_sample(sample, eligible_count);
    }

    fn on_ingested(&mut self, summary: &IngestSummary) {
        self.bar.set_position(summary.lines);
        self.bar.finish_and_clear();
        self.inner.on_ingested(summary);
    }

    fn on_verify_stage(&mut self, stage: &VerifyStage) {
        self.inner.on_verify_stage(stage);
    }

    fn on_verified(&mut self, outcome: &VerifyOutcome) {
        self.inner.on_verified(outcome);
    }
}

#[cfg(feature = "progress")]
impl<O> Drop for ProgressObserver<O> {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
