// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ingestion: read → tokenize → filter → sample, and per line build → submit.
//!
//! Strictly sequential. Every document is submitted in `docID` order; the
//! first failure aborts the run and drops the sink uncommitted. When the
//! corpus is exhausted the sink is closed, which commits the build.

use std::io::BufRead;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::corpus::LineReader;
use crate::document::LineDocument;
use crate::engine::DocumentSink;
use crate::error::PipelineError;
use crate::observer::RunObserver;
use crate::sampler::{DrawSource, ReservoirSampler, Sample};
use crate::stopwords::StopWords;
use crate::tokenize::tokens;

/// What one ingestion run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestSummary {
    /// Non-empty lines indexed.
    pub lines: u64,
    /// Tokens that passed the stop-word filter.
    pub eligible_tokens: u64,
    /// Final reservoir sample; `None` when no token was eligible.
    pub sample: Option<Sample>,
    #[serde(skip)]
    pub elapsed: Duration,
}

/// Ingest `source` into `sink`, sampling one eligible token.
pub fn ingest<R, S, D>(
    source: R,
    stop_words: &StopWords,
    mut sink: S,
    draws: D,
    observer: &mut dyn RunObserver,
) -> Result<IngestSummary, PipelineError>
where
    R: BufRead,
    S: DocumentSink,
    D: DrawSource,
{
    let start = Instant::now();
    let mut sampler = ReservoirSampler::new(draws);
    let mut lines = LineReader::new(source);

    for line in lines.by_ref() {
        let doc = LineDocument::from(line?);

        for token in tokens(&doc.text) {
            if !stop_words.is_eligible(&token) {
                continue;
            }
            if sampler.offer(&token, doc.doc_id) {
                if let Some(sample) = &sampler.state().sample {
                    observer.on_sample(sample, sampler.eligible_count());
                }
            }
        }

        sink.add(&doc)?;
        observer.on_line(&doc);
    }

    sink.close()?;

    let summary = IngestSummary {
        lines: lines.lines_read(),
        eligible_tokens: sampler.eligible_count(),
        sample: sampler.into_state().sample,
        elapsed: start.elapsed(),
    };
    observer.on_ingested(&summary);
    Ok(summary)
}
