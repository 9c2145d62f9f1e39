// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Top-level runs: ingest-then-verify, and ad-hoc search over a built index.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use crate::config::IndexConfig;
use crate::engine::{LineHit, LineIndex, TermSearcher};
use crate::error::{PipelineError, Stage};
use crate::ingest::ingest;
use crate::observer::RunObserver;
use crate::report::RunReport;
use crate::verify::verify;

/// Build the index for `config.corpus`, then verify it with the sampled token.
///
/// The writer is committed before the reader opens. Any error drops whichever
/// of them is live, releasing the index directory.
pub fn run_index(
    config: &IndexConfig,
    observer: &mut dyn RunObserver,
) -> Result<RunReport, PipelineError> {
    let start = Instant::now();
    config.validate()?;
    let stop_words = config.load_stop_words()?;

    let corpus = File::open(&config.corpus).map_err(|e| PipelineError::io(Stage::Read, e))?;
    let index = LineIndex::open_or_create(&config.index_dir)?;
    let writer = index.writer(config.writer_memory)?;

    let summary = ingest(
        BufReader::new(corpus),
        &stop_words,
        writer,
        config.rng(),
        observer,
    )?;

    let reader = index.reader()?;
    let outcome = verify(&reader, summary.sample.as_ref(), config.top_k, observer)?;
    reader.close()?;

    Ok(RunReport::new(config, summary, outcome, start.elapsed()))
}

/// Run a free-form query against an existing index.
pub fn run_search(index_dir: &Path, query: &str, limit: usize) -> Result<Vec<LineHit>, PipelineError> {
    if limit == 0 {
        return Err(PipelineError::InvalidConfig(
            "limit must be at least 1".to_string(),
        ));
    }
    let index = LineIndex::open(index_dir)?;
    let reader = index.reader()?;
    let hits = reader.search_query(query, limit)?;
    reader.close()?;
    Ok(hits)
}
