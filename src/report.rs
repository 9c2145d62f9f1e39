// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Machine-readable summary of a run (`linedex index --json`).

use std::time::Duration;

use serde::Serialize;

use crate::config::IndexConfig;
use crate::ingest::IngestSummary;
use crate::sampler::Sample;
use crate::verify::{Verification, VerifyOutcome};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub corpus: String,
    pub index_dir: String,
    pub lines: u64,
    pub eligible_tokens: u64,
    pub sample: Option<Sample>,
    pub outcome: &'static str,
    pub verification: Option<Verification>,
    pub ingest_ms: f64,
    pub search_ms: Option<f64>,
    pub elapsed_ms: f64,
}

fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

impl RunReport {
    pub fn new(
        config: &IndexConfig,
        summary: IngestSummary,
        outcome: VerifyOutcome,
        elapsed: Duration,
    ) -> Self {
        let outcome_name = outcome.as_str();
        let verification = match outcome {
            VerifyOutcome::Verified(v) => Some(v),
            VerifyOutcome::Skipped => None,
        };
        Self {
            corpus: config.corpus.display().to_string(),
            index_dir: config.index_dir.display().to_string(),
            lines: summary.lines,
            eligible_tokens: summary.eligible_tokens,
            sample: summary.sample,
            outcome: outcome_name,
            search_ms: verification.as_ref().map(|v| millis(v.search_elapsed)),
            verification,
            ingest_ms: millis(summary.elapsed),
            elapsed_ms: millis(elapsed),
        }
    }

    pub fn is_verified(&self) -> bool {
        self.verification.is_some()
    }
}
