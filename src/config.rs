// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Run settings for `linedex index`.

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::PipelineError;
use crate::stopwords::StopWords;

/// Index directory used when none is given, relative to the working directory.
pub const DEFAULT_INDEX_DIR: &str = "app/index";

/// Hits requested from the engine when verifying.
pub const DEFAULT_TOP_K: usize = 1000;

/// Writer memory budget in bytes.
pub const DEFAULT_WRITER_MEMORY: usize = 50_000_000;

/// Tantivy rejects smaller per-thread budgets.
pub const MIN_WRITER_MEMORY: usize = 15_000_000;

#[derive(Debug, Clone)]
pub struct IndexConfig {
    pub corpus: PathBuf,
    pub index_dir: PathBuf,
    pub top_k: usize,
    /// Fixed seed for a repeatable sample; OS entropy otherwise.
    pub seed: Option<u64>,
    /// Stop-word file replacing the built-in English set.
    pub stop_words: Option<PathBuf>,
    pub writer_memory: usize,
}

impl IndexConfig {
    pub fn new(corpus: impl Into<PathBuf>) -> Self {
        Self {
            corpus: corpus.into(),
            index_dir: PathBuf::from(DEFAULT_INDEX_DIR),
            top_k: DEFAULT_TOP_K,
            seed: None,
            stop_words: None,
            writer_memory: DEFAULT_WRITER_MEMORY,
        }
    }

    pub fn with_index_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.index_dir = dir.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.top_k == 0 {
            return Err(PipelineError::InvalidConfig(
                "top-k must be at least 1".to_string(),
            ));
        }
        if self.writer_memory < MIN_WRITER_MEMORY {
            return Err(PipelineError::InvalidConfig(format!(
                "writer memory must be at least {} bytes, got {}",
                MIN_WRITER_MEMORY, self.writer_memory
            )));
        }
        Ok(())
    }

    pub fn load_stop_words(&self) -> Result<StopWords, PipelineError> {
        match &self.stop_words {
            Some(path) => StopWords::load(path),
            None => Ok(StopWords::english()),
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
