// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stop-word filtering for sampling eligibility.
//!
//! Stop words never become the sample, but the lines containing them are
//! indexed in full. Filtering happens on normalized tokens only.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::PipelineError;
use crate::tokenize::normalize;

/// The classic Lucene English stop-word set.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// A fixed set of normalized stop words.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl Default for StopWords {
    fn default() -> Self {
        Self::english()
    }
}

impl StopWords {
    /// The default English set.
    pub fn english() -> Self {
        Self::from_list(ENGLISH_STOP_WORDS)
    }

    /// An empty set: every non-empty token is eligible.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Build a set from raw words. Each word is normalized; words that
    /// normalize to nothing are dropped.
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        let words = words
            .iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Load a stop-word file: one word per line, blank lines and `#` comments ignored.
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        let content = fs::read_to_string(path).map_err(|source| PipelineError::StopWords {
            path: path.display().to_string(),
            source,
        })?;
        let words: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();
        Ok(Self::from_list(&words))
    }

    /// Membership test on a normalized token.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// A token may be sampled when it is non-empty and not a stop word.
    pub fn is_eligible(&self, token: &str) -> bool {
        !token.is_empty() && !self.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
