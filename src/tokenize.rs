// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word normalization shared by sampling and indexing.
//!
//! A raw word (one whitespace-delimited chunk of a line) is lowercased and
//! reduced to its first run of ASCII letters. Everything after that run is
//! dropped, even when more letters follow:
//!
//! ```text
//! "Hello,"    → "hello"
//! "123abc!"   → "abc"
//! "o'clock"   → "o"
//! "1234"      → ""       (rejected)
//! ```
//!
//! [`term`] adds the engine's length limit on top of [`normalize`]. It feeds
//! both the sampler and the engine's tokenizer, so a token sampled from a line
//! is always a term the engine indexed for that line.

use tantivy::tokenizer::MAX_TOKEN_LEN;

/// Normalize one raw word to its first lowercase ASCII letter run.
///
/// Returns an empty string when the word holds no ASCII letter.
pub fn normalize(word: &str) -> String {
    let lower = word.to_lowercase();
    let Some(start) = lower.find(|c: char| c.is_ascii_lowercase()) else {
        return String::new();
    };
    let run = &lower[start..];
    let end = run
        .find(|c: char| !c.is_ascii_lowercase())
        .unwrap_or(run.len());
    run[..end].to_string()
}

/// The indexable term for one raw word.
///
/// `None` when normalization rejects the word or the result is longer than
/// the engine indexes (`MAX_TOKEN_LEN` bytes).
pub fn term(word: &str) -> Option<String> {
    let token = normalize(word);
    if token.is_empty() || token.len() > MAX_TOKEN_LEN {
        None
    } else {
        Some(token)
    }
}

/// Split a line on whitespace and keep the term of every word that has one.
pub fn tokens(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split_whitespace().filter_map(term)
}
