// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the ingest-and-verify pipeline.
//!
//! Every failure is fatal and travels up to the runner in `main`, which maps
//! its [`ErrorCategory`] to the process exit code. Engine and I/O failures are
//! kept apart from verification mismatches: the former mean the build could
//! not run, the latter mean the engine did not make searchable what was
//! written.

use std::fmt;

use thiserror::Error;

/// Pipeline stage a failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Config,
    Open,
    Read,
    Tokenize,
    IndexWrite,
    Commit,
    Reopen,
    Search,
    VerifyMismatch,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Config => "config",
            Stage::Open => "open",
            Stage::Read => "read",
            Stage::Tokenize => "tokenize",
            Stage::IndexWrite => "index-write",
            Stage::Commit => "commit",
            Stage::Reopen => "reopen",
            Stage::Search => "search",
            Stage::VerifyMismatch => "verify-mismatch",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse failure class, one exit code each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Engine or file-system failure.
    Io,
    /// The index is inconsistent with what was written.
    Verification,
    /// Invalid settings, detected before any work starts.
    Config,
}

impl ErrorCategory {
    /// Process exit code. Clap already owns 2 for usage errors.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorCategory::Io => 1,
            ErrorCategory::Verification => 3,
            ErrorCategory::Config => 4,
        }
    }
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("{stage} failed: {source}")]
    Io {
        stage: Stage,
        #[source]
        source: std::io::Error,
    },

    #[error("{stage} failed: {source}")]
    Engine {
        stage: Stage,
        #[source]
        source: tantivy::TantivyError,
    },

    #[error("line {line_number} is not valid UTF-8")]
    Decode { line_number: usize },

    #[error("failed to index line {doc_id} '{text}': {source}")]
    AddDocument {
        doc_id: u64,
        text: String,
        #[source]
        source: tantivy::TantivyError,
    },

    #[error("invalid query '{query}': {source}")]
    InvalidQuery {
        query: String,
        #[source]
        source: tantivy::query::QueryParserError,
    },

    #[error("failed to read stop words from {path}: {source}")]
    StopWords {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("expected line {doc_id} among {total_hits} hits for '{word}', not found")]
    MissingHit {
        doc_id: u64,
        word: String,
        total_hits: usize,
    },

    #[error("line {doc_id} matched '{word}' but its stored text is unavailable")]
    DocumentUnavailable { doc_id: u64, word: String },

    #[error("word '{word}' not found in text of line {doc_id}: '{text}'")]
    WordNotInDocument {
        doc_id: u64,
        word: String,
        text: String,
    },
}

impl PipelineError {
    pub fn io(stage: Stage, source: std::io::Error) -> Self {
        PipelineError::Io { stage, source }
    }

    pub fn engine(stage: Stage, source: impl Into<tantivy::TantivyError>) -> Self {
        PipelineError::Engine {
            stage,
            source: source.into(),
        }
    }

    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::Io { stage, .. } | PipelineError::Engine { stage, .. } => *stage,
            PipelineError::Decode { .. } => Stage::Tokenize,
            PipelineError::AddDocument { .. } => Stage::IndexWrite,
            PipelineError::InvalidQuery { .. } => Stage::Search,
            PipelineError::StopWords { .. } | PipelineError::InvalidConfig(_) => Stage::Config,
            PipelineError::MissingHit { .. }
            | PipelineError::DocumentUnavailable { .. }
            | PipelineError::WordNotInDocument { .. } => Stage::VerifyMismatch,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self.stage() {
            Stage::Config => ErrorCategory::Config,
            Stage::VerifyMismatch => ErrorCategory::Verification,
            _ => ErrorCategory::Io,
        }
    }
}
