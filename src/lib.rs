// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Line-corpus indexing with a self-verifying build.
//!
//! Every non-empty line of a text corpus becomes one stored document in a
//! tantivy index. While streaming, one token is drawn uniformly from all
//! eligible (normalized, non-stop-word) tokens by reservoir sampling. After
//! the build is committed, the index is reopened and searched for that token:
//! the sampled line must come back as a hit, and its stored text must still
//! contain the token.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌─────────────┐   ┌──────────────┐   ┌────────────────┐
//! │  corpus.rs   │──▶│ tokenize.rs │──▶│ stopwords.rs │──▶│   sampler.rs   │
//! │ (LineReader) │   │ (normalize) │   │ (StopWords)  │   │ (reservoir k=1)│
//! └──────────────┘   └─────────────┘   └──────────────┘   └────────────────┘
//!        │                                                         │
//!        ▼                                                         ▼
//! ┌──────────────┐   ┌─────────────┐   commit   ┌─────────────────────────────┐
//! │ document.rs  │──▶│   engine/   │───────────▶│          verify.rs          │
//! │(LineDocument)│   │  (tantivy)  │   reopen   │ (Reopened→Queried→Checked)  │
//! └──────────────┘   └─────────────┘            └─────────────────────────────┘
//! ```
//!
//! `ingest.rs` drives the left half, `verify.rs` the right, and
//! `pipeline.rs` runs both in sequence.
//!
//! # Usage
//!
//! ```no_run
//! use linedex::{run_index, IndexConfig, TracingObserver};
//!
//! let config = IndexConfig::new("hamlet.txt").with_seed(42);
//! let report = run_index(&config, &mut TracingObserver).unwrap();
//! assert!(report.is_verified());
//! ```

pub mod config;
pub mod corpus;
pub mod document;
pub mod engine;
pub mod error;
pub mod ingest;
pub mod observer;
pub mod pipeline;
pub mod report;
pub mod sampler;
pub mod stopwords;
pub mod testing;
pub mod tokenize;
pub mod verify;

pub use config::{IndexConfig, DEFAULT_INDEX_DIR, DEFAULT_TOP_K, DEFAULT_WRITER_MEMORY};
pub use corpus::{CorpusLine, LineReader};
pub use document::{LineDocument, LINE_FIELD, TEXT_FIELD};
pub use engine::{DocumentSink, Hits, LineHit, LineIndex, TermSearcher};
pub use error::{ErrorCategory, PipelineError, Stage};
pub use ingest::{ingest, IngestSummary};
#[cfg(feature = "progress")]
pub use observer::ProgressObserver;
pub use observer::{NoopObserver, RunObserver, TracingObserver};
pub use pipeline::{run_index, run_search};
pub use report::RunReport;
pub use sampler::{DrawSource, ReservoirSampler, Sample, SampleState, ScriptedDraws};
pub use stopwords::{StopWords, ENGLISH_STOP_WORDS};
pub use tokenize::{normalize, term, tokens};
pub use verify::{verify, Verification, VerifyOutcome, VerifyStage};
