// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the linedex command-line interface.
//!
//! Two subcommands: `index` to build a line index from a corpus and verify
//! it, and `search` to query an index that was built earlier.

pub mod display;

use std::path::PathBuf;

use clap::builder::TypedValueParser;
use clap::{Parser, Subcommand};

use linedex::{IndexConfig, DEFAULT_INDEX_DIR, DEFAULT_TOP_K, DEFAULT_WRITER_MEMORY};

#[derive(Parser)]
#[command(
    name = "linedex",
    about = "Line-corpus indexer with round-trip build verification",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Index every non-empty line of a corpus, then verify the build
    Index {
        /// Line-oriented text file
        corpus: PathBuf,

        /// Index directory (created when missing, replaced on every run)
        #[arg(long, default_value = DEFAULT_INDEX_DIR)]
        index_dir: PathBuf,

        /// Hits requested when searching for the sampled word
        #[arg(long, default_value_t = DEFAULT_TOP_K, value_parser = positive())]
        top_k: usize,

        /// Seed for a repeatable sample
        #[arg(long)]
        seed: Option<u64>,

        /// Stop-word file (one word per line) replacing the English set
        #[arg(long)]
        stop_words: Option<PathBuf>,

        /// Writer memory budget in bytes
        #[arg(long, default_value_t = DEFAULT_WRITER_MEMORY)]
        writer_memory: usize,

        /// Print the run report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search a built index and print matching lines
    Search {
        /// Query, e.g. `ghost AND father`
        query: String,

        /// Index directory
        #[arg(long, default_value = DEFAULT_INDEX_DIR)]
        index_dir: PathBuf,

        /// Maximum number of lines to print
        #[arg(short, long, default_value = "100", value_parser = positive())]
        limit: usize,

        /// Print matching lines as a JSON array
        #[arg(long)]
        json: bool,
    },
}

fn positive() -> impl TypedValueParser<Value = usize> {
    clap::value_parser!(u64).range(1..).map(|v| v as usize)
}

/// Settings for `index`, built from parsed arguments.
pub fn index_config(
    corpus: PathBuf,
    index_dir: PathBuf,
    top_k: usize,
    seed: Option<u64>,
    stop_words: Option<PathBuf>,
    writer_memory: usize,
) -> IndexConfig {
    IndexConfig {
        corpus,
        index_dir,
        top_k,
        seed,
        stop_words,
        writer_memory,
    }
}
