// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use linedex::{run_index, run_search, PipelineError, RunObserver, TracingObserver};

mod cli;
use cli::{display, Cli, Commands};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(stage = %err.stage(), "{}", err);
            display::print_error(&err);
            ExitCode::from(err.category().exit_code())
        }
    }
}

fn run(command: Commands) -> Result<(), PipelineError> {
    match command {
        Commands::Index {
            corpus,
            index_dir,
            top_k,
            seed,
            stop_words,
            writer_memory,
            json,
        } => {
            let config =
                cli::index_config(corpus, index_dir, top_k, seed, stop_words, writer_memory);
            let mut observer = observer();
            let report = run_index(&config, observer.as_mut())?;
            if json {
                println!("{}", to_json(&report));
            } else {
                display::print_run_report(&report);
            }
        }
        Commands::Search {
            query,
            index_dir,
            limit,
            json,
        } => {
            let hits = run_search(&index_dir, &query, limit)?;
            if json {
                let lines: Vec<&str> = hits.iter().map(|h| h.text.as_str()).collect();
                println!("{}", to_json(&lines));
            } else {
                display::print_search_hits(&query, &hits);
            }
        }
    }
    Ok(())
}

#[cfg(feature = "progress")]
fn observer() -> Box<dyn RunObserver> {
    Box::new(linedex::ProgressObserver::new(TracingObserver))
}

#[cfg(not(feature = "progress"))]
fn observer() -> Box<dyn RunObserver> {
    Box::new(TracingObserver)
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    // Plain data with string keys; serialization cannot fail
    serde_json::to_string_pretty(value).unwrap_or_default()
}
