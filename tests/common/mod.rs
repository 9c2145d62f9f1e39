//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use linedex::{run_index, IndexConfig, NoopObserver, RunReport};
use tempfile::TempDir;

/// Opening of Hamlet, 41 physical lines, 28 of them non-empty.
pub const ELSINORE: &str = "data/corpus/elsinore.txt";

pub const ELSINORE_LINES: u64 = 28;

/// A temporary workspace holding a corpus file and an index directory.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn corpus(&self, content: &str) -> PathBuf {
        let path = self.dir.path().join("corpus.txt");
        fs::write(&path, content).unwrap();
        path
    }

    pub fn index_dir(&self) -> PathBuf {
        self.dir.path().join("index")
    }

    pub fn config(&self, corpus: &Path) -> IndexConfig {
        IndexConfig::new(corpus).with_index_dir(self.index_dir())
    }

    /// Index `content` with a fixed seed and verify it.
    pub fn run(&self, content: &str, seed: u64) -> RunReport {
        let corpus = self.corpus(content);
        run_index(&self.config(&corpus).with_seed(seed), &mut NoopObserver)
            .expect("run should succeed")
    }
}
