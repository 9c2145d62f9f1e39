// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tantivy-backed line index.
//!
//! Schema:
//!
//! | Field  | Options                             | Content         |
//! |--------|-------------------------------------|-----------------|
//! | `text` | corpus tokenizer, positions, stored | verbatim line   |
//! | `line` | u64, indexed, stored                | 0-based `docID` |
//!
//! Hits are resolved to `docID` through the stored `line` value rather than
//! the engine's internal address, which depends on segment layout.

use std::fs;
use std::path::Path;

use tantivy::collector::{Count, TopDocs};
use tantivy::directory::MmapDirectory;
use tantivy::query::{QueryParser, TermQuery};
use tantivy::schema::{
    Field, IndexRecordOption, Schema, TextFieldIndexing, TextOptions, Value, INDEXED, STORED,
};
use tantivy::{
    DocAddress, Index, IndexReader, IndexWriter, ReloadPolicy, Searcher, TantivyDocument,
    TantivyError, Term,
};

use super::tokenizer::{corpus_analyzer, CORPUS_TOKENIZER};
use super::{DocumentSink, Hits, TermSearcher};
use crate::document::{LineDocument, LINE_FIELD, TEXT_FIELD};
use crate::error::{PipelineError, Stage};

fn build_schema() -> Schema {
    let mut builder = Schema::builder();
    let indexing = TextFieldIndexing::default()
        .set_tokenizer(CORPUS_TOKENIZER)
        .set_index_option(IndexRecordOption::WithFreqsAndPositions);
    builder.add_text_field(
        TEXT_FIELD,
        TextOptions::default()
            .set_indexing_options(indexing)
            .set_stored(),
    );
    builder.add_u64_field(LINE_FIELD, INDEXED | STORED);
    builder.build()
}

/// A line index living in a directory (or in RAM for tests).
#[derive(Clone)]
pub struct LineIndex {
    index: Index,
    text: Field,
    line: Field,
}

impl LineIndex {
    /// Open the index in `dir`, creating the directory and an empty index
    /// when missing.
    pub fn open_or_create(dir: &Path) -> Result<Self, PipelineError> {
        fs::create_dir_all(dir).map_err(|e| PipelineError::io(Stage::Open, e))?;
        let directory = MmapDirectory::open(dir).map_err(|e| PipelineError::engine(Stage::Open, e))?;
        let index = Index::open_or_create(directory, build_schema())
            .map_err(|e| PipelineError::engine(Stage::Open, e))?;
        Self::from_index(index, Stage::Open)
    }

    /// Open an existing index for reading.
    pub fn open(dir: &Path) -> Result<Self, PipelineError> {
        let index = Index::open_in_dir(dir).map_err(|e| PipelineError::engine(Stage::Reopen, e))?;
        Self::from_index(index, Stage::Reopen)
    }

    pub fn create_in_ram() -> Result<Self, PipelineError> {
        Self::from_index(Index::create_in_ram(build_schema()), Stage::Open)
    }

    fn from_index(index: Index, stage: Stage) -> Result<Self, PipelineError> {
        index.tokenizers().register(CORPUS_TOKENIZER, corpus_analyzer());
        let schema = index.schema();
        let text = schema
            .get_field(TEXT_FIELD)
            .map_err(|e| PipelineError::engine(stage, e))?;
        let line = schema
            .get_field(LINE_FIELD)
            .map_err(|e| PipelineError::engine(stage, e))?;
        Ok(Self { index, text, line })
    }

    /// Single-threaded writer. Documents from earlier runs are cleared at
    /// commit.
    pub fn writer(&self, memory_budget: usize) -> Result<LineIndexWriter, PipelineError> {
        let writer: IndexWriter = self
            .index
            .writer_with_num_threads(1, memory_budget)
            .map_err(|e| PipelineError::engine(Stage::Open, e))?;
        writer
            .delete_all_documents()
            .map_err(|e| PipelineError::engine(Stage::Open, e))?;
        Ok(LineIndexWriter {
            writer,
            text: self.text,
            line: self.line,
        })
    }

    /// Reader over the last commit.
    pub fn reader(&self) -> Result<LineIndexReader, PipelineError> {
        let reader: IndexReader = self
            .index
            .reader_builder()
            .reload_policy(ReloadPolicy::Manual)
            .try_into()
            .map_err(|e| PipelineError::engine(Stage::Reopen, e))?;
        Ok(LineIndexReader {
            searcher: reader.searcher(),
            index: self.index.clone(),
            text: self.text,
            line: self.line,
        })
    }
}

pub struct LineIndexWriter {
    writer: IndexWriter,
    text: Field,
    line: Field,
}

impl DocumentSink for LineIndexWriter {
    fn add(&mut self, doc: &LineDocument) -> Result<(), PipelineError> {
        let mut document = TantivyDocument::default();
        document.add_u64(self.line, doc.doc_id);
        document.add_text(self.text, &doc.text);
        self.writer
            .add_document(document)
            .map_err(|source| PipelineError::AddDocument {
                doc_id: doc.doc_id,
                text: doc.text.clone(),
                source,
            })?;
        Ok(())
    }

    fn close(mut self) -> Result<(), PipelineError> {
        self.writer
            .commit()
            .map_err(|e| PipelineError::engine(Stage::Commit, e))?;
        self.writer
            .wait_merging_threads()
            .map_err(|e| PipelineError::engine(Stage::Commit, e))
    }
}

/// A line matched by a free-form query.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct LineHit {
    pub score: f32,
    pub doc_id: u64,
    pub text: String,
}

pub struct LineIndexReader {
    searcher: Searcher,
    index: Index,
    text: Field,
    line: Field,
}

impl LineIndexReader {
    fn fetch(&self, address: DocAddress) -> Result<TantivyDocument, PipelineError> {
        self.searcher
            .doc(address)
            .map_err(|e| PipelineError::engine(Stage::Search, e))
    }

    fn line_of(&self, doc: &TantivyDocument) -> Result<u64, PipelineError> {
        doc.get_first(self.line)
            .and_then(|v| v.as_u64())
            .ok_or_else(|| {
                PipelineError::engine(
                    Stage::Search,
                    TantivyError::SchemaError(format!("document without '{}' value", LINE_FIELD)),
                )
            })
    }

    fn text_of(&self, doc: &TantivyDocument) -> String {
        doc.get_first(self.text)
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string()
    }

    /// Parse `query` with the engine's query parser over the text field and
    /// return the stored lines of the top `limit` hits.
    pub fn search_query(&self, query: &str, limit: usize) -> Result<Vec<LineHit>, PipelineError> {
        let parser = QueryParser::for_index(&self.index, vec![self.text]);
        let parsed = parser
            .parse_query(query)
            .map_err(|source| PipelineError::InvalidQuery {
                query: query.to_string(),
                source,
            })?;
        let top = self
            .searcher
            .search(&parsed, &TopDocs::with_limit(limit))
            .map_err(|e| PipelineError::engine(Stage::Search, e))?;

        top.into_iter()
            .map(|(score, address)| {
                let doc = self.fetch(address)?;
                Ok(LineHit {
                    score,
                    doc_id: self.line_of(&doc)?,
                    text: self.text_of(&doc),
                })
            })
            .collect()
    }
}

impl TermSearcher for LineIndexReader {
    fn num_docs(&self) -> u64 {
        self.searcher.num_docs()
    }

    fn search_term(&self, word: &str, limit: usize) -> Result<Hits, PipelineError> {
        let query = TermQuery::new(
            Term::from_field_text(self.text, word),
            IndexRecordOption::WithFreqs,
        );
        let (top, total_hits) = self
            .searcher
            .search(&query, &(TopDocs::with_limit(limit), Count))
            .map_err(|e| PipelineError::engine(Stage::Search, e))?;

        let doc_ids = top
            .into_iter()
            .map(|(_, address)| {
                let doc = self.fetch(address)?;
                self.line_of(&doc)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Hits {
            total_hits,
            doc_ids,
        })
    }

    fn document(&self, doc_id: u64) -> Result<Option<String>, PipelineError> {
        let query = TermQuery::new(
            Term::from_field_u64(self.line, doc_id),
            IndexRecordOption::Basic,
        );
        let top = self
            .searcher
            .search(&query, &TopDocs::with_limit(1))
            .map_err(|e| PipelineError::engine(Stage::Search, e))?;
        match top.first() {
            Some(&(_, address)) => Ok(Some(self.text_of(&self.fetch(address)?))),
            None => Ok(None),
        }
    }
}
