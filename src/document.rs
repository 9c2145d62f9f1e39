// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::corpus::CorpusLine;

/// Name of the stored, searchable field holding the verbatim line.
pub const TEXT_FIELD: &str = "text";

/// Name of the field holding the line's `docID`.
pub const LINE_FIELD: &str = "line";

/// One indexed document per non-empty corpus line.
///
/// `text` is stored byte-for-byte; normalization only applies to the terms
/// the engine derives from it.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LineDocument {
    pub doc_id: u64,
    pub text: String,
}

impl LineDocument {
    pub fn new(doc_id: u64, text: impl Into<String>) -> Self {
        Self {
            doc_id,
            text: text.into(),
        }
    }
}

impl From<CorpusLine> for LineDocument {
    fn from(line: CorpusLine) -> Self {
        Self {
            doc_id: line.doc_id,
            text: line.text,
        }
    }
}
