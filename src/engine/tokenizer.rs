// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tantivy tokenizer mirroring [`crate::tokenize::tokens`].
//!
//! Splits on whitespace and emits [`crate::tokenize::term`] of every word
//! that has one. Positions count emitted tokens only. Offsets
//! span the raw word in the original text.

use tantivy::tokenizer::{TextAnalyzer, Token, TokenStream, Tokenizer};

use crate::tokenize::term;

/// Name under which the tokenizer is registered on every index.
pub const CORPUS_TOKENIZER: &str = "linedex_corpus";

#[derive(Clone, Default)]
pub struct CorpusTokenizer {
    token: Token,
}

pub struct CorpusTokenStream<'a> {
    text: &'a str,
    words: std::str::SplitWhitespace<'a>,
    token: &'a mut Token,
}

impl Tokenizer for CorpusTokenizer {
    type TokenStream<'a> = CorpusTokenStream<'a>;

    fn token_stream<'a>(&'a mut self, text: &'a str) -> CorpusTokenStream<'a> {
        self.token.reset();
        CorpusTokenStream {
            text,
            words: text.split_whitespace(),
            token: &mut self.token,
        }
    }
}

impl TokenStream for CorpusTokenStream<'_> {
    fn advance(&mut self) -> bool {
        for word in self.words.by_ref() {
            let Some(normalized) = term(word) else {
                continue;
            };
            // `word` is a subslice of `text`
            let offset = word.as_ptr() as usize - self.text.as_ptr() as usize;
            self.token.offset_from = offset;
            self.token.offset_to = offset + word.len();
            self.token.position = self.token.position.wrapping_add(1);
            self.token.text = normalized;
            return true;
        }
        false
    }

    fn token(&self) -> &Token {
        self.token
    }

    fn token_mut(&mut self) -> &mut Token {
        self.token
    }
}

/// Analyzer wrapping [`CorpusTokenizer`], ready for registration.
pub fn corpus_analyzer() -> TextAnalyzer {
    TextAnalyzer::builder(CorpusTokenizer::default()).build()
}
