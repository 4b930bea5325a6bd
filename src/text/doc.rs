//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Bian.
//! The Bian project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Documents
//!
//! A `BianDoc` is a text split into tokens. Augmenters mutate the token list
//! and render it back; untouched tokens come out byte for byte, so
//! `BianDoc::new(text).to_string() == text` for any input.
//!
//! ## Tokenization Rules
//!
//! Text is cut on Unicode word boundaries (UAX #29):
//!
//! - Letters, digits, combining marks and in-word apostrophes stay in one
//!   segment (`don't`, `வணக்கம்`, `e\u{301}cole`). Hyphens split.
//! - Every Han or Hiragana character is its own segment.
//! - Each remaining punctuation mark or symbol is its own segment.
//!
//! Adjacent whitespace segments are merged into one `Space` token; every
//! other segment is classified by [`BianToken::new`].

use std::collections::HashSet;
use std::fmt;

use unicode_segmentation::UnicodeSegmentation;

use super::token::{BianToken, BianTokenKind};

/// Tokenized text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BianDoc {
    tokens: Vec<BianToken>,
}

impl BianDoc {
    /// Tokenizes `text`.
    pub fn new(text: &str) -> Self {
        let mut tokens: Vec<BianToken> = Vec::new();

        for segment in text.split_word_bounds() {
            if segment.chars().all(char::is_whitespace) {
                if let Some(last) = tokens.last_mut().filter(|token| token.is_space()) {
                    *last = BianToken::with_kind(
                        format!("{}{segment}", last.text()),
                        BianTokenKind::Space,
                    );
                    continue;
                }
                tokens.push(BianToken::with_kind(segment, BianTokenKind::Space));
            } else {
                tokens.push(BianToken::new(segment));
            }
        }

        BianDoc { tokens }
    }

    pub fn from_tokens(tokens: Vec<BianToken>) -> Self {
        BianDoc { tokens }
    }

    pub fn tokens(&self) -> &[BianToken] {
        &self.tokens
    }

    pub fn tokens_mut(&mut self) -> &mut Vec<BianToken> {
        &mut self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of `Word` tokens.
    pub fn word_count(&self) -> usize {
        self.tokens.iter().filter(|token| token.is_word()).count()
    }

    /// Texts of the `Word` tokens in order.
    pub fn words(&self) -> Vec<&str> {
        self.tokens
            .iter()
            .filter(|token| token.is_word())
            .map(BianToken::text)
            .collect()
    }

    /// Token positions of the words eligible for mutation: `Word` tokens
    /// whose text is not a stopword.
    pub fn eligible_words(&self, stopwords: &HashSet<String>) -> Vec<usize> {
        self.tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| token.is_word() && !stopwords.contains(token.text()))
            .map(|(idx, _)| idx)
            .collect()
    }
}

impl fmt::Display for BianDoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            f.write_str(token.text())?;
        }
        Ok(())
    }
}
