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

//! # Tokens
//!
//! Token kinds. A token is a word-bounded segment of text classified by
//! the characters it holds.

use std::fmt;

/// Category of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BianTokenKind {
    /// Segment containing at least one alphabetic character. Han and kana
    /// characters are alphabetic, so each ideograph is a word of its own.
    Word,
    /// Run of whitespace.
    Space,
    /// Punctuation, symbols, emoji and digit-only segments.
    Special,
}

/// A slice of text with its kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BianToken {
    kind: BianTokenKind,
    text: String,
}

impl BianToken {
    /// Creates a token and derives its kind from the text.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let kind = classify(&text);
        BianToken { kind, text }
    }

    pub fn with_kind(text: impl Into<String>, kind: BianTokenKind) -> Self {
        BianToken {
            kind,
            text: text.into(),
        }
    }

    pub fn space() -> Self {
        BianToken::with_kind(" ", BianTokenKind::Space)
    }

    pub fn kind(&self) -> BianTokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_word(&self) -> bool {
        self.kind == BianTokenKind::Word
    }

    pub fn is_space(&self) -> bool {
        self.kind == BianTokenKind::Space
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Display for BianToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn classify(text: &str) -> BianTokenKind {
    if !text.is_empty() && text.chars().all(char::is_whitespace) {
        BianTokenKind::Space
    } else if text.chars().any(char::is_alphabetic) {
        BianTokenKind::Word
    } else {
        BianTokenKind::Special
    }
}
