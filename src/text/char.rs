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

//! # Character Augmenter
//!
//! Two-level selection: words are picked first with the word parameters,
//! then characters inside each picked word with the char parameters.

use std::collections::HashSet;
use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::RngCore;
use serde_json::Value;

use super::action::BianTextAction;
use super::charset::BianLocaleCharset;
use super::doc::BianDoc;
use super::params::BianSelectionParams;
use super::selection;
use super::token::{BianToken, BianTokenKind};
use crate::augmenter::{BianAugmenter, BianSharedAugmenter};
use crate::builder::{self, BianAugmenterBuilder};
use crate::errors::{BianError, Result};

/// Character-level augmenter.
#[derive(Clone, Debug)]
pub struct BianCharAugmenter {
    action: BianTextAction,
    word_params: BianSelectionParams,
    char_params: BianSelectionParams,
    stopwords: HashSet<String>,
    charset: Option<BianLocaleCharset>,
}

impl BianCharAugmenter {
    /// Creates a character augmenter.
    ///
    /// Insert and substitute need a locale. A locale given to swap or delete
    /// is still resolved, so an unknown tag fails here either way.
    pub fn new(
        action: BianTextAction,
        word_params: BianSelectionParams,
        char_params: BianSelectionParams,
        stopwords: Option<HashSet<String>>,
        locale: Option<&str>,
    ) -> Result<Self> {
        let charset = locale.map(BianLocaleCharset::resolve).transpose()?;
        Self::with_charset(action, word_params, char_params, stopwords, charset)
    }

    /// Creates a character augmenter from an already resolved charset.
    pub fn with_charset(
        action: BianTextAction,
        word_params: BianSelectionParams,
        char_params: BianSelectionParams,
        stopwords: Option<HashSet<String>>,
        charset: Option<BianLocaleCharset>,
    ) -> Result<Self> {
        word_params.validate()?;
        char_params.validate()?;
        if action.requires_source() && charset.is_none() {
            return Err(BianError::MissingLocale {
                action: action.to_string(),
            });
        }

        log::debug!(
            "chars.random: action={}, word_params={:?}, char_params={:?}, locale={:?}",
            action,
            word_params,
            char_params,
            charset.as_ref().map(BianLocaleCharset::tag)
        );

        Ok(BianCharAugmenter {
            action,
            word_params,
            char_params,
            stopwords: stopwords.unwrap_or_default(),
            charset,
        })
    }

    pub fn random_delete(word_probability: f64, char_probability: f64) -> Result<Self> {
        Self::new(
            BianTextAction::Delete,
            BianSelectionParams::with_probability(word_probability)?,
            BianSelectionParams::with_probability(char_probability)?,
            None,
            None,
        )
    }

    pub fn random_swap(word_probability: f64, char_probability: f64) -> Result<Self> {
        Self::new(
            BianTextAction::Swap,
            BianSelectionParams::with_probability(word_probability)?,
            BianSelectionParams::with_probability(char_probability)?,
            None,
            None,
        )
    }

    pub fn random_insert(word_probability: f64, char_probability: f64, locale: &str) -> Result<Self> {
        Self::new(
            BianTextAction::Insert,
            BianSelectionParams::with_probability(word_probability)?,
            BianSelectionParams::with_probability(char_probability)?,
            None,
            Some(locale),
        )
    }

    pub fn random_substitute(word_probability: f64, char_probability: f64, locale: &str) -> Result<Self> {
        Self::new(
            BianTextAction::Substitute,
            BianSelectionParams::with_probability(word_probability)?,
            BianSelectionParams::with_probability(char_probability)?,
            None,
            Some(locale),
        )
    }

    pub fn action(&self) -> BianTextAction {
        self.action
    }

    pub fn word_params(&self) -> &BianSelectionParams {
        &self.word_params
    }

    pub fn char_params(&self) -> &BianSelectionParams {
        &self.char_params
    }

    pub fn stopwords(&self) -> &HashSet<String> {
        &self.stopwords
    }

    pub fn charset(&self) -> Option<&BianLocaleCharset> {
        self.charset.as_ref()
    }

    /// Applies the action to a tokenized document.
    pub fn augment_doc(&self, doc: &mut BianDoc, rng: &mut dyn RngCore) {
        let eligible = doc.eligible_words(&self.stopwords);
        let targets = selection::select_from(&eligible, &self.word_params, rng);

        for idx in targets {
            let chars: Vec<char> = doc.tokens()[idx].text().chars().collect();
            let offsets = selection::select(chars.len(), &self.char_params, rng);
            if offsets.is_empty() {
                continue;
            }
            let mutated = self.mutate(chars, offsets, rng);
            doc.tokens_mut()[idx] = BianToken::with_kind(mutated, BianTokenKind::Word);
        }
    }

    fn mutate(&self, mut chars: Vec<char>, mut offsets: Vec<usize>, rng: &mut dyn RngCore) -> String {
        match self.action {
            BianTextAction::Delete => {
                let drop: HashSet<usize> = offsets.into_iter().collect();
                chars
                    .into_iter()
                    .enumerate()
                    .filter(|(pos, _)| !drop.contains(pos))
                    .map(|(_, ch)| ch)
                    .collect()
            }
            BianTextAction::Swap => {
                if chars.len() < 2 {
                    return chars.into_iter().collect();
                }
                // Offsets come back in random order and are exchanged in
                // disjoint pairs. An odd one out trades places with a
                // neighbour that has not moved yet, the next one first.
                let mut moved = vec![false; chars.len()];
                let mut pairs = offsets.chunks_exact(2);
                for pair in &mut pairs {
                    chars.swap(pair[0], pair[1]);
                    moved[pair[0]] = true;
                    moved[pair[1]] = true;
                }
                if let [odd] = *pairs.remainder() {
                    let partner = [odd + 1, odd.wrapping_sub(1)]
                        .into_iter()
                        .find(|&pos| pos < chars.len() && !moved[pos]);
                    if let Some(partner) = partner {
                        chars.swap(odd, partner);
                    }
                }
                chars.into_iter().collect()
            }
            BianTextAction::Insert => {
                if let Some(charset) = &self.charset {
                    offsets.sort_unstable_by(|a, b| b.cmp(a));
                    for offset in offsets {
                        chars.insert(offset, charset.sample(rng));
                    }
                }
                chars.into_iter().collect()
            }
            BianTextAction::Substitute => {
                if let Some(charset) = &self.charset {
                    offsets.shuffle(rng);
                    for offset in offsets {
                        chars[offset] = charset.sample(rng);
                    }
                }
                chars.into_iter().collect()
            }
        }
    }
}

impl BianAugmenter for BianCharAugmenter {
    fn name(&self) -> &'static str {
        "chars.random"
    }

    fn augment_with_rng(&self, text: &str, rng: &mut dyn RngCore) -> String {
        let mut doc = BianDoc::new(text);
        self.augment_doc(&mut doc, rng);
        doc.to_string()
    }
}

/// Builds a `chars.random` augmenter from
/// `{action, word_params, char_params, stopwords, locale}`.
pub fn chars_random_factory(
    config: &Value,
    _builder: &BianAugmenterBuilder,
) -> Result<BianSharedAugmenter> {
    let obj = config
        .as_object()
        .ok_or_else(|| BianError::validation("chars.random config must be object"))?;

    let action = BianTextAction::from_value(obj.get("action"))?;
    let word_params = builder::selection_params(obj, "word_params")?;
    let char_params = builder::selection_params(obj, "char_params")?;
    let stopwords = builder::string_set(obj, "stopwords", "chars.random")?;
    let locale = match obj.get("locale") {
        None | Some(Value::Null) => None,
        Some(Value::String(tag)) => Some(tag.as_str()),
        Some(other) => {
            return Err(BianError::locale(
                other.to_string(),
                "chars.random 'locale' must be a string",
            ))
        }
    };

    Ok(Arc::new(BianCharAugmenter::new(
        action,
        word_params,
        char_params,
        stopwords,
        locale,
    )?))
}
