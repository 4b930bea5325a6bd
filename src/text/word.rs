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

//! # Word Augmenter
//!
//! Inserts, substitutes, swaps or deletes whole words. Targets are chosen
//! among the eligible words (word tokens that are not stopwords) of the
//! unmodified text.
//!
//! - **Delete** removes each target together with the whitespace after it,
//!   or before it when nothing follows.
//! - **Swap** rotates the targets' contents along a random cycle. A single
//!   target trades places with another eligible word.
//! - **Insert** puts a vocabulary word and one space before each target.
//! - **Substitute** replaces each target with a vocabulary word.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use serde_json::Value;

use super::action::BianTextAction;
use super::doc::BianDoc;
use super::params::BianSelectionParams;
use super::selection;
use super::token::BianToken;
use crate::augmenter::{BianAugmenter, BianSharedAugmenter};
use crate::builder::{self, BianAugmenterBuilder};
use crate::errors::{BianError, Result};

/// Word-level augmenter.
#[derive(Clone, Debug)]
pub struct BianWordAugmenter {
    action: BianTextAction,
    word_params: BianSelectionParams,
    stopwords: HashSet<String>,
    vocabulary: Option<Vec<String>>,
}

impl BianWordAugmenter {
    /// Creates a word augmenter.
    ///
    /// Insert and substitute need a non-empty vocabulary. Every entry must
    /// tokenize to exactly one word, so insert grows the word count by one
    /// per target. A vocabulary given to swap or delete is validated and
    /// otherwise unused.
    pub fn new(
        action: BianTextAction,
        word_params: BianSelectionParams,
        stopwords: Option<HashSet<String>>,
        vocabulary: Option<Vec<String>>,
    ) -> Result<Self> {
        word_params.validate()?;
        match &vocabulary {
            Some(words) if words.is_empty() => return Err(BianError::EmptyVocabulary),
            None if action.requires_source() => {
                return Err(BianError::MissingVocabulary {
                    action: action.to_string(),
                })
            }
            _ => {}
        }
        if let Some(entry) = vocabulary.iter().flatten().find(|entry| !is_single_word(entry)) {
            return Err(BianError::validation(format!(
                "vocabulary entry {entry:?} is not a single word"
            )));
        }

        log::debug!(
            "words.random: action={}, params={:?}, stopwords={}, vocabulary={}",
            action,
            word_params,
            stopwords.as_ref().map_or(0, HashSet::len),
            vocabulary.as_ref().map_or(0, Vec::len)
        );

        Ok(BianWordAugmenter {
            action,
            word_params,
            stopwords: stopwords.unwrap_or_default(),
            vocabulary,
        })
    }

    pub fn random_delete(probability: f64) -> Result<Self> {
        Self::new(
            BianTextAction::Delete,
            BianSelectionParams::with_probability(probability)?,
            None,
            None,
        )
    }

    pub fn random_swap(probability: f64) -> Result<Self> {
        Self::new(
            BianTextAction::Swap,
            BianSelectionParams::with_probability(probability)?,
            None,
            None,
        )
    }

    pub fn random_insert(probability: f64, vocabulary: Vec<String>) -> Result<Self> {
        Self::new(
            BianTextAction::Insert,
            BianSelectionParams::with_probability(probability)?,
            None,
            Some(vocabulary),
        )
    }

    pub fn random_substitute(probability: f64, vocabulary: Vec<String>) -> Result<Self> {
        Self::new(
            BianTextAction::Substitute,
            BianSelectionParams::with_probability(probability)?,
            None,
            Some(vocabulary),
        )
    }

    pub fn action(&self) -> BianTextAction {
        self.action
    }

    pub fn word_params(&self) -> &BianSelectionParams {
        &self.word_params
    }

    pub fn stopwords(&self) -> &HashSet<String> {
        &self.stopwords
    }

    pub fn vocabulary(&self) -> Option<&[String]> {
        self.vocabulary.as_deref()
    }

    /// Applies the action to a tokenized document.
    pub fn augment_doc(&self, doc: &mut BianDoc, rng: &mut dyn RngCore) {
        let eligible = doc.eligible_words(&self.stopwords);
        match self.action {
            BianTextAction::Delete => self.delete(doc, &eligible, rng),
            BianTextAction::Swap => self.swap(doc, &eligible, rng),
            BianTextAction::Insert => self.insert(doc, &eligible, rng),
            BianTextAction::Substitute => self.substitute(doc, &eligible, rng),
        }
    }

    fn delete(&self, doc: &mut BianDoc, eligible: &[usize], rng: &mut dyn RngCore) {
        let mut targets = selection::select_from(eligible, &self.word_params, rng);
        if targets.is_empty() {
            return;
        }
        // Right to left, so a run of deleted words at the end of the text
        // hands the separator to its left down the run.
        targets.sort_unstable_by(|a, b| b.cmp(a));

        let tokens = doc.tokens_mut();
        let mut removed = vec![false; tokens.len()];
        for idx in targets {
            removed[idx] = true;
            let next = idx + 1;
            if next < tokens.len() && tokens[next].is_space() && !removed[next] {
                removed[next] = true;
            } else if idx > 0 && tokens[idx - 1].is_space() && !removed[idx - 1] {
                removed[idx - 1] = true;
            }
        }

        let mut flags = removed.into_iter();
        tokens.retain(|_| !flags.next().unwrap_or(false));
    }

    fn swap(&self, doc: &mut BianDoc, eligible: &[usize], rng: &mut dyn RngCore) {
        if eligible.len() < 2 {
            return;
        }
        let mut targets = selection::select_from(eligible, &self.word_params, rng);
        let tokens = doc.tokens_mut();

        match targets.len() {
            0 => {}
            1 => {
                let target = targets[0];
                let others: Vec<usize> = eligible.iter().copied().filter(|&idx| idx != target).collect();
                let partner = others[rng.gen_range(0..others.len())];
                tokens.swap(target, partner);
            }
            _ => {
                targets.shuffle(rng);
                let contents: Vec<BianToken> = targets.iter().map(|&idx| tokens[idx].clone()).collect();
                for (pos, &idx) in targets.iter().enumerate() {
                    tokens[idx] = contents[(pos + 1) % contents.len()].clone();
                }
            }
        }
    }

    fn insert(&self, doc: &mut BianDoc, eligible: &[usize], rng: &mut dyn RngCore) {
        let Some(vocabulary) = self.vocabulary.as_deref() else {
            return;
        };
        let mut targets = selection::select_from(eligible, &self.word_params, rng);
        // Descending so earlier positions stay valid.
        targets.sort_unstable_by(|a, b| b.cmp(a));

        let tokens = doc.tokens_mut();
        for idx in targets {
            if let Some(word) = vocabulary.choose(rng) {
                tokens.splice(idx..idx, [BianToken::new(word.as_str()), BianToken::space()]);
            }
        }
    }

    fn substitute(&self, doc: &mut BianDoc, eligible: &[usize], rng: &mut dyn RngCore) {
        let Some(vocabulary) = self.vocabulary.as_deref() else {
            return;
        };
        let targets = selection::select_from(eligible, &self.word_params, rng);

        let tokens = doc.tokens_mut();
        for idx in targets {
            if let Some(word) = vocabulary.choose(rng) {
                tokens[idx] = BianToken::new(word.as_str());
            }
        }
    }
}

impl BianAugmenter for BianWordAugmenter {
    fn name(&self) -> &'static str {
        "words.random"
    }

    fn augment_with_rng(&self, text: &str, rng: &mut dyn RngCore) -> String {
        let mut doc = BianDoc::new(text);
        self.augment_doc(&mut doc, rng);
        doc.to_string()
    }
}

fn is_single_word(entry: &str) -> bool {
    matches!(BianDoc::new(entry).tokens(), [token] if token.is_word())
}

/// Builds a `words.random` augmenter from
/// `{action, word_params, stopwords, vocabulary}`.
pub fn words_random_factory(
    config: &Value,
    _builder: &BianAugmenterBuilder,
) -> Result<BianSharedAugmenter> {
    let obj = config
        .as_object()
        .ok_or_else(|| BianError::validation("words.random config must be object"))?;

    let action = BianTextAction::from_value(obj.get("action"))?;
    let word_params = builder::selection_params(obj, "word_params")?;
    let stopwords = builder::string_set(obj, "stopwords", "words.random")?;
    let vocabulary = builder::string_list(obj, "vocabulary", "words.random")?;

    Ok(std::sync::Arc::new(BianWordAugmenter::new(
        action,
        word_params,
        stopwords,
        vocabulary,
    )?))
}
