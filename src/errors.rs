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

//! # Bian Error Module
//!
//! This module defines the error type used throughout Bian.
//!
//! ## Error Handling Philosophy
//!
//! Every error is a construction error. Augmenters validate all of their
//! parameters when they are built; once built, `augment` and `augment_batch`
//! are total and never fail. Each variant names the parameter category that
//! was rejected so callers can correct the configuration and retry.
//!
//! ## Error Categories
//!
//! - **Selection**: `InvalidProbability`, `InvalidSelectionBounds`
//! - **Leaf inputs**: `MissingVocabulary`, `EmptyVocabulary`, `MissingLocale`,
//!   `InvalidLocale`, `UnknownAction`
//! - **Composition**: `TooFewMembers`, `EmptyChain`, `WeightCountMismatch`,
//!   `InvalidWeight`, `InvalidMember`
//! - **Validation**: configuration fields with the wrong shape
//! - **Serde**: configuration documents that fail to parse
//! - **Internal**: unexpected internal failures

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Bian.
pub type Result<T> = std::result::Result<T, BianError>;

/// Canonical error enumeration for Bian.
#[derive(Clone, Debug, PartialEq, Error, Serialize, Deserialize)]
pub enum BianError {
    /// Probability outside [0, 1], not a number, or missing where required.
    #[error("invalid probability: {message}")]
    InvalidProbability { message: String },

    /// Selection bounds with `min_count` greater than `max_count`.
    #[error("invalid selection bounds: min_count {min_count} > max_count {max_count}")]
    InvalidSelectionBounds { min_count: usize, max_count: usize },

    /// Word insert/substitute configured without a vocabulary.
    #[error("vocabulary is required for word '{action}'")]
    MissingVocabulary { action: String },

    /// Vocabulary supplied but empty.
    #[error("vocabulary must not be empty")]
    EmptyVocabulary,

    /// Language tag that is malformed or not in the charset table.
    #[error("invalid locale '{tag}': {message}")]
    InvalidLocale { tag: String, message: String },

    /// Char insert/substitute configured without a locale.
    #[error("locale is required for char '{action}'")]
    MissingLocale { action: String },

    /// Combinator with fewer members than it needs.
    #[error("'{augmenter}' requires at least {expected} augmenters, got {actual}")]
    TooFewMembers {
        augmenter: String,
        expected: usize,
        actual: usize,
    },

    /// Sequential augmenter without members.
    #[error("sequential augmenter requires at least one augmenter")]
    EmptyChain,

    /// Selector weights whose length differs from the member list.
    #[error("got {weights} weights for {members} augmenters")]
    WeightCountMismatch { weights: usize, members: usize },

    /// Selector weight that is negative, not finite, or not a number.
    #[error("invalid weight: {message}")]
    InvalidWeight { message: String },

    /// Combinator member that does not describe an augmenter.
    #[error("invalid member: {message}")]
    InvalidMember { message: String },

    /// Action name that matches none of insert/substitute/swap/delete.
    #[error("unknown action '{action}'")]
    UnknownAction { action: String },

    /// Configuration field with the wrong shape (e.g. stopwords that are not
    /// a list of strings).
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Wrapper for configuration parse failures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Catch-all variant for unexpected situations.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for BianError {
    fn from(err: serde_json::Error) -> Self {
        BianError::Serde(err.to_string())
    }
}

impl From<serde_yaml::Error> for BianError {
    fn from(err: serde_yaml::Error) -> Self {
        BianError::Serde(err.to_string())
    }
}

impl BianError {
    /// Helper to construct probability errors.
    pub fn probability<T: Into<String>>(message: T) -> Self {
        BianError::InvalidProbability {
            message: message.into(),
        }
    }

    /// Helper to construct locale errors.
    pub fn locale(tag: impl Into<String>, message: impl Into<String>) -> Self {
        BianError::InvalidLocale {
            tag: tag.into(),
            message: message.into(),
        }
    }

    /// Helper to construct weight errors.
    pub fn weight<T: Into<String>>(message: T) -> Self {
        BianError::InvalidWeight {
            message: message.into(),
        }
    }

    /// Helper to construct member errors.
    pub fn member<T: Into<String>>(message: T) -> Self {
        BianError::InvalidMember {
            message: message.into(),
        }
    }

    /// Helper to construct unknown action errors.
    pub fn action<T: Into<String>>(action: T) -> Self {
        BianError::UnknownAction {
            action: action.into(),
        }
    }

    /// Helper to construct validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        BianError::Validation {
            message: message.into(),
        }
    }

    /// Helper to construct internal errors.
    pub fn internal<T: Into<String>>(message: T) -> Self {
        BianError::Internal(message.into())
    }
}
