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

//! # Bian Augmenter Builder Module
//!
//! Builds augmenter trees from configuration values through a registry of
//! named factories.
//!
//! ## Configuration Format
//!
//! A node names a registered augmenter and carries its config:
//!
//! ```json
//! {
//!   "augmenter": "flow.chance",
//!   "config": {
//!     "probability": 0.5,
//!     "augmenter": {
//!       "augmenter": "words.random",
//!       "config": {"action": "delete", "word_params": [0.3, 1, null]}
//!     }
//!   }
//! }
//! ```
//!
//! A top-level array of nodes is built as a `flow.sequential` chain.
//!
//! ## Default Augmenters
//!
//! | Name | Config keys |
//! |------|-------------|
//! | `words.random` | `action`, `word_params`, `stopwords`, `vocabulary` |
//! | `chars.random` | `action`, `word_params`, `char_params`, `stopwords`, `locale` |
//! | `flow.sequential` | `augmenters` |
//! | `flow.selector` | `augmenters`, `weights` |
//! | `flow.chance` | `augmenter`, `probability` |
//!
//! Selection parameters are a number, `[probability, min, max]` or
//! `{probability, min_count, max_count}`; absent parameters default to
//! probability 0.3.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::augmenter::BianSharedAugmenter;
use crate::errors::{BianError, Result};
use crate::flow::BianSequential;
use crate::text::BianSelectionParams;

/// Factory that turns a node's `config` into an augmenter. The builder is
/// passed along so combinators can build their member nodes.
pub type BianAugmenterFactory = fn(&Value, &BianAugmenterBuilder) -> Result<BianSharedAugmenter>;

/// Registry of augmenter factories.
#[derive(Clone, Default)]
pub struct BianAugmenterBuilder {
    factories: HashMap<String, BianAugmenterFactory>,
}

impl std::fmt::Debug for BianAugmenterBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BianAugmenterBuilder")
            .field("factories", &self.names())
            .finish()
    }
}

impl BianAugmenterBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        BianAugmenterBuilder {
            factories: HashMap::new(),
        }
    }

    /// Creates a builder pre-loaded with the bundled augmenters.
    pub fn with_defaults() -> Self {
        let mut builder = Self::new();
        builder.register_defaults();
        builder
    }

    /// Registers a factory for the given augmenter name, replacing any
    /// previous one.
    pub fn register(&mut self, name: impl Into<String>, factory: BianAugmenterFactory) {
        self.factories.insert(name.into(), factory);
    }

    fn register_defaults(&mut self) {
        self.register(
            "words.random",
            crate::text::word::words_random_factory as BianAugmenterFactory,
        );
        self.register(
            "chars.random",
            crate::text::char::chars_random_factory as BianAugmenterFactory,
        );
        self.register(
            "flow.sequential",
            crate::flow::sequential::sequential_factory as BianAugmenterFactory,
        );
        self.register(
            "flow.selector",
            crate::flow::selector::selector_factory as BianAugmenterFactory,
        );
        self.register(
            "flow.chance",
            crate::flow::chance::chance_factory as BianAugmenterFactory,
        );
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Builds the augmenter registered as `name` from its config.
    pub fn build(&self, name: &str, config: &Value) -> Result<BianSharedAugmenter> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| BianError::member(format!("unknown augmenter '{name}'")))?;
        log::debug!("building augmenter '{name}'");
        factory(config, self)
    }

    /// Builds a single `{"augmenter": name, "config": {...}}` node.
    pub fn build_node(&self, node: &Value) -> Result<BianSharedAugmenter> {
        let object = node
            .as_object()
            .ok_or_else(|| BianError::member(format!("augmenter node must be an object, got {node}")))?;

        let name = object
            .get("augmenter")
            .and_then(Value::as_str)
            .ok_or_else(|| BianError::member("augmenter node missing string 'augmenter'"))?;

        let config = object.get("config").cloned().unwrap_or(Value::Null);
        self.build(name, &config)
    }

    /// Builds a node, or a sequential chain when given an array of nodes.
    pub fn build_from_config(&self, config: &Value) -> Result<BianSharedAugmenter> {
        match config {
            Value::Array(steps) => {
                let members = steps
                    .iter()
                    .enumerate()
                    .map(|(index, step)| {
                        self.build_node(step).map_err(|err| match err {
                            BianError::InvalidMember { message } => {
                                BianError::member(format!("step #{index}: {message}"))
                            }
                            other => other,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Arc::new(BianSequential::new(members)?))
            }
            node => self.build_node(node),
        }
    }

    /// Parses a JSON document and builds it with [`Self::build_from_config`].
    pub fn build_from_json_str(&self, json: &str) -> Result<BianSharedAugmenter> {
        let value: Value = serde_json::from_str(json)?;
        self.build_from_config(&value)
    }

    /// Parses a YAML document and builds it with [`Self::build_from_config`].
    pub fn build_from_yaml_str(&self, yaml: &str) -> Result<BianSharedAugmenter> {
        let value: Value = serde_yaml::from_str(yaml)?;
        self.build_from_config(&value)
    }
}

/// Reads selection parameters under `key`, defaulting when absent.
pub(crate) fn selection_params(obj: &Map<String, Value>, key: &str) -> Result<BianSelectionParams> {
    match obj.get(key) {
        None => Ok(BianSelectionParams::default()),
        Some(value) => BianSelectionParams::from_value(value),
    }
}

/// Reads an optional list of strings under `key`.
pub(crate) fn string_list(
    obj: &Map<String, Value>,
    key: &str,
    augmenter: &str,
) -> Result<Option<Vec<String>>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    BianError::validation(format!("{augmenter} '{key}' entries must be strings"))
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Some),
        Some(_) => Err(BianError::validation(format!(
            "{augmenter} '{key}' must be an array of strings"
        ))),
    }
}

/// Reads an optional set of strings under `key`.
pub(crate) fn string_set(
    obj: &Map<String, Value>,
    key: &str,
    augmenter: &str,
) -> Result<Option<HashSet<String>>> {
    Ok(string_list(obj, key, augmenter)?.map(|items| items.into_iter().collect()))
}
