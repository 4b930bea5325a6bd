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

//! # Flow Module
//!
//! Combinators that compose arbitrary augmenters. Members are shared
//! `Arc<dyn BianAugmenter>` handles and a combinator is itself an augmenter,
//! so trees of any depth can be built.
//!
//! - **sequential**: Folds the text through every member in order
//! - **selector**: Applies exactly one member, drawn uniformly or by weight
//! - **chance**: Applies its member with a fixed probability

pub mod chance;
pub mod selector;
pub mod sequential;

pub use chance::BianChance;
pub use selector::BianSelector;
pub use sequential::BianSequential;

use serde_json::{Map, Value};

use crate::augmenter::BianSharedAugmenter;
use crate::builder::BianAugmenterBuilder;
use crate::errors::{BianError, Result};

/// Builds every node of the array stored under `key`.
fn member_list(
    obj: &Map<String, Value>,
    key: &str,
    augmenter: &str,
    builder: &BianAugmenterBuilder,
) -> Result<Vec<BianSharedAugmenter>> {
    obj.get(key)
        .and_then(Value::as_array)
        .ok_or_else(|| BianError::member(format!("{augmenter} requires array '{key}'")))?
        .iter()
        .map(|node| builder.build_node(node))
        .collect()
}
