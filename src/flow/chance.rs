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

use std::sync::Arc;

use rand::{Rng, RngCore};
use serde_json::Value;

use crate::augmenter::{BianAugmenter, BianSharedAugmenter};
use crate::builder::BianAugmenterBuilder;
use crate::errors::{BianError, Result};

/// Applies the inner augmenter with probability `probability`, otherwise
/// returns the text unchanged.
#[derive(Clone, Debug)]
pub struct BianChance {
    inner: BianSharedAugmenter,
    probability: f64,
}

impl BianChance {
    pub fn new(inner: BianSharedAugmenter, probability: f64) -> Result<Self> {
        if probability.is_nan() || !(0.0..=1.0).contains(&probability) {
            return Err(BianError::probability(format!(
                "flow.chance probability must be in [0, 1], got {probability}"
            )));
        }
        log::debug!("flow.chance: {} with probability {}", inner.name(), probability);
        Ok(BianChance { inner, probability })
    }

    pub fn inner(&self) -> &BianSharedAugmenter {
        &self.inner
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl BianAugmenter for BianChance {
    fn name(&self) -> &'static str {
        "flow.chance"
    }

    fn augment_with_rng(&self, text: &str, rng: &mut dyn RngCore) -> String {
        if rng.gen_bool(self.probability) {
            self.inner.augment_with_rng(text, rng)
        } else {
            text.to_string()
        }
    }
}

/// Builds a `flow.chance` augmenter from `{augmenter: node, probability}`.
pub fn chance_factory(config: &Value, builder: &BianAugmenterBuilder) -> Result<BianSharedAugmenter> {
    let obj = config
        .as_object()
        .ok_or_else(|| BianError::validation("flow.chance config must be object"))?;

    let node = obj
        .get("augmenter")
        .ok_or_else(|| BianError::member("flow.chance requires 'augmenter'"))?;
    let inner = builder.build_node(node)?;

    let probability = obj
        .get("probability")
        .and_then(Value::as_f64)
        .ok_or_else(|| BianError::probability("flow.chance requires numeric 'probability'"))?;

    Ok(Arc::new(BianChance::new(inner, probability)?))
}
