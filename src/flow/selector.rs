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

//! # Selector
//!
//! Draws one member per call and returns only that member's output. Weights
//! are relative; `WeightedIndex` normalizes them once at construction.

use std::sync::Arc;

use rand::distributions::{Distribution, WeightedIndex};
use rand::{Rng, RngCore};
use serde_json::Value;

use crate::augmenter::{BianAugmenter, BianSharedAugmenter};
use crate::builder::BianAugmenterBuilder;
use crate::errors::{BianError, Result};

#[derive(Clone, Debug)]
pub struct BianSelector {
    members: Vec<BianSharedAugmenter>,
    weights: Option<Vec<f64>>,
    distribution: Option<WeightedIndex<f64>>,
}

impl BianSelector {
    /// Creates a selector over at least two members, uniform when `weights`
    /// is `None`.
    pub fn new(members: Vec<BianSharedAugmenter>, weights: Option<Vec<f64>>) -> Result<Self> {
        if members.len() < 2 {
            return Err(BianError::TooFewMembers {
                augmenter: "flow.selector".into(),
                expected: 2,
                actual: members.len(),
            });
        }

        let distribution = match &weights {
            Some(weights) => {
                if weights.len() != members.len() {
                    return Err(BianError::WeightCountMismatch {
                        weights: weights.len(),
                        members: members.len(),
                    });
                }
                if let Some(bad) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
                    return Err(BianError::weight(format!(
                        "weights must be finite and non-negative, got {bad}"
                    )));
                }
                let distribution = WeightedIndex::new(weights)
                    .map_err(|err| BianError::weight(err.to_string()))?;
                Some(distribution)
            }
            None => None,
        };

        log::debug!(
            "flow.selector: {} members, weights={:?}",
            members.len(),
            weights
        );

        Ok(BianSelector {
            members,
            weights,
            distribution,
        })
    }

    pub fn members(&self) -> &[BianSharedAugmenter] {
        &self.members
    }

    pub fn weights(&self) -> Option<&[f64]> {
        self.weights.as_deref()
    }

    fn pick(&self, rng: &mut dyn RngCore) -> usize {
        match &self.distribution {
            Some(distribution) => distribution.sample(rng),
            None => rng.gen_range(0..self.members.len()),
        }
    }
}

impl BianAugmenter for BianSelector {
    fn name(&self) -> &'static str {
        "flow.selector"
    }

    fn augment_with_rng(&self, text: &str, rng: &mut dyn RngCore) -> String {
        let idx = self.pick(rng);
        self.members[idx].augment_with_rng(text, rng)
    }
}

/// Builds a `flow.selector` augmenter from `{augmenters: [node...], weights}`.
pub fn selector_factory(config: &Value, builder: &BianAugmenterBuilder) -> Result<BianSharedAugmenter> {
    let obj = config
        .as_object()
        .ok_or_else(|| BianError::validation("flow.selector config must be object"))?;
    let members = super::member_list(obj, "augmenters", "flow.selector", builder)?;

    let weights = match obj.get("weights") {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => Some(
            items
                .iter()
                .map(|item| {
                    item.as_f64()
                        .ok_or_else(|| BianError::weight(format!("weight must be a number, got {item}")))
                })
                .collect::<Result<Vec<f64>>>()?,
        ),
        Some(other) => {
            return Err(BianError::weight(format!(
                "flow.selector 'weights' must be an array, got {other}"
            )))
        }
    };

    Ok(Arc::new(BianSelector::new(members, weights)?))
}
