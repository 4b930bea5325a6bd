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

use rand::RngCore;
use serde_json::Value;

use crate::augmenter::{BianAugmenter, BianSharedAugmenter};
use crate::builder::BianAugmenterBuilder;
use crate::errors::{BianError, Result};

/// Applies every member in order, feeding each the previous output.
#[derive(Clone, Debug)]
pub struct BianSequential {
    members: Vec<BianSharedAugmenter>,
}

impl BianSequential {
    pub fn new(members: Vec<BianSharedAugmenter>) -> Result<Self> {
        if members.is_empty() {
            return Err(BianError::EmptyChain);
        }
        log::debug!(
            "flow.sequential: [{}]",
            members.iter().map(|member| member.name()).collect::<Vec<_>>().join(", ")
        );
        Ok(BianSequential { members })
    }

    pub fn members(&self) -> &[BianSharedAugmenter] {
        &self.members
    }
}

impl BianAugmenter for BianSequential {
    fn name(&self) -> &'static str {
        "flow.sequential"
    }

    fn augment_with_rng(&self, text: &str, rng: &mut dyn RngCore) -> String {
        let mut current = text.to_string();
        for member in &self.members {
            current = member.augment_with_rng(&current, rng);
        }
        current
    }
}

/// Builds a `flow.sequential` augmenter from `{augmenters: [node...]}`.
pub fn sequential_factory(config: &Value, builder: &BianAugmenterBuilder) -> Result<BianSharedAugmenter> {
    let obj = config
        .as_object()
        .ok_or_else(|| BianError::validation("flow.sequential config must be object"))?;
    let members = super::member_list(obj, "augmenters", "flow.sequential", builder)?;
    Ok(Arc::new(BianSequential::new(members)?))
}
