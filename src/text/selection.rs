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

//! # Selection Policy
//!
//! Uniform sampling without replacement of the positions an augmenter will
//! mutate.

use rand::seq::index;
use rand::RngCore;

use super::params::BianSelectionParams;

/// Draws `params.count(n)` distinct indices from `0..n`.
///
/// Every subset of the right size is equally likely. The returned order is
/// random; callers that need positional order sort the result.
pub fn select(n: usize, params: &BianSelectionParams, rng: &mut dyn RngCore) -> Vec<usize> {
    let amount = params.count(n);
    if amount == 0 {
        return Vec::new();
    }
    index::sample(rng, n, amount).into_vec()
}

/// Selects a subset of `candidates` with [`select`].
pub fn select_from<T: Copy>(
    candidates: &[T],
    params: &BianSelectionParams,
    rng: &mut dyn RngCore,
) -> Vec<T> {
    select(candidates.len(), params, rng)
        .into_iter()
        .map(|idx| candidates[idx])
        .collect()
}
