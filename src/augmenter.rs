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

//! # Bian Augmenter Module
//!
//! This module defines the trait every augmenter implements. Leaf augmenters
//! (words, chars) and combinators (sequential, selector, chance) are all used
//! through the same contract, so any augmenter can be nested inside any
//! combinator.
//!
//! ## Randomness
//!
//! `augment_with_rng` is the only method an implementation must provide. It
//! draws every random decision from the RNG it is handed, which lets
//! combinators thread one RNG through their members and lets callers make
//! runs reproducible. The remaining methods are provided:
//!
//! - `augment`: uses the calling thread's RNG
//! - `augment_batch`: one independent augmentation per element, in parallel
//!   when the `parallel` feature is enabled
//! - `augment_batch_with_rng`: sequential batch drawing from one caller RNG
//! - `augment_batch_seeded`: reproducible batch, element `i` is seeded with
//!   `seed + i`
//!
//! ## Implementing Custom Augmenters
//!
//! ```rust
//! use bian::BianAugmenter;
//! use rand::RngCore;
//!
//! #[derive(Debug)]
//! struct Shout;
//!
//! impl BianAugmenter for Shout {
//!     fn name(&self) -> &'static str {
//!         "custom.shout"
//!     }
//!
//!     fn augment_with_rng(&self, text: &str, _rng: &mut dyn RngCore) -> String {
//!         text.to_uppercase()
//!     }
//! }
//! ```

use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Shared, thread-safe handle to any augmenter.
pub type BianSharedAugmenter = Arc<dyn BianAugmenter>;

/// Contract that every Bian augmenter must fulfill.
///
/// Augmenters are immutable after construction. All methods take `&self`,
/// never fail, and never keep state between calls, so one instance can be
/// shared across threads and reused for any number of inputs.
pub trait BianAugmenter: std::fmt::Debug + Send + Sync {
    /// Registry name of the augmenter, used for logging and configuration.
    fn name(&self) -> &'static str;

    /// Augments a single text drawing randomness from `rng`.
    fn augment_with_rng(&self, text: &str, rng: &mut dyn RngCore) -> String;

    /// Augments a single text using the calling thread's RNG.
    fn augment(&self, text: &str) -> String {
        let mut rng = rand::thread_rng();
        self.augment_with_rng(text, &mut rng)
    }

    /// Augments each element independently.
    ///
    /// Accepts any slice of string-likes (`&[String]`, `&[&str]`, ...). The
    /// output has the same length and order as `texts`.
    fn augment_batch<S>(&self, texts: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
        Self: Sized,
    {
        log::trace!("{}: augmenting batch of {} texts", self.name(), texts.len());

        #[cfg(feature = "parallel")]
        {
            return texts.par_iter().map(|text| self.augment(text.as_ref())).collect();
        }

        #[cfg(not(feature = "parallel"))]
        {
            texts.iter().map(|text| self.augment(text.as_ref())).collect()
        }
    }

    /// Augments each element in order, drawing from a single caller RNG.
    fn augment_batch_with_rng<S>(&self, texts: &[S], rng: &mut dyn RngCore) -> Vec<String>
    where
        S: AsRef<str>,
        Self: Sized,
    {
        texts
            .iter()
            .map(|text| self.augment_with_rng(text.as_ref(), rng))
            .collect()
    }

    /// Augments each element with its own RNG seeded from `seed` and the
    /// element position.
    ///
    /// The same seed and input always produce the same output, with or
    /// without the `parallel` feature.
    fn augment_batch_seeded<S>(&self, texts: &[S], seed: u64) -> Vec<String>
    where
        S: AsRef<str> + Sync,
        Self: Sized,
    {
        let run = |(idx, text): (usize, &S)| {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(idx as u64));
            self.augment_with_rng(text.as_ref(), &mut rng)
        };

        #[cfg(feature = "parallel")]
        {
            return texts.par_iter().enumerate().map(run).collect();
        }

        #[cfg(not(feature = "parallel"))]
        {
            texts.iter().enumerate().map(run).collect()
        }
    }
}

impl<T: BianAugmenter + ?Sized> BianAugmenter for Arc<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn augment_with_rng(&self, text: &str, rng: &mut dyn RngCore) -> String {
        (**self).augment_with_rng(text, rng)
    }
}
