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

//! # Bian Core Library
//!
//! Bian produces randomized, controllably-perturbed variants of text for use
//! as synthetic training data. Words or characters are inserted, substituted,
//! swapped or deleted, and individual augmenters can be chained, randomly
//! chosen among, or applied with a probability.
//!
//! ## Module Overview
//!
//! - **errors**: The crate error enum and result alias
//! - **augmenter**: The `BianAugmenter` trait shared by every augmenter
//! - **text**: Tokenization, selection parameters, locale charsets and the
//!   word/char leaf augmenters
//! - **flow**: Sequential, selector and chance combinators
//! - **builder**: Registry that builds augmenter trees from JSON/YAML configs
//!
//! ## Feature Flags
//!
//! - `parallel`: Augments batch elements in parallel with Rayon
//! - `full`: Enables all features
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use bian::{BianAugmenter, BianCharAugmenter, BianSequential, BianWordAugmenter};
//!
//! let words = BianWordAugmenter::random_delete(0.3)?;
//! let chars = BianCharAugmenter::random_delete(0.3, 0.3)?;
//! let chain = BianSequential::new(vec![Arc::new(words), Arc::new(chars)])?;
//!
//! let texts = vec!["word some test".to_string(), "Some sentence".to_string()];
//! let augmented = chain.augment_batch(&texts);
//! assert_eq!(augmented.len(), 2);
//! ```
//!
//! ## Error Handling
//!
//! Every parameter is validated when an augmenter is constructed, so
//! construction returns `Result<T, BianError>` while `augment` and
//! `augment_batch` are infallible.

pub mod augmenter;
pub mod builder;
pub mod errors;
pub mod flow;
pub mod text;

pub use augmenter::{BianAugmenter, BianSharedAugmenter};
pub use builder::{BianAugmenterBuilder, BianAugmenterFactory};
pub use errors::{BianError, Result};
pub use flow::{BianChance, BianSelector, BianSequential};
pub use text::{
    BianCharAugmenter, BianDoc, BianLocaleCharset, BianSelectionParams, BianTextAction,
    BianToken, BianTokenKind, BianWordAugmenter,
};
