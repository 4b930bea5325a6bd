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

//! # Text Module
//!
//! Leaf augmenters and the pieces they are built from.
//!
//! - **token / doc**: Lossless tokenizer splitting text into word, space and
//!   special tokens
//! - **params / selection**: Selection parameters and the uniform subset
//!   sampler that decides which units are mutated
//! - **action**: The insert/substitute/swap/delete action enum
//! - **charset**: Locale tag resolution to character inventories
//! - **word**: Word-level augmenter
//! - **char**: Character-level augmenter

pub mod action;
pub mod char;
pub mod charset;
pub mod doc;
pub mod params;
pub mod selection;
pub mod token;
pub mod word;

pub use action::BianTextAction;
pub use char::BianCharAugmenter;
pub use charset::BianLocaleCharset;
pub use doc::BianDoc;
pub use params::{BianSelectionParams, DEFAULT_PROBABILITY};
pub use token::{BianToken, BianTokenKind};
pub use word::BianWordAugmenter;
