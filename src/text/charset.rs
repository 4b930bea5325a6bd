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

//! # Locale Charsets
//!
//! Resolves a language tag such as `en`, `ru_RU` or `sr-Cyrl-ME` to the main
//! exemplar characters of that locale in CLDR, used by character insert and
//! substitute to synthesize new characters.
//!
//! Tags are parsed as Unicode locale identifiers (`-` or `_` separated,
//! case-insensitive). Data lookup follows CLDR locale fallback, so region
//! and variants narrow the data only where CLDR has a specific set
//! (`sr-Latn-ME` uses `sr-Latn`). A tag whose fallback chain ends at the
//! root locale has no alphabet and is rejected; this covers unknown
//! languages as well as scripts a language is not written in (`en-Cyrl`).

use icu_locid::subtags::Variants;
use icu_locid::{LanguageIdentifier, Locale};
use icu_locid_transform::LocaleExpander;
use icu_properties::exemplar_chars;
use rand::{Rng, RngCore};

use crate::errors::{BianError, Result};

/// Character inventory resolved from a language tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BianLocaleCharset {
    tag: String,
    language: String,
    script: Option<String>,
    chars: Vec<char>,
}

impl BianLocaleCharset {
    /// Resolves a language tag to the main exemplar characters of its
    /// locale.
    pub fn resolve(tag: &str) -> Result<Self> {
        let locale = Locale::try_from_bytes(tag.trim().as_bytes())
            .map_err(|err| BianError::locale(tag, format!("malformed language tag: {err}")))?;

        let mut chars = main_exemplars(tag, &locale.id)?;
        if chars.is_empty() && (locale.id.region.is_some() || !locale.id.variants.is_empty()) {
            // CLDR keeps a non-default script only with its likely region
            // (`sr-Cyrl-ME` falls back to root); retry without region.
            let broad = LanguageIdentifier {
                language: locale.id.language,
                script: locale.id.script,
                region: None,
                variants: Variants::new(),
            };
            chars = main_exemplars(tag, &broad)?;
        }
        if chars.is_empty() {
            return Err(BianError::locale(
                tag,
                format!("no alphabet for '{}'", locale.id),
            ));
        }

        let mut likely = locale.id.clone();
        LocaleExpander::new_extended().maximize(&mut likely);
        let script = likely.script.map(|script| script.as_str().to_string());

        log::debug!(
            "resolved locale '{}' to {} {} characters",
            tag,
            chars.len(),
            script.as_deref().unwrap_or("unknown-script")
        );

        Ok(BianLocaleCharset {
            tag: tag.to_string(),
            language: locale.id.language.as_str().to_string(),
            script,
            chars,
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Normalized language subtag, e.g. `sr` for `SR_latn`.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// ISO 15924 code of the script the tag is written in, explicit or
    /// inferred from likely subtags (`sr` is `Cyrl`, `zh-TW` is `Hant`).
    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    /// Characters in code point order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false for a resolved charset.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.binary_search(&ch).is_ok()
    }

    /// Draws one character uniformly.
    pub fn sample(&self, rng: &mut dyn RngCore) -> char {
        self.chars[rng.gen_range(0..self.chars.len())]
    }
}

/// Single-character main exemplars in code point order. Multi-character
/// exemplars such as "ch" are skipped.
fn main_exemplars(tag: &str, id: &LanguageIdentifier) -> Result<Vec<char>> {
    let exemplars = exemplar_chars::exemplars_main(&id.into())
        .map_err(|err| BianError::locale(tag, format!("no character data: {err}")))?;
    let chars = exemplars
        .to_code_point_inversion_list_string_list()
        .code_points()
        .iter_chars()
        .collect();
    Ok(chars)
}
