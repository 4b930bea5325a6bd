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

use bian::{BianError, BianLocaleCharset};

#[test]
fn accepts_well_formed_tags() {
    for tag in [
        "en",
        "de",
        "ja-JP",
        "zh",
        "zh-Hant-TW",
        "sr-Latn-RS",
        "sr-Cyrl",
        "sr-Cyrl-ME",
        "jv-Latn",
        "ca-ES-valencia",
        "en_US_POSIX",
        "uz_Latn_UZ",
        "ru_RU",
        "es-419",
        "EN-us",
    ] {
        let charset = BianLocaleCharset::resolve(tag).unwrap_or_else(|err| panic!("{tag}: {err}"));
        assert!(!charset.is_empty(), "{tag}");
        assert_eq!(charset.tag(), tag);
    }
}

#[test]
fn rejects_malformed_tags() {
    for tag in ["", "invalid", "123", "!@#", "sr-Latn-", "sr-La!!!tn-RS", "e", "en--US"] {
        assert!(
            matches!(BianLocaleCharset::resolve(tag), Err(BianError::InvalidLocale { .. })),
            "{tag} should be rejected"
        );
    }
}

#[test]
fn rejects_unknown_languages() {
    for tag in ["xx", "qaa", "und", "en-Cyrl", "en-Cyrl-US"] {
        assert!(
            matches!(BianLocaleCharset::resolve(tag), Err(BianError::InvalidLocale { .. })),
            "{tag} should be rejected"
        );
    }
}

#[test]
fn alphabets_match_the_language() {
    let de = BianLocaleCharset::resolve("de").unwrap();
    for ch in ['a', 'z', 'ä', 'ö', 'ü', 'ß'] {
        assert!(de.contains(ch), "{ch}");
    }
    assert_eq!(de.len(), 30);

    let uz_cyrl = BianLocaleCharset::resolve("uz-Cyrl").unwrap();
    assert_eq!(uz_cyrl.script(), Some("Cyrl"));
    assert!(uz_cyrl.contains('ў'));

    let th = BianLocaleCharset::resolve("th").unwrap();
    assert_eq!(th.script(), Some("Thai"));
    assert!(th.contains('ก'));
}

#[test]
fn han_scripts_are_distinct() {
    let hans = BianLocaleCharset::resolve("zh-Hans").unwrap();
    let hant = BianLocaleCharset::resolve("zh-Hant").unwrap();
    assert_eq!(hans.script(), Some("Hans"));
    assert_eq!(hant.script(), Some("Hant"));
    assert_ne!(hans.chars(), hant.chars());

    assert!(hans.contains('这') && !hans.contains('這'));
    assert!(hant.contains('這') && !hant.contains('这'));

    let taiwan = BianLocaleCharset::resolve("zh-TW").unwrap();
    assert_eq!(taiwan.script(), Some("Hant"));
    assert_eq!(taiwan.chars(), hant.chars());
}

#[test]
fn resolves_languages_beyond_latin_and_cyrillic() {
    let tamil = BianLocaleCharset::resolve("ta").unwrap();
    assert!(tamil.contains('க'));
    assert!(tamil.contains('\u{0BCD}'));

    let bengali = BianLocaleCharset::resolve("bn").unwrap();
    assert!(bengali.contains('ক'));

    for tag in ["am", "ml", "te", "fil", "sq", "ko", "ja", "hy", "ka", "he", "ar", "hi"] {
        let charset = BianLocaleCharset::resolve(tag).unwrap_or_else(|err| panic!("{tag}: {err}"));
        assert!(charset.len() > 20, "{tag}: {}", charset.len());
    }
}
