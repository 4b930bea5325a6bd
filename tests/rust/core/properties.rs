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

use bian::{
    BianAugmenter, BianChance, BianCharAugmenter, BianDoc, BianSelectionParams, BianSelector,
    BianTextAction, BianWordAugmenter,
};
use proptest::prelude::*;

fn sorted_chars(text: &str) -> Vec<char> {
    let mut chars: Vec<char> = text.chars().collect();
    chars.sort_unstable();
    chars
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_doc_round_trips(text in any::<String>()) {
        prop_assert_eq!(BianDoc::new(&text).to_string(), text);
    }

    #[test]
    fn prop_count_stays_in_range(
        probability in 0.0f64..=1.0,
        n in 0usize..200,
        min_count in proptest::option::of(0usize..50),
    ) {
        let params = BianSelectionParams::new(probability, min_count, None).unwrap();
        let count = params.count(n);
        prop_assert!(count <= n);
        if let Some(min_count) = min_count {
            if probability > 0.0 {
                prop_assert!(count >= min_count.min(n));
            }
        }
    }

    #[test]
    fn prop_batch_preserves_length(
        texts in proptest::collection::vec("\\PC{0,40}", 0..12),
        probability in 0.0f64..=1.0,
    ) {
        let augmenter = BianWordAugmenter::random_delete(probability).unwrap();
        let out = augmenter.augment_batch(&texts);
        prop_assert_eq!(out.len(), texts.len());
    }

    #[test]
    fn prop_delete_never_lengthens(
        text in "\\PC{0,60}",
        word_p in 0.0f64..=1.0,
        char_p in 0.0f64..=1.0,
    ) {
        let words = BianWordAugmenter::random_delete(word_p).unwrap();
        let chars = BianCharAugmenter::random_delete(word_p, char_p).unwrap();
        let original = text.chars().count();
        prop_assert!(words.augment(&text).chars().count() <= original);
        prop_assert!(chars.augment(&text).chars().count() <= original);
    }

    #[test]
    fn prop_insert_never_shortens(
        text in "\\PC{0,60}",
        word_p in 0.0f64..=1.0,
        char_p in 0.0f64..=1.0,
    ) {
        let words = BianWordAugmenter::random_insert(word_p, vec!["ins".to_string()]).unwrap();
        let chars = BianCharAugmenter::random_insert(word_p, char_p, "en").unwrap();
        let original = text.chars().count();
        prop_assert!(words.augment(&text).chars().count() >= original);
        prop_assert!(chars.augment(&text).chars().count() >= original);
    }

    #[test]
    fn prop_swap_preserves_characters(
        text in "[a-zA-Z ,.!]{0,60}",
        word_p in 0.0f64..=1.0,
        char_p in 0.0f64..=1.0,
    ) {
        let words = BianWordAugmenter::random_swap(word_p).unwrap();
        let chars = BianCharAugmenter::random_swap(word_p, char_p).unwrap();
        let expected = sorted_chars(&text);
        prop_assert_eq!(sorted_chars(&words.augment(&text)), expected.clone());
        prop_assert_eq!(sorted_chars(&chars.augment(&text)), expected);
    }

    #[test]
    fn prop_zero_probability_is_identity(text in "\\PC{0,60}") {
        let zero = BianSelectionParams::with_probability(0.0).unwrap();
        let vocabulary = Some(vec!["v".to_string()]);
        for action in BianTextAction::ALL {
            let words = BianWordAugmenter::new(action, zero, None, vocabulary.clone()).unwrap();
            prop_assert_eq!(words.augment(&text), text.clone());
            let chars = BianCharAugmenter::new(action, zero, zero, None, Some("de")).unwrap();
            prop_assert_eq!(chars.augment(&text), text.clone());
        }
    }

    #[test]
    fn prop_selector_output_comes_from_one_member(text in "[a-z ]{1,30}", seed in any::<u64>()) {
        let upper: Arc<dyn BianAugmenter> = Arc::new(BianChance::new(
            Arc::new(BianWordAugmenter::random_substitute(1.0, vec!["X".to_string()]).unwrap()),
            1.0,
        ).unwrap());
        let lower: Arc<dyn BianAugmenter> =
            Arc::new(BianWordAugmenter::random_substitute(1.0, vec!["y".to_string()]).unwrap());
        let selector = BianSelector::new(vec![upper.clone(), lower.clone()], None).unwrap();

        let out = selector.augment_batch_seeded(&[text.clone()], seed);
        let as_upper = upper.augment(&text);
        let as_lower = lower.augment(&text);
        prop_assert!(out[0] == as_upper || out[0] == as_lower);
    }
}
