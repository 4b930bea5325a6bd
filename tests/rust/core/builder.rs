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

use bian::{BianAugmenter, BianAugmenterBuilder, BianError, BianSharedAugmenter, BianWordAugmenter};
use serde_json::{json, Value};

fn build(node: Value) -> Result<BianSharedAugmenter, BianError> {
    BianAugmenterBuilder::with_defaults().build_node(&node)
}

#[test]
fn words_random_from_config() {
    let augmenter = build(json!({
        "augmenter": "words.random",
        "config": {
            "action": "Substitute",
            "word_params": {"probability": 1.0},
            "stopwords": ["keep"],
            "vocabulary": ["new"]
        }
    }))
    .unwrap();
    assert_eq!(augmenter.name(), "words.random");
    assert_eq!(augmenter.augment("keep old keep old"), "keep new keep new");
}

#[test]
fn chars_random_from_config() {
    let augmenter = build(json!({
        "augmenter": "chars.random",
        "config": {
            "action": "DELETE",
            "word_params": [1.0, null, null],
            "char_params": 1.0
        }
    }))
    .unwrap();
    assert_eq!(augmenter.augment("ab cd"), " ");

    assert!(matches!(
        build(json!({"augmenter": "chars.random", "config": {"action": "insert"}})),
        Err(BianError::MissingLocale { .. })
    ));
    assert!(matches!(
        build(json!({"augmenter": "chars.random", "config": {"action": "insert", "locale": "invalid"}})),
        Err(BianError::InvalidLocale { .. })
    ));
    assert!(matches!(
        build(json!({"augmenter": "chars.random", "config": {"action": "insert", "locale": 7}})),
        Err(BianError::InvalidLocale { .. })
    ));
}

#[test]
fn probability_must_be_numeric_and_in_range() {
    for params in [json!("0.3"), json!(-0.1), json!(1.1), json!(null), json!([null])] {
        let result = build(json!({
            "augmenter": "words.random",
            "config": {"action": "delete", "word_params": {"probability": params}}
        }));
        assert!(
            matches!(result, Err(BianError::InvalidProbability { .. })),
            "{params} should be rejected"
        );
    }
    assert!(matches!(
        build(json!({
            "augmenter": "flow.chance",
            "config": {"augmenter": {"augmenter": "words.random", "config": {"action": "swap"}}}
        })),
        Err(BianError::InvalidProbability { .. })
    ));
}

#[test]
fn actions_and_vocabularies_are_checked() {
    assert!(matches!(
        build(json!({"augmenter": "words.random", "config": {"action": "shuffle"}})),
        Err(BianError::UnknownAction { .. })
    ));
    assert!(matches!(
        build(json!({"augmenter": "words.random", "config": {}})),
        Err(BianError::UnknownAction { .. })
    ));
    assert_eq!(
        build(json!({"augmenter": "words.random", "config": {"action": "insert", "vocabulary": []}})).unwrap_err(),
        BianError::EmptyVocabulary
    );
    assert!(matches!(
        build(json!({"augmenter": "words.random", "config": {"action": "insert"}})),
        Err(BianError::MissingVocabulary { .. })
    ));
}

#[test]
fn combinator_members_must_be_augmenters() {
    assert!(matches!(
        build(json!({"augmenter": "flow.sequential", "config": {"augmenters": ["string", 1]}})),
        Err(BianError::InvalidMember { .. })
    ));
    assert!(matches!(
        build(json!({"augmenter": "flow.sequential", "config": {"augmenters": []}})),
        Err(BianError::EmptyChain)
    ));
    assert!(matches!(
        build(json!({"augmenter": "flow.chance", "config": {"augmenter": null, "probability": 0.5}})),
        Err(BianError::InvalidMember { .. })
    ));

    let delete = json!({"augmenter": "words.random", "config": {"action": "delete"}});
    assert!(matches!(
        build(json!({"augmenter": "flow.selector", "config": {"augmenters": [delete.clone()]}})),
        Err(BianError::TooFewMembers { .. })
    ));
    assert!(matches!(
        build(json!({
            "augmenter": "flow.selector",
            "config": {"augmenters": [delete.clone(), delete.clone()], "weights": [1.0]}
        })),
        Err(BianError::WeightCountMismatch { .. })
    ));
    assert!(matches!(
        build(json!({
            "augmenter": "flow.selector",
            "config": {"augmenters": [delete.clone(), delete], "weights": ["heavy", 1.0]}
        })),
        Err(BianError::InvalidWeight { .. })
    ));
}

#[test]
fn builds_from_json_and_yaml_documents() {
    let builder = BianAugmenterBuilder::with_defaults();

    let json_doc = r#"[
        {"augmenter": "words.random", "config": {"action": "delete", "word_params": 0.3}},
        {"augmenter": "chars.random", "config": {"action": "delete", "word_params": 0.3, "char_params": 0.3}}
    ]"#;
    let chain = builder.build_from_json_str(json_doc).unwrap();
    assert_eq!(chain.name(), "flow.sequential");

    let yaml_doc = r#"
augmenter: flow.selector
config:
  weights: [1, 0]
  augmenters:
    - augmenter: words.random
      config:
        action: substitute
        word_params: 1.0
        vocabulary: [yaml]
    - augmenter: words.random
      config:
        action: delete
"#;
    let selector = builder.build_from_yaml_str(yaml_doc).unwrap();
    assert_eq!(selector.augment("a b"), "yaml yaml");

    assert!(matches!(builder.build_from_json_str("{not json"), Err(BianError::Serde(_))));
    assert!(matches!(builder.build_from_yaml_str("a: [unclosed"), Err(BianError::Serde(_))));
}

fn always_upper(_config: &Value, _builder: &BianAugmenterBuilder) -> Result<BianSharedAugmenter, BianError> {
    #[derive(Debug)]
    struct Upper;

    impl BianAugmenter for Upper {
        fn name(&self) -> &'static str {
            "custom.upper"
        }

        fn augment_with_rng(&self, text: &str, _rng: &mut dyn rand::RngCore) -> String {
            text.to_uppercase()
        }
    }

    Ok(Arc::new(Upper))
}

#[test]
fn custom_factories_can_be_registered() {
    let mut builder = BianAugmenterBuilder::with_defaults();
    builder.register("custom.upper", always_upper);
    assert!(builder.contains("custom.upper"));

    let chain = builder
        .build_from_config(&json!([
            {"augmenter": "custom.upper"},
            {"augmenter": "flow.chance", "config": {"probability": 1.0, "augmenter": {"augmenter": "custom.upper"}}}
        ]))
        .unwrap();
    assert_eq!(chain.augment("abc"), "ABC");
}

#[test]
fn built_and_typed_augmenters_agree() {
    let built = build(json!({
        "augmenter": "words.random",
        "config": {"action": "delete", "word_params": 1.0}
    }))
    .unwrap();
    let typed = BianWordAugmenter::random_delete(1.0).unwrap();
    let text = "all of these words go";
    assert_eq!(built.augment(text), typed.augment(text));
}
