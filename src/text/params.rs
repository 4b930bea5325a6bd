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

//! # Selection Parameters
//!
//! The probability/min/max triple that controls how many units of a text an
//! augmenter touches.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{BianError, Result};

/// Probability used when a leaf augmenter is configured without parameters.
pub const DEFAULT_PROBABILITY: f64 = 0.3;

/// Validated selection parameters.
///
/// `count(n)` is `round(probability * n)` raised to `min_count` and lowered
/// to `max_count`, never more than `n`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BianSelectionParams {
    probability: f64,
    #[serde(default)]
    min_count: Option<usize>,
    #[serde(default)]
    max_count: Option<usize>,
}

impl Default for BianSelectionParams {
    fn default() -> Self {
        BianSelectionParams {
            probability: DEFAULT_PROBABILITY,
            min_count: None,
            max_count: None,
        }
    }
}

impl BianSelectionParams {
    /// Creates parameters with optional bounds.
    pub fn new(probability: f64, min_count: Option<usize>, max_count: Option<usize>) -> Result<Self> {
        let params = BianSelectionParams {
            probability,
            min_count,
            max_count,
        };
        params.validate()?;
        Ok(params)
    }

    /// Creates parameters from a bare probability.
    pub fn with_probability(probability: f64) -> Result<Self> {
        Self::new(probability, None, None)
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn min_count(&self) -> Option<usize> {
        self.min_count
    }

    pub fn max_count(&self) -> Option<usize> {
        self.max_count
    }

    /// Checks the probability range and bound ordering.
    pub fn validate(&self) -> Result<()> {
        if self.probability.is_nan() || !(0.0..=1.0).contains(&self.probability) {
            return Err(BianError::probability(format!(
                "probability must be in [0, 1], got {}",
                self.probability
            )));
        }
        if let (Some(min_count), Some(max_count)) = (self.min_count, self.max_count) {
            if min_count > max_count {
                return Err(BianError::InvalidSelectionBounds {
                    min_count,
                    max_count,
                });
            }
        }
        Ok(())
    }

    /// Number of units to select out of `n` eligible candidates.
    pub fn count(&self, n: usize) -> usize {
        if n == 0 || self.probability <= 0.0 {
            return 0;
        }
        // f64::round rounds half away from zero.
        let mut count = (self.probability * n as f64).round() as usize;
        if let Some(min_count) = self.min_count {
            count = count.max(min_count);
        }
        if let Some(max_count) = self.max_count {
            count = count.min(max_count);
        }
        count.min(n)
    }

    /// Parses parameters from a configuration value.
    ///
    /// Accepts a bare number, an array `[probability, min|null, max|null]`
    /// or an object `{probability, min_count, max_count}`. `null` yields the
    /// defaults.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Number(_) => Self::with_probability(parse_probability(Some(value))?),
            Value::Array(items) => {
                if items.is_empty() || items.len() > 3 {
                    return Err(BianError::validation(format!(
                        "selection params array must have 1 to 3 items, got {}",
                        items.len()
                    )));
                }
                let probability = parse_probability(items.first())?;
                let min_count = parse_bound(items.get(1), "min_count")?;
                let max_count = parse_bound(items.get(2), "max_count")?;
                Self::new(probability, min_count, max_count)
            }
            Value::Object(obj) => {
                let probability = parse_probability(obj.get("probability"))?;
                let min_count = parse_bound(obj.get("min_count"), "min_count")?;
                let max_count = parse_bound(obj.get("max_count"), "max_count")?;
                Self::new(probability, min_count, max_count)
            }
            other => Err(BianError::probability(format!(
                "expected a number, array or object, got {other}"
            ))),
        }
    }
}

fn parse_probability(value: Option<&Value>) -> Result<f64> {
    match value {
        Some(Value::Number(number)) => number
            .as_f64()
            .ok_or_else(|| BianError::probability(format!("probability {number} is not representable"))),
        Some(other) => Err(BianError::probability(format!(
            "probability must be a number, got {other}"
        ))),
        None => Err(BianError::probability("probability is missing")),
    }
}

fn parse_bound(value: Option<&Value>, field: &str) -> Result<Option<usize>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_u64()
            .map(|bound| Some(bound as usize))
            .ok_or_else(|| {
                BianError::validation(format!(
                    "'{field}' must be a non-negative integer, got {value}"
                ))
            }),
    }
}
