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

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{BianError, Result};

/// Mutation applied to selected words or characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum BianTextAction {
    Insert,
    Substitute,
    Swap,
    Delete,
}

impl BianTextAction {
    pub const ALL: [BianTextAction; 4] = [
        BianTextAction::Insert,
        BianTextAction::Substitute,
        BianTextAction::Swap,
        BianTextAction::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BianTextAction::Insert => "insert",
            BianTextAction::Substitute => "substitute",
            BianTextAction::Swap => "swap",
            BianTextAction::Delete => "delete",
        }
    }

    /// Whether the action synthesizes new units and needs a source for them
    /// (a vocabulary for words, a locale charset for characters).
    pub fn requires_source(&self) -> bool {
        matches!(self, BianTextAction::Insert | BianTextAction::Substitute)
    }

    /// Reads an action from an optional configuration value.
    pub fn from_value(value: Option<&Value>) -> Result<Self> {
        match value {
            Some(Value::String(name)) => name.parse(),
            Some(other) => Err(BianError::action(other.to_string())),
            None => Err(BianError::action("<missing>")),
        }
    }
}

impl FromStr for BianTextAction {
    type Err = BianError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "insert" => Ok(BianTextAction::Insert),
            "substitute" => Ok(BianTextAction::Substitute),
            "swap" => Ok(BianTextAction::Swap),
            "delete" => Ok(BianTextAction::Delete),
            _ => Err(BianError::action(s)),
        }
    }
}

impl TryFrom<String> for BianTextAction {
    type Error = BianError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for BianTextAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
