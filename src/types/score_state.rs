// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::Error;

/// How well a single question was answered.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ScoreState {
    #[default]
    None,
    Half,
    Full,
}

impl ScoreState {
    /// The number of points this state is worth.
    pub fn value(self) -> f64 {
        match self {
            ScoreState::None => 0.0,
            ScoreState::Half => 0.5,
            ScoreState::Full => 1.0,
        }
    }

    pub fn from_value(value: f64) -> Option<Self> {
        if value == 0.0 {
            Some(ScoreState::None)
        } else if value == 0.5 {
            Some(ScoreState::Half)
        } else if value == 1.0 {
            Some(ScoreState::Full)
        } else {
            None
        }
    }

    /// The state after the next press of the score button. A wrong answer
    /// becomes full marks first, since that is the common case.
    pub fn next(self) -> Self {
        match self {
            ScoreState::None => ScoreState::Full,
            ScoreState::Full => ScoreState::Half,
            ScoreState::Half => ScoreState::None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScoreState::None => "none",
            ScoreState::Half => "half",
            ScoreState::Full => "full",
        }
    }
}

/// Sum the points in a score array.
pub fn total(scores: &[ScoreState]) -> f64 {
    scores.iter().map(|state| state.value()).sum()
}

impl Serialize for ScoreState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

impl<'de> Deserialize<'de> for ScoreState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        ScoreState::from_value(value)
            .ok_or_else(|| D::Error::custom(format!("invalid score value: {value}")))
    }
}
