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

use std::fmt::Display;
use std::fmt::Formatter;

use chrono::DateTime;
use chrono::FixedOffset;
use chrono::NaiveDate;

use crate::error::Fallible;

const KEY_FORMAT: &str = "%Y-%m-%d";

/// The calendar date a quiz was published on. Scores are stored per date.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct QuizDate(NaiveDate);

impl QuizDate {
    /// The date of a timestamp, in the offset the timestamp was written in.
    pub fn from_timestamp(ts: &DateTime<FixedOffset>) -> Self {
        Self(ts.date_naive())
    }

    /// Parse a `yyyy-mm-dd` string.
    pub fn parse(s: &str) -> Fallible<Self> {
        let date = NaiveDate::parse_from_str(s, KEY_FORMAT)?;
        Ok(Self(date))
    }

    /// The form shown on the opening screen, e.g. `14 JUN 2025`.
    pub fn display_long(self) -> String {
        self.0.format("%-d %b %Y").to_string().to_uppercase()
    }
}

impl Display for QuizDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(KEY_FORMAT))
    }
}
