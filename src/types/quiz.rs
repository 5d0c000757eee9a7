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

use chrono::DateTime;
use chrono::FixedOffset;
use serde::Deserialize;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::question::Question;
use crate::types::question::QuestionKind;
use crate::types::quiz_date::QuizDate;

/// A quiz as fetched from the server. Immutable once decoded.
#[derive(Clone, PartialEq, Debug)]
pub struct Quiz {
    id: String,
    date: DateTime<FixedOffset>,
    title: String,
    questions: Vec<Question>,
}

impl Quiz {
    /// Build a quiz, checking that question numbers run 1..N in order.
    pub fn new(
        id: impl Into<String>,
        date: DateTime<FixedOffset>,
        title: impl Into<String>,
        questions: Vec<Question>,
    ) -> Fallible<Self> {
        for (idx, question) in questions.iter().enumerate() {
            if question.number() != idx + 1 {
                return fail(format!(
                    "question at position {} has number {}",
                    idx + 1,
                    question.number()
                ));
            }
        }
        Ok(Self {
            id: id.into(),
            date,
            title: title.into(),
            questions,
        })
    }

    /// Decode the JSON payload served by the quiz endpoint.
    pub fn from_json(bytes: &[u8]) -> Fallible<Self> {
        let raw: RawQuiz = serde_json::from_slice(bytes)?;
        let date = DateTime::parse_from_rfc3339(&raw.date)
            .map_err(|e| ErrorReport::new(format!("invalid quiz date '{}': {e}", raw.date)))?;
        let questions = raw
            .questions
            .into_iter()
            .map(|q| {
                let kind = QuestionKind::try_from(q.kind)?;
                Ok(Question::new(
                    q.number, q.question, q.answer, kind, q.what_links,
                ))
            })
            .collect::<Fallible<Vec<Question>>>()?;
        Quiz::new(raw.id, date, raw.title, questions)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The date scores for this quiz are stored under.
    pub fn quiz_date(&self) -> QuizDate {
        QuizDate::from_timestamp(&self.date)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuiz {
    id: String,
    date: String,
    title: String,
    questions: Vec<RawQuestion>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuestion {
    number: usize,
    question: String,
    answer: String,
    #[serde(rename = "type")]
    kind: String,
    what_links: Vec<String>,
}
