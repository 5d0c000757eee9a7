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

use crate::error::ErrorReport;
use crate::error::fail;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum QuestionKind {
    Normal,
    /// The answer is whatever links a set of items.
    WhatLinks,
}

impl QuestionKind {
    pub fn as_str(&self) -> &str {
        match self {
            QuestionKind::Normal => "NORMAL",
            QuestionKind::WhatLinks => "WHAT_LINKS",
        }
    }
}

impl TryFrom<String> for QuestionKind {
    type Error = ErrorReport;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "NORMAL" => Ok(QuestionKind::Normal),
            "WHAT_LINKS" => Ok(QuestionKind::WhatLinks),
            _ => fail(format!("Invalid question type: {}", value)),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Question {
    /// The 1-based position of the question in the quiz.
    number: usize,
    question_text: String,
    answer_text: String,
    kind: QuestionKind,
    /// Only meaningful for `WhatLinks` questions.
    link_items: Vec<String>,
}

impl Question {
    pub fn new(
        number: usize,
        question_text: impl Into<String>,
        answer_text: impl Into<String>,
        kind: QuestionKind,
        link_items: Vec<String>,
    ) -> Self {
        Self {
            number,
            question_text: question_text.into(),
            answer_text: answer_text.into(),
            kind,
            link_items,
        }
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn question_text(&self) -> &str {
        &self.question_text
    }

    pub fn answer_text(&self) -> &str {
        &self.answer_text
    }

    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    pub fn link_items(&self) -> &[String] {
        &self.link_items
    }
}
