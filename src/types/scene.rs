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

use crate::types::question::QuestionKind;
use crate::types::quiz_date::QuizDate;

/// One full-screen display state.
#[derive(Clone, PartialEq, Debug)]
pub enum Scene {
    /// Waiting for the quiz to arrive.
    Loading,
    /// The quiz could not be fetched or decoded.
    Failed { reason: String },
    /// The opening screen.
    Ready { date: QuizDate },
    Question {
        number: usize,
        kind: QuestionKind,
        question: String,
    },
    /// Separates the questions from the answers.
    AnswersTitle,
    QuestionAnswer {
        number: usize,
        kind: QuestionKind,
        question: String,
        answer: String,
    },
    Results { score: f64 },
}

impl Scene {
    pub fn name(&self) -> &'static str {
        match self {
            Scene::Loading => "loading",
            Scene::Failed { .. } => "failed",
            Scene::Ready { .. } => "ready",
            Scene::Question { .. } => "question",
            Scene::AnswersTitle => "answers-title",
            Scene::QuestionAnswer { .. } => "question-answer",
            Scene::Results { .. } => "results",
        }
    }
}
