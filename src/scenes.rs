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

use crate::types::question::Question;
use crate::types::quiz::Quiz;
use crate::types::scene::Scene;
use crate::types::score_state::ScoreState;
use crate::types::score_state::total;

/// Lay out the scenes for a quiz.
///
/// A fresh quiz reads every question out first, then goes through them
/// again revealing each answer. When `resuming`, the first pass is skipped
/// and the quiz opens straight onto the answers.
pub fn build_scenes(quiz: &Quiz, scores: &[ScoreState], resuming: bool) -> Vec<Scene> {
    let n = quiz.question_count();
    let capacity = if resuming { 2 * n + 2 } else { 3 * n + 3 };
    let mut scenes = Vec::with_capacity(capacity);
    scenes.push(Scene::Ready {
        date: quiz.quiz_date(),
    });
    if !resuming {
        scenes.extend(quiz.questions().iter().map(question_scene));
        scenes.push(Scene::AnswersTitle);
    }
    for question in quiz.questions() {
        scenes.push(question_scene(question));
        scenes.push(Scene::QuestionAnswer {
            number: question.number(),
            kind: question.kind(),
            question: question.question_text().to_string(),
            answer: question.answer_text().to_string(),
        });
    }
    scenes.push(Scene::Results {
        score: total(scores),
    });
    scenes
}

fn question_scene(question: &Question) -> Scene {
    Scene::Question {
        number: question.number(),
        kind: question.kind(),
        question: question.question_text().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;
    use crate::error::Fallible;
    use crate::types::question::QuestionKind;

    fn quiz_with(n: usize) -> Fallible<Quiz> {
        let questions = (1..=n)
            .map(|i| {
                Question::new(
                    i,
                    format!("Q{i}"),
                    format!("A{i}"),
                    QuestionKind::Normal,
                    vec![],
                )
            })
            .collect();
        let date = DateTime::parse_from_rfc3339("2025-06-14T00:00:00Z")?;
        Quiz::new("id", date, "title", questions)
    }

    #[test]
    fn test_fresh_length() -> Fallible<()> {
        for n in [0, 1, 2, 20] {
            let quiz = quiz_with(n)?;
            let scenes = build_scenes(&quiz, &vec![ScoreState::None; n], false);
            assert_eq!(scenes.len(), 1 + (n + 1) + 2 * n + 1);
        }
        Ok(())
    }

    #[test]
    fn test_resuming_length() -> Fallible<()> {
        for n in [0, 1, 2, 20] {
            let quiz = quiz_with(n)?;
            let scenes = build_scenes(&quiz, &vec![ScoreState::None; n], true);
            assert_eq!(scenes.len(), 1 + 2 * n + 1);
        }
        Ok(())
    }

    #[test]
    fn test_fresh_order() -> Fallible<()> {
        let quiz = quiz_with(2)?;
        let scenes = build_scenes(&quiz, &[ScoreState::None, ScoreState::None], false);
        let names: Vec<&str> = scenes.iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec![
                "ready",
                "question",
                "question",
                "answers-title",
                "question",
                "question-answer",
                "question",
                "question-answer",
                "results",
            ]
        );
        let numbers: Vec<Option<usize>> = scenes
            .iter()
            .map(|scene| match scene {
                Scene::Question { number, .. } | Scene::QuestionAnswer { number, .. } => {
                    Some(*number)
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            numbers,
            vec![
                None,
                Some(1),
                Some(2),
                None,
                Some(1),
                Some(1),
                Some(2),
                Some(2),
                None
            ]
        );
        Ok(())
    }

    #[test]
    fn test_resuming_order() -> Fallible<()> {
        let quiz = quiz_with(2)?;
        let scenes = build_scenes(&quiz, &[ScoreState::Full, ScoreState::Half], true);
        let names: Vec<&str> = scenes.iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec![
                "ready",
                "question",
                "question-answer",
                "question",
                "question-answer",
                "results",
            ]
        );
        assert_eq!(scenes[5], Scene::Results { score: 1.5 });
        Ok(())
    }

    #[test]
    fn test_answer_scene_content() -> Fallible<()> {
        let quiz = quiz_with(1)?;
        let scenes = build_scenes(&quiz, &[ScoreState::None], true);
        assert_eq!(
            scenes[2],
            Scene::QuestionAnswer {
                number: 1,
                kind: QuestionKind::Normal,
                question: "Q1".to_string(),
                answer: "A1".to_string(),
            }
        );
        Ok(())
    }
}
