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

use crate::fetch::FetchError;
use crate::format::qr_payload;
use crate::scenes::build_scenes;
use crate::store::ScoreStore;
use crate::types::quiz::Quiz;
use crate::types::scene::Scene;
use crate::types::score_state::ScoreState;
use crate::types::score_state::total;

/// The outcome of a navigation request.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Navigation {
    Moved,
    Unchanged,
    /// Moved past the last scene: the session is over.
    Terminated,
}

/// The presentation state machine.
///
/// Holds the quiz, the scores and the scene list, and moves an index over
/// the scenes. Every score change is written to the store immediately.
pub struct Presenter {
    store: ScoreStore,
    quiz: Option<Quiz>,
    scores: Vec<ScoreState>,
    scenes: Vec<Scene>,
    scene_index: usize,
    resuming: bool,
}

impl Presenter {
    pub fn new(store: ScoreStore) -> Self {
        Self {
            store,
            quiz: None,
            scores: Vec::new(),
            scenes: vec![Scene::Loading],
            scene_index: 0,
            resuming: false,
        }
    }

    /// Deliver the result of fetching the quiz.
    pub fn on_quiz_loaded(&mut self, result: Result<Quiz, FetchError>) {
        if self.quiz.is_some() {
            log::warn!("Ignoring a second quiz delivery.");
            return;
        }
        match result {
            Ok(quiz) => self.initialize(quiz),
            Err(e) => {
                log::error!("{e}");
                self.scenes = vec![Scene::Failed {
                    reason: e.to_string(),
                }];
                self.scene_index = 0;
            }
        }
    }

    fn initialize(&mut self, quiz: Quiz) {
        let date = quiz.quiz_date();
        let count = quiz.question_count();
        log::info!("Loaded quiz {} with {count} questions", quiz.id());
        match self.store.load(date) {
            Some(saved) if saved.len() == count => {
                log::info!("Resuming quiz for {date}");
                self.scores = saved;
                self.resuming = true;
            }
            saved => {
                if let Some(saved) = saved {
                    log::warn!(
                        "Saved scores for {date} have {} entries, quiz has {count}",
                        saved.len()
                    );
                }
                self.store.discard_stale_scores(date);
                self.scores = vec![ScoreState::None; count];
                self.resuming = false;
            }
        }
        self.scenes = build_scenes(&quiz, &self.scores, self.resuming);
        self.scene_index = 0;
        log::debug!("Built {} scenes for {count} questions", self.scenes.len());
        self.quiz = Some(quiz);
    }

    /// The scene on screen. `Results` reports the score as it stands now.
    pub fn current_scene(&self) -> Scene {
        match &self.scenes[self.scene_index] {
            Scene::Results { .. } => Scene::Results {
                score: self.total_score(),
            },
            scene => scene.clone(),
        }
    }

    pub fn next(&mut self) -> Navigation {
        if self.scene_index + 1 < self.scenes.len() {
            self.scene_index += 1;
            Navigation::Moved
        } else {
            log::debug!("Reached the end of the scenes.");
            Navigation::Terminated
        }
    }

    pub fn previous(&mut self) -> Navigation {
        if self.scene_index > 0 {
            self.scene_index -= 1;
            Navigation::Moved
        } else {
            Navigation::Unchanged
        }
    }

    /// Advance the score of the question whose answer is on screen, and
    /// save. Returns the new score, or `None` if no answer is showing.
    pub fn cycle_score(&mut self) -> Option<ScoreState> {
        let number = match &self.scenes[self.scene_index] {
            Scene::QuestionAnswer { number, .. } => *number,
            _ => return None,
        };
        let date = self.quiz.as_ref()?.quiz_date();
        let state = self.scores.get_mut(number - 1)?;
        *state = state.next();
        let new_state = *state;
        log::debug!("Question {number} scored {}", new_state.as_str());
        self.store.save(date, &self.scores);
        Some(new_state)
    }

    /// The score of the question on screen, if it is an answer scene.
    pub fn score_of_current(&self) -> Option<ScoreState> {
        match &self.scenes[self.scene_index] {
            Scene::QuestionAnswer { number, .. } => self.scores.get(number - 1).copied(),
            _ => None,
        }
    }

    pub fn total_score(&self) -> f64 {
        total(&self.scores)
    }

    pub fn qr_payload(&self) -> String {
        qr_payload(self.total_score(), &self.scores)
    }

    pub fn quiz(&self) -> Option<&Quiz> {
        self.quiz.as_ref()
    }

    pub fn scores(&self) -> &[ScoreState] {
        &self.scores
    }

    pub fn scene_index(&self) -> usize {
        self.scene_index
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_resuming(&self) -> bool {
        self.resuming
    }
}
