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

use crate::types::score_state::ScoreState;

const HALF: char = '½';

/// Render a score, e.g. `7` or `7½`. Scores are sums of halves, so any
/// fraction is shown as a half.
pub fn format_score(score: f64) -> String {
    let whole = score.floor();
    let mut s = format!("{}", whole as i64);
    if whole < score {
        s.push(HALF);
    }
    s
}

/// The text encoded in the results QR code: the score, then the numbers of
/// the questions that earned points.
pub fn qr_payload(score: f64, scores: &[ScoreState]) -> String {
    format!("{}...\n\n{}", format_score(score), correct_list(scores))
}

fn correct_list(scores: &[ScoreState]) -> String {
    let items: Vec<String> = scores
        .iter()
        .enumerate()
        .filter_map(|(idx, state)| match state {
            ScoreState::Full => Some(format!("{}", idx + 1)),
            ScoreState::Half => Some(format!("{} (half)", idx + 1)),
            ScoreState::None => None,
        })
        .collect();
    items.join(", ")
}
