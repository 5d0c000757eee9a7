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
use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;

use crate::cmd::open_existing_store;
use crate::error::Fallible;
use crate::error::fail;
use crate::format::format_score;
use crate::format::qr_payload;
use crate::qr::render_terminal;
use crate::store::ScoreStore;
use crate::types::quiz_date::QuizDate;
use crate::types::score_state::ScoreState;
use crate::types::score_state::total;

#[derive(ValueEnum, Clone, Copy, PartialEq, Debug)]
pub enum ScoresFormat {
    /// Plain text, with a QR code.
    Text,
    /// JSON output.
    Json,
}

impl Display for ScoresFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoresFormat::Text => write!(f, "text"),
            ScoresFormat::Json => write!(f, "json"),
        }
    }
}

/// Print the saved scores: a summary of every date, or the detail of one.
pub fn print_scores(database: &Path, date: Option<String>, format: ScoresFormat) -> Fallible<()> {
    let store = open_existing_store(database)?;
    let date = date.map(|d| QuizDate::parse(&d)).transpose()?;
    let report = scores_report(&store, date, format)?;
    println!("{report}");
    Ok(())
}

fn scores_report(store: &ScoreStore, date: Option<QuizDate>, format: ScoresFormat) -> Fallible<String> {
    let entries: Vec<ScoresExport> = match date {
        Some(date) => match store.load(date) {
            Some(scores) => vec![ScoresExport::new(date, scores)],
            None => return fail(format!("no scores saved for {date}.")),
        },
        None => store
            .dates()?
            .into_iter()
            .filter_map(|date| store.load(date).map(|scores| ScoresExport::new(date, scores)))
            .collect(),
    };
    match format {
        ScoresFormat::Json => Ok(serde_json::to_string_pretty(&entries)?),
        ScoresFormat::Text => match (date, entries.first()) {
            (Some(_), Some(entry)) => {
                let qr = render_terminal(&entry.payload)?;
                Ok(format!("{}\n\n{}\n{}", entry.date, entry.payload, qr))
            }
            _ => {
                if entries.is_empty() {
                    return Ok("No saved scores.".to_string());
                }
                let lines: Vec<String> = entries
                    .iter()
                    .map(|entry| {
                        format!(
                            "{}  {} / {}",
                            entry.date,
                            entry.display,
                            entry.scores.len()
                        )
                    })
                    .collect();
                Ok(lines.join("\n"))
            }
        },
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoresExport {
    date: String,
    score: f64,
    display: String,
    scores: Vec<ScoreState>,
    payload: String,
}

impl ScoresExport {
    fn new(date: QuizDate, scores: Vec<ScoreState>) -> Self {
        let score = total(&scores);
        Self {
            date: date.to_string(),
            score,
            display: format_score(score),
            payload: qr_payload(score, &scores),
            scores,
        }
    }
}
