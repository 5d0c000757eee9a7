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

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use maud::Markup;
use maud::PreEscaped;
use maud::html;

use crate::cmd::present::state::ServerState;
use crate::cmd::present::template::page_template;
use crate::format::format_score;
use crate::qr::render_svg;
use crate::session::Snapshot;
use crate::types::question::QuestionKind;
use crate::types::scene::Scene;
use crate::types::score_state::ScoreState;

pub async fn get_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    match state.session.snapshot().await {
        Ok(snapshot) => (StatusCode::OK, Html(render_page(&snapshot).into_string())),
        Err(e) => {
            log::error!("{e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("Session has ended".to_string()),
            )
        }
    }
}

pub fn render_page(snapshot: &Snapshot) -> Markup {
    let body = html! {
        div.root {
            (render_scene(snapshot))
            (render_footer(snapshot))
        }
    };
    page_template(snapshot.scene.name(), body)
}

fn render_scene(snapshot: &Snapshot) -> Markup {
    match &snapshot.scene {
        Scene::Loading => html! {
            div .scene .centered .loading {
                p { "Loading..." }
            }
        },
        Scene::Failed { reason } => html! {
            div .scene .centered .failed {
                h1 { "The quiz could not be loaded." }
                p.reason { (reason) }
            }
        },
        Scene::Ready { date } => html! {
            div .scene .centered .ready {
                div.date { (date.display_long()) }
                h1 { "Ready?" }
            }
        },
        Scene::Question {
            number,
            kind,
            question,
        } => html! {
            div .scene .question-scene {
                (render_kind(*kind))
                div.question {
                    span.number { (number) "." }
                    span.text { (question) }
                }
            }
        },
        Scene::AnswersTitle => html! {
            div .scene .centered .answers-title {
                h1 { "Answers..." }
            }
        },
        Scene::QuestionAnswer {
            number,
            kind,
            question,
            answer,
        } => html! {
            div .scene .question-answer-scene {
                (render_kind(*kind))
                div.question {
                    span.number { (number) "." }
                    span.text { (question) }
                }
                div.answer {
                    span {}
                    span.text { (answer) }
                }
                (render_mark(snapshot.score.unwrap_or_default()))
            }
        },
        Scene::Results { score } => {
            let qr = match render_svg(&snapshot.qr_payload) {
                Ok(svg) => Some(svg),
                Err(e) => {
                    log::error!("{e}");
                    None
                }
            };
            html! {
                div .scene .centered .results {
                    div.score { (format_score(*score)) }
                    @if let Some(svg) = qr {
                        div.qr { (PreEscaped(svg)) }
                    }
                }
            }
        }
    }
}

fn render_kind(kind: QuestionKind) -> Markup {
    match kind {
        QuestionKind::Normal => html! {},
        QuestionKind::WhatLinks => html! {
            div.kind { "What links" }
        },
    }
}

fn render_mark(score: ScoreState) -> Markup {
    let symbol = match score {
        ScoreState::None => "",
        ScoreState::Half => "½",
        ScoreState::Full => "✓",
    };
    html! {
        div class={ "mark " (score.as_str()) } { (symbol) }
    }
}

fn render_footer(snapshot: &Snapshot) -> Markup {
    let progress = format!("{} / {}", snapshot.scene_index + 1, snapshot.scene_count);
    html! {
        form.footer action="/" method="post" {
            @if let Some(title) = &snapshot.title {
                span.title { (title) }
            }
            div.spacer {}
            span.progress { (progress) }
            button type="submit" name="action" value="Previous" { "←" }
            @if matches!(snapshot.scene, Scene::QuestionAnswer { .. }) {
                button type="submit" name="action" value="Score" { "Score" }
            }
            button type="submit" name="action" value="Next" { "→" }
        }
    }
}

/// Shown once the session is over.
pub fn render_goodbye() -> Markup {
    let body = html! {
        div.root {
            div .scene .centered .finished {
                h1 { "Thanks for playing!" }
            }
        }
    };
    page_template("finished", body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::quiz_date::QuizDate;

    fn snapshot(scene: Scene) -> Snapshot {
        Snapshot {
            scene,
            scene_index: 0,
            scene_count: 9,
            title: Some("Saturday Quiz".to_string()),
            score: None,
            total_score: 0.0,
            qr_payload: "0...\n\n".to_string(),
        }
    }

    #[test]
    fn test_render_ready() {
        let date = QuizDate::parse("2025-06-14").unwrap();
        let html = render_page(&snapshot(Scene::Ready { date })).into_string();
        assert!(html.contains("14 JUN 2025"));
        assert!(html.contains("Ready?"));
        assert!(html.contains("data-scene=\"ready\""));
        assert!(html.contains("1 / 9"));
    }

    #[test]
    fn test_render_what_links_answer() {
        let mut snap = snapshot(Scene::QuestionAnswer {
            number: 2,
            kind: QuestionKind::WhatLinks,
            question: "What links Mercury, Venus and Mars?".to_string(),
            answer: "Planets".to_string(),
        });
        snap.score = Some(ScoreState::Half);
        let html = render_page(&snap).into_string();
        assert!(html.contains("What links"));
        assert!(html.contains("Planets"));
        assert!(html.contains("class=\"mark half\""));
        assert!(html.contains("value=\"Score\""));
    }

    #[test]
    fn test_render_question_has_no_score_button() {
        let html = render_page(&snapshot(Scene::Question {
            number: 1,
            kind: QuestionKind::Normal,
            question: "Which river flows through Vienna?".to_string(),
        }))
        .into_string();
        assert!(html.contains("Which river flows through Vienna?"));
        assert!(!html.contains("What links"));
        assert!(!html.contains("value=\"Score\""));
    }

    #[test]
    fn test_render_results() {
        let mut snap = snapshot(Scene::Results { score: 7.5 });
        snap.qr_payload = "7½...\n\n1, 2 (half)".to_string();
        let html = render_page(&snap).into_string();
        assert!(html.contains("7½"));
        assert!(html.contains("<svg"));
    }

    #[test]
    fn test_render_failed() {
        let html = render_page(&snapshot(Scene::Failed {
            reason: "could not fetch the quiz: timed out".to_string(),
        }))
        .into_string();
        assert!(html.contains("could not fetch the quiz: timed out"));
        assert!(html.contains("data-scene=\"failed\""));
    }
}
