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

use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::response::IntoResponse;
use axum::response::Redirect;
use axum::response::Response;
use serde::Deserialize;

use crate::cmd::present::get::render_goodbye;
use crate::cmd::present::state::ServerState;
use crate::error::Fallible;
use crate::presenter::Navigation;

#[derive(Debug, Deserialize, PartialEq)]
enum Action {
    Previous,
    Next,
    Score,
    /// The display went to the background.
    Exit,
}

#[derive(Deserialize)]
pub struct FormData {
    action: Action,
}

pub async fn post_handler(State(state): State<ServerState>, Form(form): Form<FormData>) -> Response {
    match action_handler(&state, form.action).await {
        Ok(Navigation::Terminated) => {
            state.shutdown();
            (StatusCode::OK, Html(render_goodbye().into_string())).into_response()
        }
        Ok(_) => Redirect::to("/").into_response(),
        Err(e) => {
            log::error!("{e}");
            Redirect::to("/").into_response()
        }
    }
}

async fn action_handler(state: &ServerState, action: Action) -> Fallible<Navigation> {
    log::debug!("Action: {action:?}");
    match action {
        Action::Previous => state.session.previous().await,
        Action::Next => state.session.next().await,
        Action::Score => {
            state.session.cycle_score().await?;
            Ok(Navigation::Unchanged)
        }
        Action::Exit => {
            log::info!("Display hidden, ending the session.");
            Ok(Navigation::Terminated)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_action() {
        let form: FormData = serde_json::from_str(r#"{"action": "Score"}"#).unwrap();
        assert_eq!(form.action, Action::Score);
        let form: Result<FormData, _> = serde_json::from_str(r#"{"action": "Undo"}"#);
        assert!(form.is_err());
    }
}
