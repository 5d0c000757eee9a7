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

use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use axum::Router;
use axum::http::HeaderName;
use axum::http::StatusCode;
use axum::http::header::CACHE_CONTROL;
use axum::http::header::CONTENT_TYPE;
use axum::response::Html;
use axum::routing::get;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::net::TcpStream;
use tokio::sync::oneshot;
use tokio::time::sleep;

use crate::cmd::present::get::get_handler;
use crate::cmd::present::post::post_handler;
use crate::cmd::present::state::ServerState;
use crate::error::Fallible;
use crate::session::SessionHandle;

/// Serve the session until it finishes or the user presses Ctrl-C.
pub async fn start_server(session: SessionHandle, port: u16, open_browser: bool) -> Fallible<()> {
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let state = ServerState {
        port,
        session,
        shutdown_tx: Arc::new(Mutex::new(Some(shutdown_tx))),
    };
    let app = Router::new();
    let app = app.route("/", get(get_handler));
    let app = app.route("/", post(post_handler));
    let app = app.route("/script.js", get(script));
    let app = app.route("/style.css", get(stylesheet));
    let app = app.fallback(not_found_handler);
    let app = app.with_state(state);
    let bind = format!("0.0.0.0:{port}");

    // Start a separate task to open the browser.
    if open_browser {
        let local = format!("127.0.0.1:{port}");
        let url = format!("http://{local}/");
        tokio::spawn(async move {
            loop {
                if let Ok(stream) = TcpStream::connect(&local).await {
                    drop(stream);
                    break;
                }
                sleep(Duration::from_millis(1)).await;
            }
            if let Err(e) = open::that(&url) {
                log::warn!("Could not open {url}: {e}");
            }
        });
    }

    // Start the server.
    log::debug!("Starting server on {bind}");
    let listener = TcpListener::bind(&bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_rx))
        .await?;
    log::debug!("Server stopped.");
    Ok(())
}

async fn shutdown_signal(shutdown_rx: oneshot::Receiver<()>) {
    tokio::select! {
        _ = shutdown_rx => {}
        _ = tokio::signal::ctrl_c() => {
            log::debug!("Received Ctrl-C.");
        }
    }
}

async fn script() -> (StatusCode, [(HeaderName, &'static str); 1], &'static str) {
    (
        StatusCode::OK,
        [(CONTENT_TYPE, "text/javascript")],
        include_str!("script.js"),
    )
}

async fn stylesheet() -> (StatusCode, [(HeaderName, &'static str); 2], &'static [u8]) {
    let bytes = include_bytes!("style.css");
    (
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/css"),
            (CACHE_CONTROL, "public, max-age=604800, immutable"),
        ],
        bytes,
    )
}

async fn not_found_handler() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html("Not Found".to_string()))
}
