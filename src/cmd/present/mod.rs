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

mod get;
mod post;
mod server;
mod state;
mod template;

use std::path::Path;

use crate::cmd::present::server::start_server;
use crate::db::Database;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::fetch::QuizSource;
use crate::session::spawn_session;
use crate::store::ScoreStore;

/// Present the quiz on a local web page until the session ends.
pub async fn present(
    source: QuizSource,
    database: &Path,
    port: u16,
    open_browser: bool,
) -> Fallible<()> {
    let db_path = database
        .to_str()
        .ok_or_else(|| ErrorReport::new("invalid path"))?;
    let store = ScoreStore::new(Database::new(db_path)?);
    log::info!("Presenting quiz from {source} on port {port}");
    let session = spawn_session(store, source);
    start_server(session, port, open_browser).await
}
