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

pub mod check;
pub mod present;
pub mod reset;
pub mod scores;

use std::path::Path;

use crate::db::Database;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::store::ScoreStore;

/// Open an existing score database.
fn open_existing_store(database: &Path) -> Fallible<ScoreStore> {
    if !database.exists() {
        return fail("database does not exist.");
    }
    let db_path = database
        .to_str()
        .ok_or_else(|| ErrorReport::new("invalid path"))?;
    Ok(ScoreStore::new(Database::new(db_path)?))
}
