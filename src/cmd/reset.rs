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

use std::path::Path;

use crate::cmd::open_existing_store;
use crate::error::Fallible;

/// Delete the saved scores for every date.
pub fn reset_scores(database: &Path) -> Fallible<()> {
    let mut store = open_existing_store(database)?;
    let count = store.dates()?.len();
    store.clear_all();
    println!("Removed scores for {count} quiz dates.");
    Ok(())
}
