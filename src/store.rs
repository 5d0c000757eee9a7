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

use std::collections::BTreeMap;

use crate::error::Fallible;
use crate::types::quiz_date::QuizDate;
use crate::types::score_state::ScoreState;

/// Prefix shared by every score record.
pub const SCORE_KEY_PREFIX: &str = "quiz_scores_";

/// A flat, string-keyed, durable key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Fallible<Option<Vec<u8>>>;

    /// Write a value, replacing any previous value under the key.
    fn set(&mut self, key: &str, value: &[u8]) -> Fallible<()>;

    /// Remove a key. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Fallible<()>;

    fn all_keys(&self) -> Fallible<Vec<String>>;
}

/// A key-value store that lives and dies with the process.
#[derive(Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Fallible<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Fallible<()> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Fallible<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn all_keys(&self) -> Fallible<Vec<String>> {
        Ok(self.entries.keys().cloned().collect())
    }
}

pub fn score_key(date: QuizDate) -> String {
    format!("{SCORE_KEY_PREFIX}{date}")
}

/// Per-date score arrays on top of a key-value store.
///
/// Reads treat anything unusable as absent, and writes are best effort:
/// failures are logged and otherwise ignored.
pub struct ScoreStore {
    inner: Box<dyn KeyValueStore + Send>,
}

impl ScoreStore {
    pub fn new(inner: impl KeyValueStore + Send + 'static) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// The saved scores for a date, if there are any and they can be read.
    pub fn load(&self, date: QuizDate) -> Option<Vec<ScoreState>> {
        let key = score_key(date);
        let bytes = match self.inner.get(&key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("Failed to read scores for {date}: {e}");
                return None;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(scores) => Some(scores),
            Err(e) => {
                log::warn!("Ignoring unreadable scores for {date}: {e}");
                None
            }
        }
    }

    pub fn save(&mut self, date: QuizDate, scores: &[ScoreState]) {
        let key = score_key(date);
        let bytes = match serde_json::to_vec(scores) {
            Ok(bytes) => bytes,
            Err(e) => {
                log::error!("Failed to serialize scores for {date}: {e}");
                return;
            }
        };
        match self.inner.set(&key, &bytes) {
            Ok(()) => log::debug!("Saved scores for {date}"),
            Err(e) => log::error!("Failed to save scores for {date}: {e}"),
        }
    }

    /// Remove every score record, whatever its date.
    pub fn clear_all(&mut self) {
        let keys = match self.inner.all_keys() {
            Ok(keys) => keys,
            Err(e) => {
                log::error!("Failed to list stored scores: {e}");
                return;
            }
        };
        for key in keys.iter().filter(|key| key.starts_with(SCORE_KEY_PREFIX)) {
            if let Err(e) = self.inner.remove(key) {
                log::error!("Failed to remove {key}: {e}");
            }
        }
    }

    /// Called when the saved scores for `date` do not fit the quiz.
    ///
    /// This wipes the records for every date, not only `date`. To scope it
    /// to the one date, remove `score_key(date)` instead.
    pub fn discard_stale_scores(&mut self, date: QuizDate) {
        log::info!("Discarding stored scores (mismatch for {date})");
        self.clear_all();
    }

    /// The dates that have saved scores, in ascending order.
    pub fn dates(&self) -> Fallible<Vec<QuizDate>> {
        let mut dates = Vec::new();
        for key in self.inner.all_keys()? {
            if let Some(suffix) = key.strip_prefix(SCORE_KEY_PREFIX) {
                match QuizDate::parse(suffix) {
                    Ok(date) => dates.push(date),
                    Err(_) => log::warn!("Ignoring malformed score key: {key}"),
                }
            }
        }
        dates.sort();
        Ok(dates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorReport;
    use crate::error::fail;

    fn date(s: &str) -> QuizDate {
        QuizDate::parse(s).unwrap()
    }

    #[test]
    fn test_score_key() {
        assert_eq!(score_key(date("2025-06-14")), "quiz_scores_2025-06-14");
    }

    #[test]
    fn test_load_missing() {
        let store = ScoreStore::in_memory();
        assert_eq!(store.load(date("2025-06-14")), None);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = ScoreStore::in_memory();
        let scores = vec![ScoreState::Full, ScoreState::Half, ScoreState::None];
        store.save(date("2025-06-14"), &scores);
        assert_eq!(store.load(date("2025-06-14")), Some(scores));
        assert_eq!(store.load(date("2025-06-07")), None);
    }

    #[test]
    fn test_save_overwrites() {
        let mut store = ScoreStore::in_memory();
        store.save(date("2025-06-14"), &[ScoreState::Full]);
        store.save(date("2025-06-14"), &[ScoreState::Half, ScoreState::Half]);
        assert_eq!(
            store.load(date("2025-06-14")),
            Some(vec![ScoreState::Half, ScoreState::Half])
        );
    }

    #[test]
    fn test_corrupt_record_is_absent() -> Fallible<()> {
        let mut kv = MemoryStore::new();
        kv.set("quiz_scores_2025-06-14", b"not json")?;
        let store = ScoreStore::new(kv);
        assert_eq!(store.load(date("2025-06-14")), None);
        Ok(())
    }

    #[test]
    fn test_clear_all_keeps_other_keys() -> Fallible<()> {
        let mut kv = MemoryStore::new();
        kv.set("settings", b"{}")?;
        let mut store = ScoreStore::new(kv);
        store.save(date("2025-06-07"), &[ScoreState::Full]);
        store.save(date("2025-06-14"), &[ScoreState::Half]);
        store.clear_all();
        assert!(store.dates()?.is_empty());
        assert_eq!(store.inner.all_keys()?, vec!["settings".to_string()]);
        Ok(())
    }

    #[test]
    fn test_discard_stale_scores_wipes_every_date() -> Fallible<()> {
        let mut store = ScoreStore::in_memory();
        store.save(date("2025-06-07"), &[ScoreState::Full]);
        store.save(date("2025-06-14"), &[ScoreState::Half]);
        store.discard_stale_scores(date("2025-06-14"));
        assert_eq!(store.load(date("2025-06-07")), None);
        assert_eq!(store.load(date("2025-06-14")), None);
        Ok(())
    }

    #[test]
    fn test_dates_sorted() -> Fallible<()> {
        let mut store = ScoreStore::in_memory();
        store.save(date("2025-06-14"), &[]);
        store.save(date("2025-05-31"), &[]);
        assert_eq!(store.dates()?, vec![date("2025-05-31"), date("2025-06-14")]);
        Ok(())
    }

    /// A store whose writes always fail.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Fallible<Option<Vec<u8>>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &[u8]) -> Fallible<()> {
            fail("read-only")
        }

        fn remove(&mut self, _key: &str) -> Fallible<()> {
            fail("read-only")
        }

        fn all_keys(&self) -> Fallible<Vec<String>> {
            Err(ErrorReport::new("read-only"))
        }
    }

    #[test]
    fn test_write_failures_are_swallowed() {
        let mut store = ScoreStore::new(ReadOnlyStore);
        store.save(date("2025-06-14"), &[ScoreState::Full]);
        store.clear_all();
        assert_eq!(store.load(date("2025-06-14")), None);
    }
}
