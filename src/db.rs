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

use rusqlite::Connection;
use rusqlite::OptionalExtension;
use rusqlite::Transaction;

use crate::error::Fallible;
use crate::store::KeyValueStore;

/// A flat key-value table in an SQLite file.
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn new(database_path: &str) -> Fallible<Self> {
        let mut conn = Connection::open(database_path)?;
        {
            let tx = conn.transaction()?;
            if !probe_schema_exists(&tx)? {
                log::debug!("Creating schema in {database_path}");
                tx.execute_batch(include_str!("schema.sql"))?;
                tx.commit()?;
            }
        }
        Ok(Self { conn })
    }
}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> Fallible<Option<Vec<u8>>> {
        let sql = "select value from entries where key = ?;";
        let value: Option<Vec<u8>> = self
            .conn
            .query_row(sql, [key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Fallible<()> {
        let sql = "insert into entries (key, value) values (?, ?) on conflict (key) do update set value = excluded.value;";
        self.conn.execute(sql, (key, value))?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Fallible<()> {
        let sql = "delete from entries where key = ?;";
        self.conn.execute(sql, [key])?;
        Ok(())
    }

    fn all_keys(&self) -> Fallible<Vec<String>> {
        let mut keys = Vec::new();
        let mut stmt = self.conn.prepare("select key from entries order by key;")?;
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let key: String = row.get(0)?;
            keys.push(key);
        }
        Ok(keys)
    }
}

fn probe_schema_exists(tx: &Transaction) -> Fallible<bool> {
    let sql = "select count(*) from sqlite_master where type='table' AND name=?;";
    let count: i64 = tx.query_row(sql, ["entries"], |row| row.get(0))?;
    Ok(count > 0)
}
