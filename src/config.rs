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

use std::fs::read_to_string;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::Fallible;
use crate::error::fail;
use crate::fetch::DEFAULT_ENDPOINT;
use crate::fetch::QuizSource;

/// Looked for in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "saturday-quiz.toml";

const DEFAULT_DATABASE: &str = "scores.db";

const DEFAULT_PORT: u16 = 8000;

/// Settings read from the configuration file. Every field is optional.
#[derive(Deserialize, Default, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub endpoint: Option<String>,
    pub database: Option<PathBuf>,
    pub port: Option<u16>,
    pub open_browser: Option<bool>,
}

impl Config {
    /// Load the configuration. An explicit path must exist; the default
    /// file is optional.
    pub fn load(path: Option<&Path>) -> Fallible<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return fail(format!("config file {} does not exist.", path.display()));
                }
                Self::from_file(path)
            }
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Fallible<Self> {
        log::debug!("Reading configuration from {}", path.display());
        let content = read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Fallible<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Where to fetch the quiz from. A file given on the command line wins,
    /// then an endpoint given on the command line, then the file's endpoint.
    pub fn source(&self, endpoint: Option<String>, file: Option<PathBuf>) -> QuizSource {
        match (file, endpoint) {
            (Some(path), _) => QuizSource::File { path },
            (None, Some(url)) => QuizSource::Http { url },
            (None, None) => QuizSource::Http {
                url: self
                    .endpoint
                    .clone()
                    .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            },
        }
    }

    pub fn database(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.database.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
    }

    pub fn port(&self, flag: Option<u16>) -> u16 {
        flag.or(self.port).unwrap_or(DEFAULT_PORT)
    }

    pub fn open_browser(&self, no_open: bool) -> bool {
        !no_open && self.open_browser.unwrap_or(true)
    }
}
