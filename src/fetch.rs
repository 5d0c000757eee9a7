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
use std::path::PathBuf;

use crate::types::quiz::Quiz;

pub const DEFAULT_ENDPOINT: &str = "https://eaton-bitrot.koyeb.app/api/quiz";

/// Where the quiz comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum QuizSource {
    Http { url: String },
    /// A JSON file on disk, in the same format the endpoint serves.
    File { path: PathBuf },
}

#[derive(Clone, Debug, PartialEq)]
pub enum FetchError {
    /// The payload could not be retrieved.
    Network(String),
    /// The payload was retrieved but is not a valid quiz.
    Decode(String),
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "could not fetch the quiz: {msg}"),
            FetchError::Decode(msg) => write!(f, "could not read the quiz: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

impl Display for QuizSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizSource::Http { url } => write!(f, "{url}"),
            QuizSource::File { path } => write!(f, "{}", path.display()),
        }
    }
}

impl QuizSource {
    /// Retrieve and decode the quiz.
    pub async fn fetch(&self) -> Result<Quiz, FetchError> {
        log::debug!("Requesting quiz data from {self}");
        let bytes = self.fetch_bytes().await?;
        Quiz::from_json(&bytes).map_err(|e| {
            log::error!("Decoding error: {e}");
            FetchError::Decode(e.message().to_string())
        })
    }

    async fn fetch_bytes(&self) -> Result<Vec<u8>, FetchError> {
        match self {
            QuizSource::Http { url } => {
                let response = reqwest::get(url).await.map_err(network_error)?;
                let status = response.status();
                if !status.is_success() {
                    log::error!("Fetch error: {url} returned {status}");
                    return Err(FetchError::Network(format!("server returned {status}")));
                }
                let bytes = response.bytes().await.map_err(network_error)?;
                Ok(bytes.to_vec())
            }
            QuizSource::File { path } => tokio::fs::read(path).await.map_err(|e| {
                log::error!("Fetch error: {}: {e}", path.display());
                FetchError::Network(format!("{}: {e}", path.display()))
            }),
        }
    }
}

fn network_error(e: reqwest::Error) -> FetchError {
    log::error!("Fetch error: {e}");
    FetchError::Network(e.to_string())
}
