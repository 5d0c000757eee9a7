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

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

pub type Fallible<T> = Result<T, ErrorReport>;

/// A human-readable error. Everything that can go wrong is eventually
/// flattened into one of these and printed by `main`.
#[derive(Debug, PartialEq)]
pub struct ErrorReport {
    message: String,
}

impl ErrorReport {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for ErrorReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "error: {}", self.message)
    }
}

impl Error for ErrorReport {}

pub fn fail<T>(message: impl Into<String>) -> Fallible<T> {
    Err(ErrorReport::new(message))
}

impl From<std::io::Error> for ErrorReport {
    fn from(value: std::io::Error) -> Self {
        ErrorReport::new(format!("I/O error: {value}"))
    }
}

impl From<rusqlite::Error> for ErrorReport {
    fn from(value: rusqlite::Error) -> Self {
        ErrorReport::new(format!("database error: {value}"))
    }
}

impl From<serde_json::Error> for ErrorReport {
    fn from(value: serde_json::Error) -> Self {
        ErrorReport::new(format!("JSON error: {value}"))
    }
}

impl From<reqwest::Error> for ErrorReport {
    fn from(value: reqwest::Error) -> Self {
        ErrorReport::new(format!("HTTP error: {value}"))
    }
}

impl From<toml::de::Error> for ErrorReport {
    fn from(value: toml::de::Error) -> Self {
        ErrorReport::new(format!("invalid configuration: {value}"))
    }
}

impl From<qrcode::types::QrError> for ErrorReport {
    fn from(value: qrcode::types::QrError) -> Self {
        ErrorReport::new(format!("cannot encode QR code: {value}"))
    }
}

impl From<chrono::ParseError> for ErrorReport {
    fn from(value: chrono::ParseError) -> Self {
        ErrorReport::new(format!("invalid date: {value}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ErrorReport::new("directory does not exist.");
        assert_eq!(err.to_string(), "error: directory does not exist.");
    }

    #[test]
    fn test_fail() {
        let result: Fallible<()> = fail(format!("bad value: {}", 3));
        assert_eq!(result.unwrap_err().message(), "bad value: 3");
    }
}
