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

use std::fs::write;
use std::path::PathBuf;

use tempfile::TempDir;
use tempfile::tempdir;

use crate::error::Fallible;
use crate::types::quiz::Quiz;

/// A two-question quiz in the format the endpoint serves.
pub fn sample_quiz_json() -> &'static str {
    r#"{
        "id": "quiz-2025-06-14",
        "date": "2025-06-14T00:00:00Z",
        "title": "Saturday Quiz",
        "questions": [
            {
                "number": 1,
                "question": "Which river flows through Vienna?",
                "answer": "The Danube",
                "type": "NORMAL",
                "whatLinks": []
            },
            {
                "number": 2,
                "question": "What links Mercury, Venus and Mars?",
                "answer": "Planets",
                "type": "WHAT_LINKS",
                "whatLinks": ["Mercury", "Venus", "Mars"]
            }
        ]
    }"#
}

pub fn sample_quiz() -> Fallible<Quiz> {
    Quiz::from_json(sample_quiz_json().as_bytes())
}

/// A scratch directory holding `quiz.json`. The directory is deleted when
/// the returned handle is dropped.
pub fn create_tmp_quiz_directory() -> Fallible<(TempDir, PathBuf)> {
    let dir = tempdir()?;
    let path = dir.path().join("quiz.json");
    write(&path, sample_quiz_json())?;
    Ok((dir, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_quiz() -> Fallible<()> {
        let quiz = sample_quiz()?;
        assert_eq!(quiz.question_count(), 2);
        Ok(())
    }

    #[test]
    fn test_create_tmp_quiz_directory() -> Fallible<()> {
        let (_dir, path) = create_tmp_quiz_directory()?;
        assert!(path.exists());
        Ok(())
    }
}
