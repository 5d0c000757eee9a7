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

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::fetch::QuizSource;
use crate::types::question::QuestionKind;

/// Fetch and decode the quiz without presenting it.
pub async fn check_quiz(source: QuizSource) -> Fallible<()> {
    let quiz = source
        .fetch()
        .await
        .map_err(|e| ErrorReport::new(e.to_string()))?;
    let what_links = quiz
        .questions()
        .iter()
        .filter(|q| q.kind() == QuestionKind::WhatLinks)
        .count();
    println!(
        "{} ({}): {} questions, {} what-links.",
        quiz.title(),
        quiz.quiz_date(),
        quiz.question_count(),
        what_links
    );
    for question in quiz.questions() {
        println!(
            "{:>3}. [{}] {}",
            question.number(),
            question.kind().as_str(),
            question.question_text()
        );
        if !question.link_items().is_empty() {
            println!("     links: {}", question.link_items().join(", "));
        }
    }
    println!("ok");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::check_quiz;
    use crate::error::Fallible;
    use crate::fetch::QuizSource;
    use crate::helper::create_tmp_quiz_directory;

    #[tokio::test]
    async fn test_non_existent_file() {
        let source = QuizSource::File {
            path: PathBuf::from("./derpherp.json"),
        };
        assert!(check_quiz(source).await.is_err());
    }

    #[tokio::test]
    async fn test_valid_file() -> Fallible<()> {
        let (_dir, path) = create_tmp_quiz_directory()?;
        assert!(check_quiz(QuizSource::File { path }).await.is_ok());
        Ok(())
    }
}
