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

use std::future::Future;

use tokio::sync::mpsc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::fetch::FetchError;
use crate::fetch::QuizSource;
use crate::presenter::Navigation;
use crate::presenter::Presenter;
use crate::store::ScoreStore;
use crate::types::quiz::Quiz;
use crate::types::scene::Scene;
use crate::types::score_state::ScoreState;

const QUEUE_SIZE: usize = 32;

/// What the view needs to draw the current scene.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub scene: Scene,
    pub scene_index: usize,
    pub scene_count: usize,
    pub title: Option<String>,
    /// The score of the question whose answer is on screen.
    pub score: Option<ScoreState>,
    pub total_score: f64,
    pub qr_payload: String,
}

impl Snapshot {
    fn of(presenter: &Presenter) -> Self {
        Self {
            scene: presenter.current_scene(),
            scene_index: presenter.scene_index(),
            scene_count: presenter.scene_count(),
            title: presenter.quiz().map(|quiz| quiz.title().to_string()),
            score: presenter.score_of_current(),
            total_score: presenter.total_score(),
            qr_payload: presenter.qr_payload(),
        }
    }
}

enum Message {
    Loaded(Result<Quiz, FetchError>),
    Next(oneshot::Sender<Navigation>),
    Previous(oneshot::Sender<Navigation>),
    CycleScore(oneshot::Sender<Option<ScoreState>>),
    Snapshot(oneshot::Sender<Snapshot>),
}

/// A cheap, cloneable handle to a running session.
///
/// The presenter lives on a single task and is only ever touched there;
/// handles talk to it through a queue. The session ends when the last
/// handle is dropped.
#[derive(Clone)]
pub struct SessionHandle {
    tx: mpsc::Sender<Message>,
}

/// Start a session that loads its quiz from `source`.
pub fn spawn_session(store: ScoreStore, source: QuizSource) -> SessionHandle {
    spawn_session_with(store, async move { source.fetch().await })
}

/// Start a session whose quiz is produced by `fetch`.
pub fn spawn_session_with<F>(store: ScoreStore, fetch: F) -> SessionHandle
where
    F: Future<Output = Result<Quiz, FetchError>> + Send + 'static,
{
    let (tx, rx) = mpsc::channel(QUEUE_SIZE);
    // The fetch must not keep the session alive.
    let weak = tx.downgrade();
    let fetch_task = tokio::spawn(async move {
        let result = fetch.await;
        match weak.upgrade() {
            Some(tx) => {
                if tx.send(Message::Loaded(result)).await.is_err() {
                    log::debug!("Session ended before the quiz arrived.");
                }
            }
            None => log::debug!("Session ended before the quiz arrived."),
        }
    });
    tokio::spawn(run(Presenter::new(store), rx, fetch_task));
    SessionHandle { tx }
}

async fn run(mut presenter: Presenter, mut rx: mpsc::Receiver<Message>, fetch: JoinHandle<()>) {
    while let Some(message) = rx.recv().await {
        match message {
            Message::Loaded(result) => presenter.on_quiz_loaded(result),
            Message::Next(reply) => {
                let _ = reply.send(presenter.next());
            }
            Message::Previous(reply) => {
                let _ = reply.send(presenter.previous());
            }
            Message::CycleScore(reply) => {
                let _ = reply.send(presenter.cycle_score());
            }
            Message::Snapshot(reply) => {
                let _ = reply.send(Snapshot::of(&presenter));
            }
        }
    }
    fetch.abort();
    log::debug!("Session ended.");
}

impl SessionHandle {
    pub async fn next(&self) -> Fallible<Navigation> {
        self.request(Message::Next).await
    }

    pub async fn previous(&self) -> Fallible<Navigation> {
        self.request(Message::Previous).await
    }

    pub async fn cycle_score(&self) -> Fallible<Option<ScoreState>> {
        self.request(Message::CycleScore).await
    }

    pub async fn snapshot(&self) -> Fallible<Snapshot> {
        self.request(Message::Snapshot).await
    }

    async fn request<T>(&self, message: impl FnOnce(oneshot::Sender<T>) -> Message) -> Fallible<T> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(message(reply_tx))
            .await
            .map_err(|_| ErrorReport::new("session has ended"))?;
        reply_rx
            .await
            .map_err(|_| ErrorReport::new("session has ended"))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::sleep;
    use tokio::time::timeout;

    use super::*;
    use crate::helper::create_tmp_quiz_directory;
    use crate::helper::sample_quiz;

    async fn wait_until_loaded(session: &SessionHandle) -> Fallible<Snapshot> {
        loop {
            let snapshot = session.snapshot().await?;
            if snapshot.scene != Scene::Loading {
                return Ok(snapshot);
            }
            sleep(Duration::from_millis(1)).await;
        }
    }

    #[tokio::test]
    async fn test_loads_from_file() -> Fallible<()> {
        let (_dir, path) = create_tmp_quiz_directory()?;
        let session = spawn_session(ScoreStore::in_memory(), QuizSource::File { path });
        let snapshot = wait_until_loaded(&session).await?;
        assert!(matches!(snapshot.scene, Scene::Ready { .. }));
        assert_eq!(snapshot.scene_count, 9);
        assert_eq!(snapshot.title.as_deref(), Some("Saturday Quiz"));
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_failure_shows_failed_scene() -> Fallible<()> {
        let session = spawn_session_with(ScoreStore::in_memory(), async {
            Err(FetchError::Network("connection refused".to_string()))
        });
        let snapshot = wait_until_loaded(&session).await?;
        assert_eq!(
            snapshot.scene,
            Scene::Failed {
                reason: "could not fetch the quiz: connection refused".to_string()
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_commands_before_load_act_on_loading_scene() -> Fallible<()> {
        let (gate_tx, gate_rx) = oneshot::channel::<()>();
        let session = spawn_session_with(ScoreStore::in_memory(), async move {
            let _ = gate_rx.await;
            sample_quiz().map_err(|e| FetchError::Decode(e.to_string()))
        });
        assert_eq!(session.previous().await?, Navigation::Unchanged);
        assert_eq!(session.cycle_score().await?, None);
        assert_eq!(session.snapshot().await?.scene, Scene::Loading);
        let _ = gate_tx.send(());
        let snapshot = wait_until_loaded(&session).await?;
        assert!(matches!(snapshot.scene, Scene::Ready { .. }));
        assert_eq!(snapshot.scene_index, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_scoring_through_handle() -> Fallible<()> {
        let (_dir, path) = create_tmp_quiz_directory()?;
        let session = spawn_session(ScoreStore::in_memory(), QuizSource::File { path });
        wait_until_loaded(&session).await?;
        // Ready, Q1, Q2, Answers, Q1, then the first answer.
        for _ in 0..5 {
            assert_eq!(session.next().await?, Navigation::Moved);
        }
        assert_eq!(session.cycle_score().await?, Some(ScoreState::Full));
        let snapshot = session.snapshot().await?;
        assert_eq!(snapshot.score, Some(ScoreState::Full));
        assert_eq!(snapshot.total_score, 1.0);
        assert_eq!(snapshot.qr_payload, "1...\n\n1");
        Ok(())
    }

    #[tokio::test]
    async fn test_dropping_session_abandons_fetch() -> Fallible<()> {
        let (gate_tx, gate_rx) = oneshot::channel::<()>();
        let mut gate_tx = gate_tx;
        let session = spawn_session_with(ScoreStore::in_memory(), async move {
            let _ = gate_rx.await;
            sample_quiz().map_err(|e| FetchError::Decode(e.to_string()))
        });
        drop(session);
        // The fetch task is aborted, which drops the gate's receiver.
        let closed = timeout(Duration::from_secs(5), gate_tx.closed()).await;
        assert!(closed.is_ok());
        Ok(())
    }
}
