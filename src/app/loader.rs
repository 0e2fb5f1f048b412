//! One-shot initial load.
//!
//! Two independent tasks race to end the loading phase: the posts fetch and
//! a fixed timer. Both report through the app's message channel and the
//! [`LoadGate`](super::LoadGate) decides which one wins. The fetch is never
//! cancelled, so a collection that arrives after the timer is still applied.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::AppMessage;
use crate::client::PostSource;

/// Handle to the loading timer.
///
/// Dropping the handle cancels the timer so a torn-down session never sees a
/// stale timeout. The fetch task is detached and runs to completion.
pub struct LoadHandle {
    timer: JoinHandle<()>,
}

impl LoadHandle {
    /// Stop the loading timer if it has not fired yet.
    pub fn cancel_timer(&self) {
        self.timer.abort();
    }
}

impl Drop for LoadHandle {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

/// Start the fetch and the loading timer.
///
/// Must be called from within a tokio runtime.
pub fn spawn_initial_load(
    source: Arc<dyn PostSource>,
    tx: mpsc::UnboundedSender<AppMessage>,
    ceiling: Duration,
) -> LoadHandle {
    let fetch_tx = tx.clone();
    tokio::spawn(async move {
        match source.fetch_posts().await {
            Ok(posts) => {
                tracing::info!(count = posts.len(), "posts fetched");
                let _ = fetch_tx.send(AppMessage::PostsLoaded(posts));
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch posts");
                let _ = fetch_tx.send(AppMessage::PostsLoadFailed {
                    error: e.to_string(),
                });
            }
        }
    });

    let timer = tokio::spawn(async move {
        tokio::time::sleep(ceiling).await;
        tracing::debug!(?ceiling, "loading ceiling elapsed");
        let _ = tx.send(AppMessage::LoadingTimedOut);
    });

    LoadHandle { timer }
}
