//! Game-state polling loop.
//!
//! The game screen starts one [`GameStatePoller`] when entered and drops it
//! when left; the background task is aborted deterministically on drop.
//! Fetches run one at a time inside the task, so a slow response delays the
//! next tick instead of stacking overlapping requests.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Notify, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::client::ApiClient;
use crate::models::GameState;

/// Cancellable background task re-fetching a room's game state on a fixed
/// interval.
#[derive(Debug)]
pub struct GameStatePoller {
    handle: JoinHandle<()>,
    rx: watch::Receiver<Option<GameState>>,
    refresh: Arc<Notify>,
}

impl GameStatePoller {
    /// Start polling. The first fetch happens immediately, then every
    /// `interval`; missed ticks are skipped rather than bursted.
    #[must_use]
    pub fn spawn(client: ApiClient, room_id: i64, interval: Duration) -> Self {
        let (tx, rx) = watch::channel(None);
        let refresh = Arc::new(Notify::new());
        let notify = Arc::clone(&refresh);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {}
                    () = notify.notified() => {}
                }
                let state = match client.game_state(room_id).await {
                    Ok(state) => Some(state),
                    Err(err) => {
                        tracing::warn!(room_id, error = %err, "game state poll failed");
                        None
                    }
                };
                // Snapshot replaced wholesale; whichever fetch lands last wins.
                tx.send_replace(state);
            }
        });

        Self {
            handle,
            rx,
            refresh,
        }
    }

    /// Observe snapshots as they arrive. `None` means the last fetch failed
    /// or none has completed yet.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<GameState>> {
        self.rx.clone()
    }

    /// Trigger an immediate out-of-band re-fetch, used right after a
    /// successful mutation instead of waiting for the next tick.
    pub fn refresh_now(&self) {
        self.refresh.notify_one();
    }

    /// Stop the polling task. Also happens automatically on drop.
    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for GameStatePoller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
