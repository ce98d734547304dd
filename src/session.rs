//! Process-wide session store with an explicit lifecycle.
//!
//! The bearer token and cached player are persisted together in one JSON
//! file under fixed keys. Views observe the session through a `watch`
//! subscription instead of reading device storage ad hoc.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::client::{ApiClient, rooms::MY_ROOMS_PATH};
use crate::models::{Player, Room};

/// The persisted session: bearer token plus the cached player record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub player: Player,
}

/// Single owner of the persisted session state.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    tx: watch::Sender<Option<Session>>,
}

impl SessionStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { path, tx }
    }

    /// Read the persisted session from device storage, if any. An unreadable
    /// or corrupt file counts as no session.
    #[must_use]
    pub fn load(&self) -> Option<Session> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "discarding corrupt session file");
                None
            }
        }
    }

    /// Restore the session at startup.
    ///
    /// Re-validates the stored token by calling the protected my-rooms
    /// endpoint; this is a capability check, not a dedicated verify-token
    /// endpoint. Any failure clears the stored session and forces re-login.
    pub async fn restore(&self, client: &mut ApiClient) -> Option<Session> {
        let session = self.load()?;
        client.set_token(Some(session.token.clone()));

        match client.get::<Vec<Room>>(MY_ROOMS_PATH).await {
            Ok(_) => {
                tracing::debug!(player = %session.player.username, "session restored");
                self.tx.send_replace(Some(session.clone()));
                Some(session)
            }
            Err(err) => {
                tracing::info!(error = %err, "stored session rejected, clearing");
                client.set_token(None);
                self.clear();
                None
            }
        }
    }

    /// Persist a new session and notify subscribers.
    ///
    /// # Errors
    ///
    /// Returns an error if the session file cannot be written.
    pub fn set(&self, session: Session) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&session).map_err(std::io::Error::other)?;
        fs::write(&self.path, raw)?;
        self.tx.send_replace(Some(session));
        Ok(())
    }

    /// Drop the persisted session and notify subscribers.
    pub fn clear(&self) {
        if self.path.exists()
            && let Err(err) = fs::remove_file(&self.path)
        {
            tracing::warn!(path = %self.path.display(), error = %err, "failed to remove session file");
        }
        self.tx.send_replace(None);
    }

    /// Current in-memory session, if signed in.
    #[must_use]
    pub fn current(&self) -> Option<Session> {
        self.tx.borrow().clone()
    }

    /// Observe session changes (sign-in, sign-out, forced logout).
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.tx.subscribe()
    }
}
