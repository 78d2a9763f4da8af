//! In-memory collaborators.
//!
//! These back the repository without a server, for embedding in tests and
//! offline previews. Sends handed to them must already be encrypted.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::{watch, RwLock};
use tracing::debug;
use uuid::Uuid;

use super::traits::{SendService, SyncService};
use crate::error::{Result, SendVaultError};
use crate::models::{EncryptedSend, SyncSnapshot};

/// A sync service whose "server" is whatever was last published to it.
pub struct InMemorySyncService {
    tx: watch::Sender<Option<SyncSnapshot>>,
    fetch_count: AtomicUsize,
    fetch_error: RwLock<Option<String>>,
}

impl InMemorySyncService {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        Self {
            tx,
            fetch_count: AtomicUsize::new(0),
            fetch_error: RwLock::new(None),
        }
    }

    /// Publish a new snapshot to every subscriber.
    pub fn publish(&self, snapshot: SyncSnapshot) {
        debug!(
            "Publishing sync snapshot with {} sends",
            snapshot.sends.len()
        );
        self.tx.send_replace(Some(snapshot));
    }

    pub fn latest(&self) -> Option<SyncSnapshot> {
        self.tx.borrow().clone()
    }

    /// Number of times `fetch_sync` has been called.
    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }

    /// Make every following fetch fail with a network error until cleared.
    pub async fn set_fetch_error(&self, error: Option<String>) {
        *self.fetch_error.write().await = error;
    }
}

impl Default for InMemorySyncService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SyncService for InMemorySyncService {
    async fn fetch_sync(&self, force: bool) -> Result<()> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = self.fetch_error.read().await.as_ref() {
            return Err(SendVaultError::Network(error.clone()));
        }

        // A fetch re-delivers the current server state, if there is one.
        let republished = self.tx.send_if_modified(|snapshot| snapshot.is_some());
        debug!("In-memory sync (force: {}), republished: {}", force, republished);
        Ok(())
    }

    fn snapshots(&self) -> watch::Receiver<Option<SyncSnapshot>> {
        self.tx.subscribe()
    }
}

/// A send service that stores Sends in memory and publishes every change as a
/// fresh snapshot on the linked sync service.
pub struct InMemorySendService {
    sends: RwLock<Vec<EncryptedSend>>,
    sync: Arc<InMemorySyncService>,
}

impl InMemorySendService {
    pub fn new(sync: Arc<InMemorySyncService>) -> Self {
        Self {
            sends: RwLock::new(Vec::new()),
            sync,
        }
    }

    pub async fn sends(&self) -> Vec<EncryptedSend> {
        self.sends.read().await.clone()
    }

    fn publish(&self, sends: &[EncryptedSend]) {
        self.sync
            .publish(SyncSnapshot::new(sends.to_vec(), Utc::now()));
    }
}

#[async_trait]
impl SendService for InMemorySendService {
    async fn add_send(&self, send: &EncryptedSend) -> Result<EncryptedSend> {
        let mut stored = send.clone();
        stored.id = Some(Uuid::new_v4().to_string());
        stored.access_id = Some(Uuid::new_v4().simple().to_string());
        stored.revision_date = Utc::now();

        let mut sends = self.sends.write().await;
        sends.push(stored.clone());
        self.publish(&sends);
        Ok(stored)
    }

    async fn update_send(&self, send: &EncryptedSend) -> Result<EncryptedSend> {
        let id = send.id.as_deref().ok_or(SendVaultError::MissingId)?;

        let mut sends = self.sends.write().await;
        let existing = sends
            .iter_mut()
            .find(|s| s.id.as_deref() == Some(id))
            .ok_or_else(|| SendVaultError::SendNotFound(id.to_string()))?;

        *existing = send.clone();
        existing.revision_date = Utc::now();
        let updated = existing.clone();
        self.publish(&sends);
        Ok(updated)
    }

    async fn delete_send(&self, id: &str) -> Result<()> {
        let mut sends = self.sends.write().await;
        let before = sends.len();
        sends.retain(|s| s.id.as_deref() != Some(id));
        if sends.len() == before {
            return Err(SendVaultError::SendNotFound(id.to_string()));
        }
        self.publish(&sends);
        Ok(())
    }

    async fn remove_password(&self, id: &str) -> Result<EncryptedSend> {
        let mut sends = self.sends.write().await;
        let existing = sends
            .iter_mut()
            .find(|s| s.id.as_deref() == Some(id))
            .ok_or_else(|| SendVaultError::SendNotFound(id.to_string()))?;

        existing.password = None;
        existing.revision_date = Utc::now();
        let updated = existing.clone();
        self.publish(&sends);
        Ok(updated)
    }
}
