//! Collaborator interfaces consumed by the send repository.
//!
//! Cryptography, persistence and network synchronization live outside this
//! crate. These traits are the seams where a host application plugs in its
//! vault SDK, sync engine and preference store.

use async_trait::async_trait;
use tokio::sync::watch;

use crate::error::Result;
use crate::models::{EncryptedSend, SendView, SyncSnapshot};

/// Encrypts and decrypts Sends with the active account's keys.
#[async_trait]
pub trait VaultSdk: Send + Sync {
    async fn encrypt_send(&self, view: &SendView) -> Result<EncryptedSend>;

    async fn decrypt_send(&self, send: &EncryptedSend) -> Result<SendView>;
}

/// Pulls account data from the server and publishes raw sync snapshots.
#[async_trait]
pub trait SyncService: Send + Sync {
    /// Request a sync with the server.
    ///
    /// `force` asks the service to sync even if its revision date says the
    /// local data is current.
    async fn fetch_sync(&self, force: bool) -> Result<()>;

    /// Subscribe to sync snapshots.
    ///
    /// The receiver replays the latest snapshot (`None` until the first sync
    /// completes) and is notified of each new one.
    fn snapshots(&self) -> watch::Receiver<Option<SyncSnapshot>>;
}

/// Submits encrypted Sends to the server and local store.
#[async_trait]
pub trait SendService: Send + Sync {
    /// Create a Send. Returns the stored Send with server-assigned fields.
    async fn add_send(&self, send: &EncryptedSend) -> Result<EncryptedSend>;

    async fn update_send(&self, send: &EncryptedSend) -> Result<EncryptedSend>;

    async fn delete_send(&self, id: &str) -> Result<()>;

    /// Clear the access password of a Send.
    async fn remove_password(&self, id: &str) -> Result<EncryptedSend>;
}

/// Read access to the user's persisted preferences.
#[async_trait]
pub trait StateService: Send + Sync {
    /// Whether a manual (pull-to-refresh) sync is allowed to hit the network.
    async fn allow_sync_on_refresh(&self) -> Result<bool>;
}
