use std::sync::Arc;

use tracing::{debug, info};

use super::listing::{build_search_items, build_send_sections, build_type_items, decrypt_sorted};
use super::stream::{spawn_listing, ListingStream};
use crate::error::{Result, SendVaultError};
use crate::models::{SendListItem, SendListSection, SendType, SendView, SyncSnapshot};
use crate::services::{SendService, StateService, SyncService, VaultSdk};

/// Facade over the collaborators that own Sends.
///
/// Commands are encrypted with the vault SDK and handed to the send service;
/// errors from either propagate unchanged. The `*_stream` methods derive view
/// models from the sync service's snapshots and must be called from within a
/// tokio runtime.
#[derive(Clone)]
pub struct SendRepository {
    sdk: Arc<dyn VaultSdk>,
    send_service: Arc<dyn SendService>,
    sync_service: Arc<dyn SyncService>,
    state_service: Arc<dyn StateService>,
}

impl SendRepository {
    pub fn new(
        sdk: Arc<dyn VaultSdk>,
        send_service: Arc<dyn SendService>,
        sync_service: Arc<dyn SyncService>,
        state_service: Arc<dyn StateService>,
    ) -> Self {
        Self {
            sdk,
            send_service,
            sync_service,
            state_service,
        }
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Encrypt and store a new Send. Returns the stored Send, decrypted.
    pub async fn add_send(&self, view: &SendView) -> Result<SendView> {
        let encrypted = self.sdk.encrypt_send(view).await?;
        let stored = self.send_service.add_send(&encrypted).await?;
        info!("Added {} send {:?}", view.send_type, stored.id);
        self.sdk.decrypt_send(&stored).await
    }

    pub async fn update_send(&self, view: &SendView) -> Result<SendView> {
        if view.id.is_none() {
            return Err(SendVaultError::MissingId);
        }
        let encrypted = self.sdk.encrypt_send(view).await?;
        let stored = self.send_service.update_send(&encrypted).await?;
        info!("Updated send {:?}", stored.id);
        self.sdk.decrypt_send(&stored).await
    }

    pub async fn delete_send(&self, view: &SendView) -> Result<()> {
        let id = view.id.as_deref().ok_or(SendVaultError::MissingId)?;
        self.send_service.delete_send(id).await?;
        info!("Deleted send {}", id);
        Ok(())
    }

    /// Clear the access password of a Send. Returns the updated Send, decrypted.
    pub async fn remove_password(&self, view: &SendView) -> Result<SendView> {
        let id = view.id.as_deref().ok_or(SendVaultError::MissingId)?;
        let stored = self.send_service.remove_password(id).await?;
        info!("Removed password from send {}", id);
        self.sdk.decrypt_send(&stored).await
    }

    /// Sync with the server.
    ///
    /// Automatic refreshes always sync. A manual refresh only syncs when the
    /// user allows it; otherwise this does nothing.
    pub async fn fetch_sync(&self, is_manual_refresh: bool) -> Result<()> {
        if is_manual_refresh && !self.state_service.allow_sync_on_refresh().await? {
            debug!("Manual refresh sync disabled by preference, skipping");
            return Ok(());
        }

        debug!("Fetching sync (manual: {})", is_manual_refresh);
        self.sync_service.fetch_sync(is_manual_refresh).await
    }

    // =========================================================================
    // Streams
    // =========================================================================

    /// The send list: a "Types" section with per-type counts and an "All sends"
    /// section with every Send, both recomputed from each sync snapshot.
    pub fn send_list_stream(&self) -> ListingStream<Vec<SendListSection>> {
        let sdk = self.sdk.clone();
        spawn_listing("send list", self.sync_service.snapshots(), move |snapshot| {
            send_sections(sdk.clone(), snapshot)
        })
    }

    /// Every Send of one type, sorted by name.
    pub fn send_type_list_stream(&self, send_type: SendType) -> ListingStream<Vec<SendListItem>> {
        let sdk = self.sdk.clone();
        spawn_listing(
            "send type list",
            self.sync_service.snapshots(),
            move |snapshot| type_items(sdk.clone(), snapshot, send_type),
        )
    }

    /// Sends whose name matches `query`, sorted by name.
    pub fn search_send_stream(&self, query: String) -> ListingStream<Vec<SendListItem>> {
        let sdk = self.sdk.clone();
        spawn_listing("send search", self.sync_service.snapshots(), move |snapshot| {
            search_items(sdk.clone(), snapshot, query.clone())
        })
    }
}

async fn send_sections(
    sdk: Arc<dyn VaultSdk>,
    snapshot: SyncSnapshot,
) -> Result<Vec<SendListSection>> {
    let views = decrypt_sorted(sdk.as_ref(), &snapshot.sends).await?;
    Ok(build_send_sections(views))
}

async fn type_items(
    sdk: Arc<dyn VaultSdk>,
    snapshot: SyncSnapshot,
    send_type: SendType,
) -> Result<Vec<SendListItem>> {
    let views = decrypt_sorted(sdk.as_ref(), &snapshot.sends).await?;
    Ok(build_type_items(views, send_type))
}

async fn search_items(
    sdk: Arc<dyn VaultSdk>,
    snapshot: SyncSnapshot,
    query: String,
) -> Result<Vec<SendListItem>> {
    let views = decrypt_sorted(sdk.as_ref(), &snapshot.sends).await?;
    Ok(build_search_items(views, &query))
}
