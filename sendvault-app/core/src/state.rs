use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::error::Result;
use crate::models::SendView;
use crate::processor::{ErrorReporter, SendCoordinator, SendListProcessor};
use crate::repository::SendRepository;
use crate::services::{InMemorySendService, InMemorySyncService, SendService, SyncService, VaultSdk};
use crate::storage::FileStateService;

/// The collaborators the host application provides, wired together once at
/// startup and shared by every repository and processor.
pub struct ServiceContainer {
    pub sdk: Arc<dyn VaultSdk>,
    pub sync_service: Arc<dyn SyncService>,
    pub send_service: Arc<dyn SendService>,
    pub state_service: Arc<FileStateService>,
}

impl ServiceContainer {
    /// Wire the given collaborators, loading preferences from `settings_path`.
    pub fn new(
        sdk: Arc<dyn VaultSdk>,
        sync_service: Arc<dyn SyncService>,
        send_service: Arc<dyn SendService>,
        settings_path: PathBuf,
    ) -> Result<Self> {
        let state_service = Arc::new(FileStateService::open(settings_path)?);
        Ok(Self {
            sdk,
            sync_service,
            send_service,
            state_service,
        })
    }

    /// Wire `sdk` to in-memory sync and send services.
    pub fn in_memory(sdk: Arc<dyn VaultSdk>, settings_path: PathBuf) -> Result<Self> {
        let sync = Arc::new(InMemorySyncService::new());
        let sends = Arc::new(InMemorySendService::new(sync.clone()));
        Self::new(sdk, sync, sends, settings_path)
    }

    pub fn send_repository(&self) -> SendRepository {
        SendRepository::new(
            self.sdk.clone(),
            self.send_service.clone(),
            self.sync_service.clone(),
            self.state_service.clone(),
        )
    }

    pub fn send_list_processor(
        &self,
        coordinator: Arc<dyn SendCoordinator>,
        error_reporter: Arc<dyn ErrorReporter>,
    ) -> SendListProcessor {
        SendListProcessor::new(self.send_repository(), coordinator, error_reporter)
    }

    /// Run startup work: an automatic sync, if enabled in settings.
    pub async fn start(&self) -> Result<()> {
        let settings = self.state_service.settings().await;
        if !settings.sync_on_launch {
            debug!("Sync on launch disabled");
            return Ok(());
        }

        info!("Syncing on launch");
        self.send_repository().fetch_sync(false).await
    }

    /// A new text Send using the configured deletion delay.
    pub async fn new_text_send(&self, name: String, text: String) -> SendView {
        let days = self.state_service.settings().await.send_deletion_days;
        SendView::new_text(name, text, days, Utc::now())
    }
}
