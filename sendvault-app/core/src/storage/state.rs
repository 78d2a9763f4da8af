use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::config::{load_settings, save_settings, AppSettings};
use crate::error::Result;
use crate::services::StateService;

/// Preference store backed by a JSON settings file.
///
/// Settings are read once on open and kept in memory; setters write through
/// to disk before updating the in-memory copy.
pub struct FileStateService {
    path: PathBuf,
    settings: RwLock<AppSettings>,
}

impl FileStateService {
    pub fn open(path: PathBuf) -> Result<Self> {
        let settings = load_settings(&path)?;
        info!("Loaded settings from {}", path.display());
        Ok(Self {
            path,
            settings: RwLock::new(settings),
        })
    }

    pub async fn settings(&self) -> AppSettings {
        self.settings.read().await.clone()
    }

    pub async fn update_settings(&self, settings: AppSettings) -> Result<()> {
        let mut current = self.settings.write().await;
        save_settings(&self.path, &settings)?;
        *current = settings;
        debug!("Settings saved to {}", self.path.display());
        Ok(())
    }

    pub async fn set_allow_sync_on_refresh(&self, allow: bool) -> Result<()> {
        let settings = AppSettings {
            allow_sync_on_refresh: allow,
            ..self.settings().await
        };
        self.update_settings(settings).await
    }
}

#[async_trait]
impl StateService for FileStateService {
    async fn allow_sync_on_refresh(&self) -> Result<bool> {
        Ok(self.settings.read().await.allow_sync_on_refresh)
    }
}
