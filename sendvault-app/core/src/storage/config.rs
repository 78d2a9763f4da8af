use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::Path;

use crate::error::{Result, SendVaultError};

/// Allowed values for `send_deletion_days`.
pub const SEND_DELETION_DAYS: RangeInclusive<i64> = 1..=31;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Whether pull-to-refresh may trigger a network sync.
    pub allow_sync_on_refresh: bool,
    pub sync_on_launch: bool,
    /// Days until a newly created Send is deleted.
    pub send_deletion_days: i64,
}

impl AppSettings {
    pub fn validate(&self) -> Result<()> {
        if !SEND_DELETION_DAYS.contains(&self.send_deletion_days) {
            return Err(SendVaultError::Config(format!(
                "send_deletion_days must be between {} and {}, got {}",
                SEND_DELETION_DAYS.start(),
                SEND_DELETION_DAYS.end(),
                self.send_deletion_days
            )));
        }
        Ok(())
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            allow_sync_on_refresh: false,
            sync_on_launch: true,
            send_deletion_days: 7,
        }
    }
}

pub fn load_settings(path: &Path) -> Result<AppSettings> {
    if !path.exists() {
        return Ok(AppSettings::default());
    }

    let content = std::fs::read_to_string(path)?;
    let settings: AppSettings = serde_json::from_str(&content)?;
    settings.validate()?;
    Ok(settings)
}

pub fn save_settings(path: &Path, settings: &AppSettings) -> Result<()> {
    settings.validate()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SendVaultError;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, AppSettings::default());
        assert!(!settings.allow_sync_on_refresh);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = AppSettings {
            allow_sync_on_refresh: true,
            ..AppSettings::default()
        };

        save_settings(&path, &settings).unwrap();
        assert_eq!(load_settings(&path).unwrap(), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"allow_sync_on_refresh": true}"#).unwrap();

        let settings = load_settings(&path).unwrap();
        assert!(settings.allow_sync_on_refresh);
        assert_eq!(settings.send_deletion_days, 7);
    }

    #[test]
    fn test_out_of_range_deletion_days_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        for days in ["100000000", "0", "-3"] {
            std::fs::write(&path, format!(r#"{{"send_deletion_days": {}}}"#, days)).unwrap();
            assert!(matches!(
                load_settings(&path),
                Err(SendVaultError::Config(_))
            ));
        }
    }

    #[test]
    fn test_save_rejects_out_of_range_deletion_days() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = AppSettings {
            send_deletion_days: 32,
            ..AppSettings::default()
        };

        assert!(matches!(
            save_settings(&path, &settings),
            Err(SendVaultError::Config(_))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_malformed_file_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            load_settings(&path),
            Err(SendVaultError::Serialization(_))
        ));
    }
}
