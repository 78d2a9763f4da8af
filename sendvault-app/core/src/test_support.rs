//! Test doubles shared by the unit tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::error::{Result, SendVaultError};
use crate::models::{
    EncryptedSend, SendFile, SendFileView, SendText, SendTextView, SendType, SendView,
};
use crate::processor::{Alert, ErrorReporter, SendCoordinator, SendRoute};
use crate::services::{StateService, VaultSdk};

const PREFIX: &str = "enc:";

pub fn fixed_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-03-01T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn seal(value: &str) -> String {
    format!("{}{}", PREFIX, value)
}

fn open(value: &str) -> Result<String> {
    value
        .strip_prefix(PREFIX)
        .map(str::to_string)
        .ok_or_else(|| SendVaultError::Decryption(format!("not ciphertext: {}", value)))
}

/// Reversible stand-in for the vault SDK: ciphertext is the plaintext with a
/// marker prefix, and anything without the marker fails to decrypt.
pub struct FakeVaultSdk {
    encrypted: Mutex<Vec<SendView>>,
    fail_encrypt: AtomicBool,
    fail_decrypt: AtomicBool,
}

impl FakeVaultSdk {
    pub fn new() -> Self {
        Self {
            encrypted: Mutex::new(Vec::new()),
            fail_encrypt: AtomicBool::new(false),
            fail_decrypt: AtomicBool::new(false),
        }
    }

    /// Every view passed to `encrypt_send`, in call order.
    pub fn encrypted(&self) -> Vec<SendView> {
        self.encrypted.lock().unwrap().clone()
    }

    pub fn set_fail_encrypt(&self, fail: bool) {
        self.fail_encrypt.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_decrypt(&self, fail: bool) {
        self.fail_decrypt.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl VaultSdk for FakeVaultSdk {
    async fn encrypt_send(&self, view: &SendView) -> Result<EncryptedSend> {
        self.encrypted.lock().unwrap().push(view.clone());
        if self.fail_encrypt.load(Ordering::SeqCst) {
            return Err(SendVaultError::Encryption("key unavailable".into()));
        }

        Ok(EncryptedSend {
            id: view.id.clone(),
            access_id: view.access_id.clone(),
            name: seal(&view.name),
            notes: view.notes.as_deref().map(seal),
            key: seal(view.key.as_deref().unwrap_or("generated-key")),
            password: view
                .new_password
                .as_deref()
                .map(|p| format!("hash:{}", p))
                .or_else(|| view.has_password.then(|| "hash:existing".to_string())),
            send_type: view.send_type,
            file: view.file.as_ref().map(|f| SendFile {
                id: f.id.clone(),
                file_name: seal(&f.file_name),
                size: f.size.clone(),
                size_name: f.size_name.clone(),
            }),
            text: view.text.as_ref().map(|t| SendText {
                text: t.text.as_deref().map(seal),
                hidden: t.hidden,
            }),
            max_access_count: view.max_access_count,
            access_count: view.access_count,
            disabled: view.disabled,
            hide_email: view.hide_email,
            revision_date: view.revision_date,
            deletion_date: view.deletion_date,
            expiration_date: view.expiration_date,
        })
    }

    async fn decrypt_send(&self, send: &EncryptedSend) -> Result<SendView> {
        if self.fail_decrypt.load(Ordering::SeqCst) {
            return Err(SendVaultError::Decryption("key rotated".into()));
        }

        Ok(SendView {
            id: send.id.clone(),
            access_id: send.access_id.clone(),
            name: open(&send.name)?,
            notes: send.notes.as_deref().map(open).transpose()?,
            key: Some(open(&send.key)?),
            new_password: None,
            has_password: send.password.is_some(),
            send_type: send.send_type,
            file: send
                .file
                .as_ref()
                .map(|f| -> Result<SendFileView> {
                    Ok(SendFileView {
                        id: f.id.clone(),
                        file_name: open(&f.file_name)?,
                        size: f.size.clone(),
                        size_name: f.size_name.clone(),
                    })
                })
                .transpose()?,
            text: send
                .text
                .as_ref()
                .map(|t| -> Result<SendTextView> {
                    Ok(SendTextView {
                        text: t.text.as_deref().map(open).transpose()?,
                        hidden: t.hidden,
                    })
                })
                .transpose()?,
            max_access_count: send.max_access_count,
            access_count: send.access_count,
            disabled: send.disabled,
            hide_email: send.hide_email,
            revision_date: send.revision_date,
            deletion_date: send.deletion_date,
            expiration_date: send.expiration_date,
        })
    }
}

fn encrypted_send(id: Option<&str>, name: &str, send_type: SendType) -> EncryptedSend {
    EncryptedSend {
        id: id.map(str::to_string),
        access_id: None,
        name: seal(name),
        notes: None,
        key: seal("key"),
        password: None,
        send_type,
        file: None,
        text: None,
        max_access_count: None,
        access_count: 0,
        disabled: false,
        hide_email: false,
        revision_date: fixed_now(),
        deletion_date: fixed_now() + Duration::days(7),
        expiration_date: None,
    }
}

pub fn encrypted_text_send(id: Option<&str>, name: &str) -> EncryptedSend {
    EncryptedSend {
        text: Some(SendText {
            text: Some(seal("body")),
            hidden: false,
        }),
        ..encrypted_send(id, name, SendType::Text)
    }
}

pub fn encrypted_file_send(id: Option<&str>, name: &str) -> EncryptedSend {
    EncryptedSend {
        file: Some(SendFile {
            id: Some("file-id".into()),
            file_name: seal("file.bin"),
            size: Some("1024".into()),
            size_name: Some("1 KB".into()),
        }),
        ..encrypted_send(id, name, SendType::File)
    }
}

/// Preference store with a fixed answer.
pub struct FixedStateService {
    pub allow_sync_on_refresh: bool,
}

#[async_trait]
impl StateService for FixedStateService {
    async fn allow_sync_on_refresh(&self) -> Result<bool> {
        Ok(self.allow_sync_on_refresh)
    }
}

#[derive(Default)]
pub struct RecordingCoordinator {
    pub routes: Mutex<Vec<SendRoute>>,
    pub alerts: Mutex<Vec<Alert>>,
}

impl SendCoordinator for RecordingCoordinator {
    fn navigate(&self, route: SendRoute) {
        self.routes.lock().unwrap().push(route);
    }

    fn show_alert(&self, alert: &Alert) {
        self.alerts.lock().unwrap().push(alert.clone());
    }
}

#[derive(Default)]
pub struct RecordingErrorReporter {
    pub errors: Mutex<Vec<String>>,
}

impl ErrorReporter for RecordingErrorReporter {
    fn report(&self, error: &SendVaultError) {
        self.errors.lock().unwrap().push(error.to_string());
    }
}
