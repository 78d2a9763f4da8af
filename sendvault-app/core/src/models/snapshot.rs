use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::send::EncryptedSend;

/// A raw sync response from the server.
///
/// Only the parts this crate consumes are modeled; every Send is still encrypted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncSnapshot {
    pub revision_date: DateTime<Utc>,
    pub sends: Vec<EncryptedSend>,
}

impl SyncSnapshot {
    pub fn new(sends: Vec<EncryptedSend>, revision_date: DateTime<Utc>) -> Self {
        Self {
            revision_date,
            sends,
        }
    }
}
