use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// The kind of content a Send shares.
///
/// Declaration order is the display order used when Sends are grouped by type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SendType {
    File,
    Text,
}

impl SendType {
    pub const ALL: [SendType; 2] = [SendType::File, SendType::Text];

    pub fn localized_name(&self) -> &'static str {
        match self {
            Self::File => "File",
            Self::Text => "Text",
        }
    }

    /// Stable identifier of this type's group row in the send list.
    pub fn group_id(&self) -> String {
        format!("Types.{}", self.localized_name())
    }
}

impl std::fmt::Display for SendType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.localized_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTextView {
    pub text: Option<String>,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendFileView {
    pub id: Option<String>,
    pub file_name: String,
    pub size: Option<String>,
    pub size_name: Option<String>,
}

/// A decrypted Send, as shown to and edited by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendView {
    pub id: Option<String>,
    pub access_id: Option<String>,
    pub name: String,
    pub notes: Option<String>,
    pub key: Option<String>,
    /// Plaintext password to set on save. Never populated by decryption.
    pub new_password: Option<String>,
    pub has_password: bool,
    pub send_type: SendType,
    pub file: Option<SendFileView>,
    pub text: Option<SendTextView>,
    pub max_access_count: Option<u32>,
    pub access_count: u32,
    pub disabled: bool,
    pub hide_email: bool,
    pub revision_date: DateTime<Utc>,
    pub deletion_date: DateTime<Utc>,
    pub expiration_date: Option<DateTime<Utc>>,
}

impl SendView {
    /// A new, unsaved text Send scheduled for deletion `deletion_days` from `now`.
    pub fn new_text(name: String, text: String, deletion_days: i64, now: DateTime<Utc>) -> Self {
        let mut view = Self::blank(name, SendType::Text, deletion_days, now);
        view.text = Some(SendTextView {
            text: Some(text),
            hidden: false,
        });
        view
    }

    /// A new, unsaved file Send. The file body is uploaded by the send service.
    pub fn new_file(
        name: String,
        file_name: String,
        deletion_days: i64,
        now: DateTime<Utc>,
    ) -> Self {
        let mut view = Self::blank(name, SendType::File, deletion_days, now);
        view.file = Some(SendFileView {
            id: None,
            file_name,
            size: None,
            size_name: None,
        });
        view
    }

    fn blank(name: String, send_type: SendType, deletion_days: i64, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            access_id: None,
            name,
            notes: None,
            key: None,
            new_password: None,
            has_password: false,
            send_type,
            file: None,
            text: None,
            max_access_count: None,
            access_count: 0,
            disabled: false,
            hide_email: false,
            revision_date: now,
            deletion_date: now + Duration::days(deletion_days),
            expiration_date: None,
        }
    }

    pub fn with_notes(mut self, notes: String) -> Self {
        self.notes = Some(notes);
        self
    }

    pub fn with_password(mut self, password: String) -> Self {
        self.new_password = Some(password);
        self
    }

    pub fn with_max_access_count(mut self, max: u32) -> Self {
        self.max_access_count = Some(max);
        self
    }

    pub fn with_expiration_date(mut self, date: DateTime<Utc>) -> Self {
        self.expiration_date = Some(date);
        self
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiration_date.is_some_and(|date| date <= now)
    }

    pub fn is_pending_deletion(&self, now: DateTime<Utc>) -> bool {
        self.deletion_date <= now
    }

    pub fn max_access_count_reached(&self) -> bool {
        self.max_access_count.is_some_and(|max| self.access_count >= max)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendText {
    pub text: Option<String>,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendFile {
    pub id: Option<String>,
    pub file_name: String,
    pub size: Option<String>,
    pub size_name: Option<String>,
}

/// An encrypted Send as stored locally and exchanged with the server.
///
/// Every user-provided string is ciphertext produced by the vault SDK.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptedSend {
    pub id: Option<String>,
    pub access_id: Option<String>,
    pub name: String,
    pub notes: Option<String>,
    pub key: String,
    /// Hash of the access password, if one is set.
    pub password: Option<String>,
    pub send_type: SendType,
    pub file: Option<SendFile>,
    pub text: Option<SendText>,
    pub max_access_count: Option<u32>,
    pub access_count: u32,
    pub disabled: bool,
    pub hide_email: bool,
    pub revision_date: DateTime<Utc>,
    pub deletion_date: DateTime<Utc>,
    pub expiration_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-03-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_new_text_send_defaults() {
        let view = SendView::new_text("Wifi".into(), "hunter2".into(), 7, now());

        assert_eq!(view.send_type, SendType::Text);
        assert!(view.id.is_none());
        assert_eq!(view.deletion_date, now() + Duration::days(7));
        assert_eq!(view.text.unwrap().text.as_deref(), Some("hunter2"));
        assert!(view.file.is_none());
    }

    #[test]
    fn test_status_helpers() {
        let view = SendView::new_file("Report".into(), "report.pdf".into(), 1, now())
            .with_expiration_date(now() - Duration::hours(1))
            .with_max_access_count(3);

        assert!(view.is_expired(now()));
        assert!(!view.is_pending_deletion(now()));
        assert!(view.is_pending_deletion(now() + Duration::days(2)));
        assert!(!view.max_access_count_reached());

        let exhausted = SendView {
            access_count: 3,
            ..view
        };
        assert!(exhausted.max_access_count_reached());
    }

    #[test]
    fn test_type_display_order() {
        assert_eq!(SendType::ALL, [SendType::File, SendType::Text]);
        assert!(SendType::File < SendType::Text);
        assert_eq!(SendType::Text.group_id(), "Types.Text");
    }
}
