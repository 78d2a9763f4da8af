use serde::{Deserialize, Serialize};

use super::send::{SendType, SendView};

/// Identifier of the send list section that groups Sends by type.
pub const TYPES_SECTION_ID: &str = "Types";
/// Identifier of the send list section that lists every Send.
pub const ALL_SENDS_SECTION_ID: &str = "AllSends";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SendListItemType {
    /// A summary row for every Send of one type.
    Group { send_type: SendType, count: usize },
    /// A row for a single Send.
    Send { send: SendView },
}

/// A row in the send list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendListItem {
    pub id: String,
    pub item_type: SendListItemType,
}

impl SendListItem {
    pub fn group(send_type: SendType, count: usize) -> Self {
        Self {
            id: send_type.group_id(),
            item_type: SendListItemType::Group { send_type, count },
        }
    }

    /// A row for `send`. Unsaved Sends have no identifier and get an empty id.
    pub fn send(send: SendView) -> Self {
        Self {
            id: send.id.clone().unwrap_or_default(),
            item_type: SendListItemType::Send { send },
        }
    }

    pub fn as_send(&self) -> Option<&SendView> {
        match &self.item_type {
            SendListItemType::Send { send } => Some(send),
            SendListItemType::Group { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendListSection {
    pub id: String,
    pub name: String,
    pub is_count_displayed: bool,
    pub items: Vec<SendListItem>,
}
