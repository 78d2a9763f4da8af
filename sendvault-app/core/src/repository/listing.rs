//! Transforms from a sync snapshot to send list view models.
//!
//! Everything here is a pure function of its inputs plus decryption, so
//! recomputing from the same snapshot always yields the same sections.

use futures::future::try_join_all;

use crate::error::Result;
use crate::models::collation::{contains_folded, localized_cmp};
use crate::models::{
    EncryptedSend, SendListItem, SendListSection, SendType, SendView, ALL_SENDS_SECTION_ID,
    TYPES_SECTION_ID,
};
use crate::services::VaultSdk;

/// Decrypt every Send and sort the results by localized name.
///
/// Fails as a whole if any single Send fails to decrypt.
pub async fn decrypt_sorted(sdk: &dyn VaultSdk, sends: &[EncryptedSend]) -> Result<Vec<SendView>> {
    let mut views = try_join_all(sends.iter().map(|send| sdk.decrypt_send(send))).await?;
    views.sort_by(|a, b| localized_cmp(&a.name, &b.name));
    Ok(views)
}

/// Build the two-section send list: per-type counts, then every Send.
///
/// `views` must already be sorted. No Sends yields no sections, which the
/// list screen renders as its empty state.
pub fn build_send_sections(views: Vec<SendView>) -> Vec<SendListSection> {
    if views.is_empty() {
        return Vec::new();
    }

    let types = SendType::ALL
        .iter()
        .map(|send_type| {
            let count = views.iter().filter(|v| v.send_type == *send_type).count();
            SendListItem::group(*send_type, count)
        })
        .collect();

    vec![
        SendListSection {
            id: TYPES_SECTION_ID.to_string(),
            name: "Types".to_string(),
            is_count_displayed: false,
            items: types,
        },
        SendListSection {
            id: ALL_SENDS_SECTION_ID.to_string(),
            name: "All sends".to_string(),
            is_count_displayed: true,
            items: views.into_iter().map(SendListItem::send).collect(),
        },
    ]
}

pub fn build_type_items(views: Vec<SendView>, send_type: SendType) -> Vec<SendListItem> {
    views
        .into_iter()
        .filter(|v| v.send_type == send_type)
        .map(SendListItem::send)
        .collect()
}

/// Sends whose name contains `query`. A blank query matches nothing.
pub fn build_search_items(views: Vec<SendView>, query: &str) -> Vec<SendListItem> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    views
        .into_iter()
        .filter(|v| contains_folded(&v.name, query))
        .map(SendListItem::send)
        .collect()
}
