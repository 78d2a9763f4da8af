pub mod collation;
mod listing;
mod send;
mod snapshot;

pub use listing::{
    SendListItem, SendListItemType, SendListSection, ALL_SENDS_SECTION_ID, TYPES_SECTION_ID,
};
pub use send::{EncryptedSend, SendFile, SendFileView, SendText, SendTextView, SendType, SendView};
pub use snapshot::SyncSnapshot;
