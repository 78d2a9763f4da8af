//! The send repository and the view models it derives from sync snapshots.

mod listing;
mod send;
mod stream;

pub use listing::{build_search_items, build_send_sections, build_type_items, decrypt_sorted};
pub use send::SendRepository;
pub use stream::ListingStream;
