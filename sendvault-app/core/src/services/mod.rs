mod memory;
mod traits;

pub use memory::{InMemorySendService, InMemorySyncService};
pub use traits::{SendService, StateService, SyncService, VaultSdk};
