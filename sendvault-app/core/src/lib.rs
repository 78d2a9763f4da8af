//! Send repository layer of a password manager client.
//!
//! [`SendRepository`] turns user commands into vault SDK and send service
//! calls, and turns raw sync snapshots into sorted, grouped send list view
//! models. [`SendListProcessor`] drives the send list screen on top of it.
//! Cryptography, persistence and network sync are supplied by the host
//! through the traits in [`services`].

pub mod error;
pub mod models;
pub mod processor;
pub mod repository;
pub mod services;
pub mod state;
pub mod storage;

#[cfg(test)]
mod test_support;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{Result, SendVaultError};
pub use models::{
    EncryptedSend, SendListItem, SendListItemType, SendListSection, SendType, SendView,
    SyncSnapshot,
};
pub use processor::{SendListAction, SendListEffect, SendListProcessor, SendListState};
pub use repository::{ListingStream, SendRepository};
pub use services::{SendService, StateService, SyncService, VaultSdk};
pub use state::ServiceContainer;
pub use storage::{AppSettings, FileStateService};

/// Install the global tracing subscriber.
///
/// Honors `RUST_LOG`, defaulting to debug output for this crate. Does nothing
/// if a subscriber is already installed.
pub fn init_tracing() {
    let installed = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sendvault_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    if installed.is_ok() {
        tracing::info!("Tracing initialized");
    }
}
