use std::future::Future;

use futures::stream::{self, Stream};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::error::{Result, SendVaultError};
use crate::models::SyncSnapshot;

/// A replay-latest view derived from sync snapshots.
///
/// New subscribers see the most recent value immediately; values that fail to
/// compute are never published, so the previous value stays current.
/// Dropping every handle stops the task that computes the values.
#[derive(Debug, Clone)]
pub struct ListingStream<T> {
    rx: watch::Receiver<Option<T>>,
}

impl<T: Clone> ListingStream<T> {
    /// The latest value, or `None` if nothing has been computed yet.
    pub fn current(&self) -> Option<T> {
        self.rx.borrow().clone()
    }

    /// Wait for a value newer than the last one seen through this handle.
    pub async fn changed(&mut self) -> Result<T> {
        loop {
            self.rx
                .changed()
                .await
                .map_err(|_| SendVaultError::ChannelClosed)?;
            let value = self.rx.borrow_and_update().clone();
            if let Some(value) = value {
                return Ok(value);
            }
        }
    }

    /// Convert into a `Stream` that yields the current value (if any) and then
    /// every later one.
    pub fn into_stream(self) -> impl Stream<Item = T>
    where
        T: Send + Sync + 'static,
    {
        stream::unfold((self.rx, true), |(mut rx, first)| async move {
            if first {
                let value = rx.borrow_and_update().clone();
                if let Some(value) = value {
                    return Some((value, (rx, false)));
                }
            }
            loop {
                rx.changed().await.ok()?;
                let value = rx.borrow_and_update().clone();
                if let Some(value) = value {
                    return Some((value, (rx, false)));
                }
            }
        })
    }
}

/// Spawn a task that recomputes a value from every sync snapshot.
///
/// Snapshots that arrive while a computation is running are coalesced, so
/// only the latest one is processed next. `None` snapshots are skipped.
/// Must be called from within a tokio runtime.
pub(crate) fn spawn_listing<T, F, Fut>(
    label: &'static str,
    mut snapshots: watch::Receiver<Option<SyncSnapshot>>,
    transform: F,
) -> ListingStream<T>
where
    T: Clone + Send + Sync + 'static,
    F: Fn(SyncSnapshot) -> Fut + Send + 'static,
    Fut: Future<Output = Result<T>> + Send + 'static,
{
    let (tx, rx) = watch::channel(None);

    tokio::spawn(async move {
        loop {
            let snapshot = snapshots.borrow_and_update().clone();
            if let Some(snapshot) = snapshot {
                match transform(snapshot).await {
                    Ok(value) => {
                        tx.send_replace(Some(value));
                        debug!("Published {} update", label);
                    }
                    Err(e) => {
                        warn!("Dropping {} update: {}", label, e);
                    }
                }
            }

            tokio::select! {
                changed = snapshots.changed() => {
                    if changed.is_err() {
                        debug!("Sync snapshots closed, stopping {} stream", label);
                        break;
                    }
                }
                _ = tx.closed() => {
                    debug!("No {} subscribers left, stopping", label);
                    break;
                }
            }
        }
    });

    ListingStream { rx }
}
