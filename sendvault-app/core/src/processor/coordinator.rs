use serde::Serialize;
use tracing::error;

use super::send_list::SendListEffect;
use crate::error::SendVaultError;
use crate::models::{SendType, SendView};

/// Destinations the send list can navigate to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SendRoute {
    /// Create a Send, optionally preselecting its type.
    AddItem { send_type: Option<SendType> },
    EditItem { send: SendView },
    /// List every Send of one type.
    Group { send_type: SendType },
}

/// A user-visible error, optionally offering to retry the failed effect.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub retry: Option<SendListEffect>,
}

impl Alert {
    pub fn for_error(error: &SendVaultError, retry: SendListEffect) -> Self {
        if error.is_retryable() {
            Self {
                title: "Network error".to_string(),
                message: error.to_string(),
                retry: Some(retry),
            }
        } else {
            Self {
                title: "An error has occurred".to_string(),
                message: error.to_string(),
                retry: None,
            }
        }
    }
}

/// Performs navigation and presents alerts on behalf of a processor.
pub trait SendCoordinator: Send + Sync {
    fn navigate(&self, route: SendRoute);

    fn show_alert(&self, alert: &Alert);
}

/// Receives errors that are not the user's to act on.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, error: &SendVaultError);
}

/// Reports errors to the tracing log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, err: &SendVaultError) {
        error!("Send list error: {}", err);
    }
}
