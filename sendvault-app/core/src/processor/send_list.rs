use std::sync::Arc;

use futures::StreamExt;
use tracing::{debug, warn};

use super::coordinator::{Alert, ErrorReporter, SendCoordinator, SendRoute};
use crate::error::SendVaultError;
use crate::models::{
    SendListItem, SendListItemType, SendListSection, SendType, SendView, ALL_SENDS_SECTION_ID,
};
use crate::repository::{build_search_items, SendRepository};

/// State of the send list screen.
#[derive(Debug, Clone, PartialEq)]
pub struct SendListState {
    pub sections: Vec<SendListSection>,
    /// True until the first listing arrives.
    pub is_loading: bool,
    pub search_text: String,
    pub search_results: Vec<SendListItem>,
    pub toast: Option<String>,
}

impl Default for SendListState {
    fn default() -> Self {
        Self {
            sections: Vec::new(),
            is_loading: true,
            search_text: String::new(),
            search_results: Vec::new(),
            toast: None,
        }
    }
}

/// Synchronous user actions and state updates.
#[derive(Debug, Clone, PartialEq)]
pub enum SendListAction {
    AddItemPressed(Option<SendType>),
    ItemPressed(SendListItem),
    SearchTextChanged(String),
    SectionsUpdated(Vec<SendListSection>),
    ToastDismissed,
}

/// Actions that call into the repository.
#[derive(Debug, Clone, PartialEq)]
pub enum SendListEffect {
    /// Pull-to-refresh.
    Refresh,
    AddSend(SendView),
    DeleteSend(SendView),
    RemovePassword(SendView),
}

pub struct SendListProcessor {
    repository: SendRepository,
    coordinator: Arc<dyn SendCoordinator>,
    error_reporter: Arc<dyn ErrorReporter>,
    state: SendListState,
}

impl SendListProcessor {
    pub fn new(
        repository: SendRepository,
        coordinator: Arc<dyn SendCoordinator>,
        error_reporter: Arc<dyn ErrorReporter>,
    ) -> Self {
        Self {
            repository,
            coordinator,
            error_reporter,
            state: SendListState::default(),
        }
    }

    pub fn state(&self) -> &SendListState {
        &self.state
    }

    pub fn receive(&mut self, action: SendListAction) {
        match action {
            SendListAction::AddItemPressed(send_type) => {
                self.coordinator.navigate(SendRoute::AddItem { send_type });
            }
            SendListAction::ItemPressed(item) => match item.item_type {
                SendListItemType::Group { send_type, .. } => {
                    self.coordinator.navigate(SendRoute::Group { send_type });
                }
                SendListItemType::Send { send } => {
                    if send.id.is_none() {
                        self.error_reporter.report(&SendVaultError::MissingId);
                        return;
                    }
                    self.coordinator.navigate(SendRoute::EditItem { send });
                }
            },
            SendListAction::SearchTextChanged(text) => {
                self.state.search_text = text;
                self.update_search_results();
            }
            SendListAction::SectionsUpdated(sections) => {
                self.state.sections = sections;
                self.state.is_loading = false;
                self.update_search_results();
            }
            SendListAction::ToastDismissed => {
                self.state.toast = None;
            }
        }
    }

    pub async fn perform(&mut self, effect: SendListEffect) {
        let result = match &effect {
            SendListEffect::Refresh => self.repository.fetch_sync(true).await.map(|_| None),
            SendListEffect::AddSend(view) => self
                .repository
                .add_send(view)
                .await
                .map(|_| Some("Send created")),
            SendListEffect::DeleteSend(view) => self
                .repository
                .delete_send(view)
                .await
                .map(|_| Some("Send deleted")),
            SendListEffect::RemovePassword(view) => self
                .repository
                .remove_password(view)
                .await
                .map(|_| Some("Password removed")),
        };

        match result {
            Ok(toast) => {
                if let Some(toast) = toast {
                    self.state.toast = Some(toast.to_string());
                }
            }
            Err(e) => self.handle_error(e, effect),
        }
    }

    /// Apply every send list update until the underlying stream closes.
    ///
    /// Dropping the returned future stops listening.
    pub async fn stream_send_list(&mut self) {
        let mut updates = Box::pin(self.repository.send_list_stream().into_stream());
        while let Some(sections) = updates.next().await {
            self.receive(SendListAction::SectionsUpdated(sections));
        }
        debug!("Send list stream ended");
    }

    fn update_search_results(&mut self) {
        let views: Vec<SendView> = self
            .state
            .sections
            .iter()
            .filter(|section| section.id == ALL_SENDS_SECTION_ID)
            .flat_map(|section| section.items.iter())
            .filter_map(|item| item.as_send().cloned())
            .collect();
        self.state.search_results = build_search_items(views, &self.state.search_text);
    }

    fn handle_error(&self, err: SendVaultError, retry: SendListEffect) {
        match err {
            SendVaultError::MissingId | SendVaultError::InvalidState(_) => {
                self.error_reporter.report(&err);
            }
            _ => {
                warn!("Send list effect failed: {}", err);
                self.coordinator.show_alert(&Alert::for_error(&err, retry));
            }
        }
    }
}
