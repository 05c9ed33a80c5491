//! Host-facing conversation view controller.
//!
//! One controller instance backs the whole messaging screen. The host
//! forwards user interactions as [`ViewEvent`]s and redraws from the
//! renderable snapshots after every accepted event; it never inspects the
//! store or decides display policy itself.

use log::{debug, warn};

use wucore::error::TransitionError;
use wucore::model::Conversation;
use wucore::render::{
    RenderableChat, RenderableConversation, RenderableDetails, RenderableMessage, renderable_chat,
    renderable_details, renderable_inbox, renderable_messages,
};
use wucore::store::ConversationStore;
use wucore::view::{ViewEvent, ViewState};

use crate::config::ControllerConfig;

/// Owns the conversation store and the screen state.
pub struct ConversationController {
    store: ConversationStore,
    view: ViewState,
    config: ControllerConfig,
}

impl ConversationController {
    pub fn new(store: ConversationStore) -> Self {
        Self::with_config(store, ControllerConfig::default())
    }

    pub fn with_config(store: ConversationStore, config: ControllerConfig) -> Self {
        Self {
            store,
            view: ViewState::default(),
            config,
        }
    }

    // ========== Event intake ==========

    /// Apply one user interaction. Returns whether it was accepted.
    ///
    /// Rejected events are logged and leave every piece of state exactly as
    /// it was; the screen simply does not react.
    pub fn handle(&mut self, event: ViewEvent) -> bool {
        match self.view.apply(&event, &self.store, self.config.back_from_details) {
            Ok(()) => {
                if self.config.mark_read_on_open
                    && matches!(event, ViewEvent::OpenConversation { .. })
                    && let Some(id) = self.view.selected_conversation_id.clone()
                {
                    self.store.mark_read(&id);
                }
                debug!("{} accepted, now in {:?}", event.name(), self.view.mode);
                true
            }
            Err(TransitionError::UnknownConversation { id }) => {
                warn!("ignoring {} for unknown conversation {id}", event.name());
                false
            }
            Err(TransitionError::InvalidTransition { event, mode }) => {
                debug!("ignoring {event} in {mode:?} view");
                false
            }
        }
    }

    /// Tap on an inbox row.
    pub fn open_conversation(&mut self, conversation_id: impl Into<String>) -> bool {
        self.handle(ViewEvent::OpenConversation {
            conversation_id: conversation_id.into(),
        })
    }

    /// Tap on the back affordance.
    pub fn go_back(&mut self) -> bool {
        self.handle(ViewEvent::GoBack)
    }

    /// Tap on the chat header.
    pub fn open_details(&mut self) -> bool {
        self.handle(ViewEvent::OpenDetails)
    }

    /// Keystroke in the composer; `text` replaces the whole draft.
    pub fn set_draft_text(&mut self, text: impl Into<String>) -> bool {
        self.handle(ViewEvent::SetDraftText { text: text.into() })
    }

    // ========== Render queries ==========

    /// Rows of the conversation list, in store order.
    pub fn renderable_inbox(&self) -> Vec<RenderableConversation> {
        renderable_inbox(&self.store)
    }

    /// Transcript of the open conversation. Empty when none is open.
    pub fn renderable_messages(&self) -> Vec<RenderableMessage> {
        match self.selected_conversation() {
            Some(conversation) => renderable_messages(conversation),
            None => Vec::new(),
        }
    }

    /// Full chat surface for the open conversation, or `None` in the inbox.
    pub fn renderable_chat(&self) -> Option<RenderableChat> {
        self.selected_conversation()
            .map(|conversation| renderable_chat(conversation, &self.view.draft_text))
    }

    /// Details overlay for the open conversation, or `None` in the inbox.
    pub fn renderable_details(&self) -> Option<RenderableDetails> {
        self.selected_conversation().map(renderable_details)
    }

    // ========== State access ==========

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    /// The conversation the screen is focused on, while one is open.
    pub fn selected_conversation(&self) -> Option<&Conversation> {
        self.view
            .selected_conversation_id
            .as_deref()
            .and_then(|id| self.store.get(id))
    }

    // ========== Store actions ==========

    /// Clear a conversation's unread flag outside the open flow.
    pub fn mark_read(&mut self, conversation_id: &str) -> bool {
        self.store.mark_read(conversation_id)
    }

    /// Flag a conversation as unread, e.g. when the host injects activity.
    pub fn mark_unread(&mut self, conversation_id: &str) -> bool {
        self.store.mark_unread(conversation_id)
    }
}
