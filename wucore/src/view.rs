//! View-mode state machine for the messaging screen.
//!
//! The screen is always in exactly one of three modes. Events either move
//! it along a permitted edge or are rejected without touching the state;
//! there are no partial transitions.

use serde::{Deserialize, Serialize};

use crate::error::TransitionError;
use crate::store::ConversationStore;

/// Which part of the messaging flow is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// The conversation list. Initial mode.
    #[default]
    Inbox,
    /// An open conversation transcript.
    Chat,
    /// The details overlay for the open conversation.
    Details,
}

impl ViewMode {
    pub fn is_inbox(&self) -> bool {
        matches!(self, Self::Inbox)
    }

    pub fn is_chat(&self) -> bool {
        matches!(self, Self::Chat)
    }

    pub fn is_details(&self) -> bool {
        matches!(self, Self::Details)
    }

    /// Whether this mode shows a single conversation and therefore needs a
    /// selection.
    pub fn requires_selection(&self) -> bool {
        !self.is_inbox()
    }
}

/// Where `GoBack` lands when leaving the details overlay.
///
/// The shipped app collapses straight to the inbox; returning to the chat
/// is the alternative a host can opt into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackFromDetails {
    /// Collapse to the inbox, clearing selection and draft.
    #[default]
    Inbox,
    /// Return to the open chat, keeping selection and draft.
    Chat,
}

/// A user interaction forwarded by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewEvent {
    /// Tap on an inbox row.
    OpenConversation { conversation_id: String },
    /// Tap on the back affordance.
    GoBack,
    /// Tap on the chat header.
    OpenDetails,
    /// Keystroke in the composer; carries the full replacement text.
    SetDraftText { text: String },
}

impl ViewEvent {
    /// Short name used in logs and rejection errors.
    pub fn name(&self) -> &'static str {
        match self {
            ViewEvent::OpenConversation { .. } => "open_conversation",
            ViewEvent::GoBack => "go_back",
            ViewEvent::OpenDetails => "open_details",
            ViewEvent::SetDraftText { .. } => "set_draft_text",
        }
    }
}

/// Mutable screen state: mode, selection and the uncommitted draft.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewState {
    /// Current mode.
    pub mode: ViewMode,
    /// Selected conversation. `Some` exactly while the mode requires a
    /// selection, and always an id present in the store.
    pub selected_conversation_id: Option<String>,
    /// Composer text for the open conversation. Not persisted across
    /// navigation; leaving the chat discards it.
    pub draft_text: String,
}

impl ViewState {
    /// Apply one event, or report why it is not permitted.
    ///
    /// On rejection the state is left exactly as it was.
    pub fn apply(
        &mut self,
        event: &ViewEvent,
        store: &ConversationStore,
        back_from_details: BackFromDetails,
    ) -> Result<(), TransitionError> {
        match event {
            ViewEvent::OpenConversation { conversation_id } => {
                if !self.mode.is_inbox() {
                    return Err(self.rejection(event));
                }
                if !store.contains(conversation_id) {
                    return Err(TransitionError::UnknownConversation {
                        id: conversation_id.clone(),
                    });
                }
                self.mode = ViewMode::Chat;
                self.selected_conversation_id = Some(conversation_id.clone());
                self.draft_text.clear();
                Ok(())
            }
            ViewEvent::GoBack => match self.mode {
                ViewMode::Inbox => Err(self.rejection(event)),
                ViewMode::Chat => {
                    self.collapse_to_inbox();
                    Ok(())
                }
                ViewMode::Details => {
                    match back_from_details {
                        BackFromDetails::Inbox => self.collapse_to_inbox(),
                        // Selection and draft stay live underneath the overlay.
                        BackFromDetails::Chat => self.mode = ViewMode::Chat,
                    }
                    Ok(())
                }
            },
            ViewEvent::OpenDetails => {
                if !self.mode.is_chat() {
                    return Err(self.rejection(event));
                }
                self.mode = ViewMode::Details;
                Ok(())
            }
            ViewEvent::SetDraftText { text } => {
                if self.mode.is_inbox() {
                    return Err(self.rejection(event));
                }
                self.draft_text = text.clone();
                Ok(())
            }
        }
    }

    /// Selection is present exactly when the mode calls for one.
    pub fn is_consistent(&self) -> bool {
        self.selected_conversation_id.is_some() == self.mode.requires_selection()
    }

    fn collapse_to_inbox(&mut self) {
        self.mode = ViewMode::Inbox;
        self.selected_conversation_id = None;
        self.draft_text.clear();
    }

    fn rejection(&self, event: &ViewEvent) -> TransitionError {
        TransitionError::InvalidTransition {
            event: event.name(),
            mode: self.mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Conversation, Participant};

    fn make_store() -> ConversationStore {
        let pair = |id: &str, name: &str| {
            Conversation::new(
                id,
                name,
                vec![
                    Participant::local("me", "Alex Thompson"),
                    Participant::new(format!("{id}-peer"), name),
                ],
            )
        };
        ConversationStore::from_seed(vec![pair("c1", "Sarah Chen"), pair("c2", "Jordan Lee")])
            .unwrap()
    }

    fn open(state: &mut ViewState, store: &ConversationStore, id: &str) {
        state
            .apply(
                &ViewEvent::OpenConversation {
                    conversation_id: id.to_string(),
                },
                store,
                BackFromDetails::default(),
            )
            .unwrap();
    }

    #[test]
    fn test_initial_state() {
        let state = ViewState::default();
        assert_eq!(state.mode, ViewMode::Inbox);
        assert!(state.selected_conversation_id.is_none());
        assert!(state.draft_text.is_empty());
        assert!(state.is_consistent());
    }

    #[test]
    fn test_open_conversation_moves_to_chat() {
        let store = make_store();
        let mut state = ViewState::default();
        open(&mut state, &store, "c1");

        assert_eq!(state.mode, ViewMode::Chat);
        assert_eq!(state.selected_conversation_id.as_deref(), Some("c1"));
        assert!(state.draft_text.is_empty());
        assert!(state.is_consistent());
    }

    #[test]
    fn test_open_unknown_conversation_is_rejected_without_change() {
        let store = make_store();
        let mut state = ViewState::default();
        let before = state.clone();

        let result = state.apply(
            &ViewEvent::OpenConversation {
                conversation_id: "nope".to_string(),
            },
            &store,
            BackFromDetails::default(),
        );
        assert_eq!(
            result,
            Err(TransitionError::UnknownConversation {
                id: "nope".to_string()
            })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_open_conversation_from_chat_is_rejected() {
        let store = make_store();
        let mut state = ViewState::default();
        open(&mut state, &store, "c1");
        let before = state.clone();

        let result = state.apply(
            &ViewEvent::OpenConversation {
                conversation_id: "c2".to_string(),
            },
            &store,
            BackFromDetails::default(),
        );
        assert_eq!(
            result,
            Err(TransitionError::InvalidTransition {
                event: "open_conversation",
                mode: ViewMode::Chat
            })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_go_back_from_chat_clears_selection_and_draft() {
        let store = make_store();
        let mut state = ViewState::default();
        open(&mut state, &store, "c1");
        state
            .apply(
                &ViewEvent::SetDraftText {
                    text: "On my way".to_string(),
                },
                &store,
                BackFromDetails::default(),
            )
            .unwrap();

        state
            .apply(&ViewEvent::GoBack, &store, BackFromDetails::default())
            .unwrap();
        assert_eq!(state.mode, ViewMode::Inbox);
        assert!(state.selected_conversation_id.is_none());
        assert!(state.draft_text.is_empty());
        assert!(state.is_consistent());
    }

    #[test]
    fn test_go_back_from_inbox_is_rejected() {
        let store = make_store();
        let mut state = ViewState::default();
        let result = state.apply(&ViewEvent::GoBack, &store, BackFromDetails::default());
        assert_eq!(
            result,
            Err(TransitionError::InvalidTransition {
                event: "go_back",
                mode: ViewMode::Inbox
            })
        );
    }

    #[test]
    fn test_open_details_only_from_chat() {
        let store = make_store();
        let mut state = ViewState::default();

        let from_inbox = state.apply(&ViewEvent::OpenDetails, &store, BackFromDetails::default());
        assert_eq!(
            from_inbox,
            Err(TransitionError::InvalidTransition {
                event: "open_details",
                mode: ViewMode::Inbox
            })
        );

        open(&mut state, &store, "c1");
        state
            .apply(&ViewEvent::OpenDetails, &store, BackFromDetails::default())
            .unwrap();
        assert_eq!(state.mode, ViewMode::Details);
        assert_eq!(state.selected_conversation_id.as_deref(), Some("c1"));
    }

    #[test]
    fn test_open_details_twice_leaves_state_unchanged() {
        let store = make_store();
        let mut state = ViewState::default();
        open(&mut state, &store, "c1");
        state
            .apply(&ViewEvent::OpenDetails, &store, BackFromDetails::default())
            .unwrap();
        let before = state.clone();

        let second = state.apply(&ViewEvent::OpenDetails, &store, BackFromDetails::default());
        assert_eq!(
            second,
            Err(TransitionError::InvalidTransition {
                event: "open_details",
                mode: ViewMode::Details
            })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_back_from_details_collapses_to_inbox_by_default() {
        let store = make_store();
        let mut state = ViewState::default();
        open(&mut state, &store, "c1");
        state
            .apply(&ViewEvent::OpenDetails, &store, BackFromDetails::default())
            .unwrap();

        state
            .apply(&ViewEvent::GoBack, &store, BackFromDetails::default())
            .unwrap();
        assert_eq!(state.mode, ViewMode::Inbox);
        assert!(state.selected_conversation_id.is_none());
        assert!(state.is_consistent());
    }

    #[test]
    fn test_back_from_details_can_return_to_chat() {
        let store = make_store();
        let mut state = ViewState::default();
        open(&mut state, &store, "c1");
        state
            .apply(
                &ViewEvent::SetDraftText {
                    text: "draft".to_string(),
                },
                &store,
                BackFromDetails::Chat,
            )
            .unwrap();
        state
            .apply(&ViewEvent::OpenDetails, &store, BackFromDetails::Chat)
            .unwrap();

        state
            .apply(&ViewEvent::GoBack, &store, BackFromDetails::Chat)
            .unwrap();
        assert_eq!(state.mode, ViewMode::Chat);
        assert_eq!(state.selected_conversation_id.as_deref(), Some("c1"));
        assert_eq!(state.draft_text, "draft");
    }

    #[test]
    fn test_set_draft_rejected_in_inbox() {
        let store = make_store();
        let mut state = ViewState::default();
        let result = state.apply(
            &ViewEvent::SetDraftText {
                text: "hello".to_string(),
            },
            &store,
            BackFromDetails::default(),
        );
        assert_eq!(
            result,
            Err(TransitionError::InvalidTransition {
                event: "set_draft_text",
                mode: ViewMode::Inbox
            })
        );
        assert!(state.draft_text.is_empty());
    }

    #[test]
    fn test_set_draft_allowed_in_chat_and_details() {
        let store = make_store();
        let mut state = ViewState::default();
        open(&mut state, &store, "c1");

        state
            .apply(
                &ViewEvent::SetDraftText {
                    text: "first".to_string(),
                },
                &store,
                BackFromDetails::Chat,
            )
            .unwrap();
        assert_eq!(state.draft_text, "first");

        state
            .apply(&ViewEvent::OpenDetails, &store, BackFromDetails::Chat)
            .unwrap();
        state
            .apply(
                &ViewEvent::SetDraftText {
                    text: "second".to_string(),
                },
                &store,
                BackFromDetails::Chat,
            )
            .unwrap();
        assert_eq!(state.draft_text, "second");
    }

    #[test]
    fn test_reopening_starts_with_empty_draft() {
        let store = make_store();
        let mut state = ViewState::default();
        open(&mut state, &store, "c1");
        state
            .apply(
                &ViewEvent::SetDraftText {
                    text: "unsent".to_string(),
                },
                &store,
                BackFromDetails::default(),
            )
            .unwrap();
        state
            .apply(&ViewEvent::GoBack, &store, BackFromDetails::default())
            .unwrap();

        open(&mut state, &store, "c1");
        assert!(state.draft_text.is_empty());
    }
}
