//! Error types for store loading and view transitions.

use thiserror::Error;

use crate::view::ViewMode;

/// Violation found while loading a conversation set into the store.
///
/// All of these reject the offending seed outright. A message whose sender
/// id matches no member is deliberately not in this list; such messages are
/// tolerated and rendered anonymously.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("duplicate conversation id '{id}'")]
    DuplicateConversation { id: String },

    #[error("conversation '{conversation_id}' has no members")]
    EmptyMembers { conversation_id: String },

    #[error("conversation '{conversation_id}' has no participant marked as the local user")]
    NoSelfParticipant { conversation_id: String },

    #[error("conversation '{conversation_id}' has multiple participants marked as the local user")]
    MultipleSelfParticipants { conversation_id: String },

    #[error("conversation '{conversation_id}' has duplicate participant id '{participant_id}'")]
    DuplicateParticipant {
        conversation_id: String,
        participant_id: String,
    },

    #[error("conversation '{conversation_id}' has duplicate message id '{message_id}'")]
    DuplicateMessage {
        conversation_id: String,
        message_id: String,
    },
}

/// Rejection produced by the view-state machine.
///
/// Neither variant is fatal. The controller logs the rejection, leaves the
/// screen state untouched and keeps accepting events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("'{event}' is not permitted in the {mode:?} view")]
    InvalidTransition {
        event: &'static str,
        mode: ViewMode,
    },

    #[error("unknown conversation id '{id}'")]
    UnknownConversation { id: String },
}
