//! Per-message display decisions for the transcript.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::model::{Conversation, Message};

/// Horizontal placement of a bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Received: leading edge.
    Start,
    /// Sent by the local user: trailing edge.
    End,
}

/// One transcript bubble, fully decided. The host lays this out verbatim
/// and applies no policy of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderableMessage {
    pub id: String,
    pub text: String,
    pub alignment: Alignment,
    /// Whether the sender's name is drawn above the bubble. Only ever true
    /// for received messages in group conversations.
    pub show_sender_label: bool,
    /// Display name of the sender. `None` when the sender id matches no
    /// member of the conversation.
    pub sender_name: Option<String>,
    pub show_timestamp: bool,
    pub time: String,
}

/// Whether the message at `index` starts a new run of consecutive messages
/// from the same sender. Index 0 always does.
pub fn first_for_sender(messages: &[Message], index: usize) -> bool {
    if index == 0 {
        return true;
    }
    messages[index].sender_id != messages[index - 1].sender_id
}

/// Derive the full transcript for one conversation, in log order.
///
/// A sender id that matches no member is logged and rendered as a received
/// message with no name label; it still terminates the previous sender's
/// run, since runs compare raw sender ids.
pub fn renderable_messages(conversation: &Conversation) -> Vec<RenderableMessage> {
    conversation
        .messages
        .iter()
        .enumerate()
        .map(|(index, message)| {
            let sender = conversation.member(&message.sender_id);
            if sender.is_none() {
                warn!(
                    "conversation {} message {} references unknown sender {}",
                    conversation.id, message.id, message.sender_id
                );
            }
            let is_self = sender.is_some_and(|p| p.is_self);
            RenderableMessage {
                id: message.id.clone(),
                text: message.text.clone(),
                alignment: if is_self { Alignment::End } else { Alignment::Start },
                show_sender_label: !is_self
                    && conversation.is_group
                    && first_for_sender(&conversation.messages, index),
                sender_name: sender.map(|p| p.name.clone()),
                show_timestamp: message.show_timestamp,
                time: message.time.clone(),
            }
        })
        .collect()
}
