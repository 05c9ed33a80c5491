//! Conversation data model.
//!
//! These types are plain data. Everything the screen shows is derived from
//! them by the functions in [`crate::render`]; the only mutation after load
//! is the per-conversation unread flag.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// A person attached to a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique id within the conversation.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Whether this participant is the local user.
    pub is_self: bool,
}

impl Participant {
    /// Create a regular participant.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_self: false,
        }
    }

    /// Create the participant representing the local user.
    pub fn local(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_self: true,
        }
    }
}

/// A single entry in a conversation's message log.
///
/// Times are opaque display strings authored with the data ("8:02 PM",
/// "Yesterday"). The core never parses or compares them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique id within the conversation.
    pub id: String,
    /// Id of the sending participant.
    pub sender_id: String,
    /// Message body.
    pub text: String,
    /// Display time for the timestamp row.
    pub time: String,
    /// Whether the timestamp row is shown under this bubble. Authored with
    /// the data, passed through to the renderable untouched.
    pub show_timestamp: bool,
}

impl Message {
    pub fn new(
        id: impl Into<String>,
        sender_id: impl Into<String>,
        text: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            sender_id: sender_id.into(),
            text: text.into(),
            time: time.into(),
            show_timestamp: false,
        }
    }

    /// Show the timestamp row under this bubble.
    pub fn with_timestamp(mut self) -> Self {
        self.show_timestamp = true;
        self
    }
}

/// A pinned plan card attached to a group conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    /// Headline, e.g. the event name.
    pub title: String,
    /// Detail line, e.g. date, time and place.
    pub subtitle: String,
    /// Label of the accept action.
    pub primary_action_label: String,
    /// Label of the decline action.
    pub secondary_action_label: String,
}

impl Plan {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: subtitle.into(),
            primary_action_label: "I'm in".to_string(),
            secondary_action_label: "Can't make it".to_string(),
        }
    }
}

/// One conversation thread: members, metadata and the ordered message log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique id within the store.
    pub id: String,
    /// Display name: the other person for 1:1 threads, the group title
    /// otherwise.
    pub name: String,
    /// Preview line for the inbox row, authored with the data.
    pub last_message_preview: String,
    /// Display time of the latest activity, authored with the data.
    pub last_activity_time: String,
    /// Whether the inbox row carries the unread dot.
    pub has_unread: bool,
    /// Whether sender labels are shown above received bubbles. An explicit
    /// flag, not derived from the member count.
    pub is_group: bool,
    /// Participants. Exactly one must be the local user.
    pub members: Vec<Participant>,
    /// Optional pinned plan card.
    pub plan: Option<Plan>,
    /// Message log. Vec order is chronological order; there is no sorting.
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn new(id: impl Into<String>, name: impl Into<String>, members: Vec<Participant>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            last_message_preview: String::new(),
            last_activity_time: String::new(),
            has_unread: false,
            is_group: false,
            members,
            plan: None,
            messages: Vec::new(),
        }
    }

    /// Set the inbox preview line and activity time.
    pub fn with_preview(mut self, preview: impl Into<String>, time: impl Into<String>) -> Self {
        self.last_message_preview = preview.into();
        self.last_activity_time = time.into();
        self
    }

    /// Mark the thread unread.
    pub fn with_unread(mut self) -> Self {
        self.has_unread = true;
        self
    }

    /// Enable sender labels on received bubbles.
    pub fn as_group(mut self) -> Self {
        self.is_group = true;
        self
    }

    /// Attach a pinned plan card.
    pub fn with_plan(mut self, plan: Plan) -> Self {
        self.plan = Some(plan);
        self
    }

    /// Replace the message log.
    pub fn with_messages(mut self, messages: Vec<Message>) -> Self {
        self.messages = messages;
        self
    }

    // ========== Lookups ==========

    /// The participant with the given id, if any.
    pub fn member(&self, participant_id: &str) -> Option<&Participant> {
        self.members.iter().find(|p| p.id == participant_id)
    }

    /// The participant marked as the local user.
    ///
    /// Validation guarantees exactly one exists in a loaded conversation.
    pub fn self_member(&self) -> Option<&Participant> {
        self.members.iter().find(|p| p.is_self)
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Messages whose sender id matches no member. These are tolerated at
    /// load and rendered anonymously.
    pub fn dangling_messages(&self) -> impl Iterator<Item = &Message> {
        self.messages
            .iter()
            .filter(|m| self.member(&m.sender_id).is_none())
    }

    // ========== Unread flag ==========

    pub fn mark_read(&mut self) {
        self.has_unread = false;
    }

    pub fn mark_unread(&mut self) {
        self.has_unread = true;
    }

    // ========== Validation ==========

    /// Check the structural rules enforced at store load.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.members.is_empty() {
            return Err(StoreError::EmptyMembers {
                conversation_id: self.id.clone(),
            });
        }

        let mut seen_members = HashSet::new();
        for member in &self.members {
            if !seen_members.insert(member.id.as_str()) {
                return Err(StoreError::DuplicateParticipant {
                    conversation_id: self.id.clone(),
                    participant_id: member.id.clone(),
                });
            }
        }

        match self.members.iter().filter(|p| p.is_self).count() {
            0 => {
                return Err(StoreError::NoSelfParticipant {
                    conversation_id: self.id.clone(),
                });
            }
            1 => {}
            _ => {
                return Err(StoreError::MultipleSelfParticipants {
                    conversation_id: self.id.clone(),
                });
            }
        }

        let mut seen_messages = HashSet::new();
        for message in &self.messages {
            if !seen_messages.insert(message.id.as_str()) {
                return Err(StoreError::DuplicateMessage {
                    conversation_id: self.id.clone(),
                    message_id: message.id.clone(),
                });
            }
        }

        Ok(())
    }
}
