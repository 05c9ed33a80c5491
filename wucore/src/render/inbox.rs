//! Inbox row derivation.

use serde::{Deserialize, Serialize};

use crate::model::Conversation;
use crate::render::avatar::{avatar_color_index, initials};
use crate::store::ConversationStore;

/// One row of the conversation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderableConversation {
    pub id: String,
    pub name: String,
    /// Fallback avatar initials derived from the conversation name.
    pub initials: String,
    /// Palette slot for the fallback avatar.
    pub avatar_color_index: usize,
    /// Member-count phrase for groups, empty for 1:1 threads.
    pub subtitle: String,
    /// Whether the row shows the unread dot.
    pub unread_dot: bool,
    pub last_message_preview: String,
    pub last_activity_time: String,
}

/// Member-count phrase shown under group names.
pub fn member_count_subtitle(count: usize) -> String {
    if count == 1 {
        "1 member".to_string()
    } else {
        format!("{count} members")
    }
}

/// Derive a single inbox row.
pub fn renderable_conversation(conversation: &Conversation) -> RenderableConversation {
    let subtitle = if conversation.is_group {
        member_count_subtitle(conversation.member_count())
    } else {
        String::new()
    };
    RenderableConversation {
        id: conversation.id.clone(),
        name: conversation.name.clone(),
        initials: initials(&conversation.name),
        avatar_color_index: avatar_color_index(&conversation.name),
        subtitle,
        unread_dot: conversation.has_unread,
        last_message_preview: conversation.last_message_preview.clone(),
        last_activity_time: conversation.last_activity_time.clone(),
    }
}

/// Derive the whole inbox. Rows keep store order; no recency sort is
/// applied here.
pub fn renderable_inbox(store: &ConversationStore) -> Vec<RenderableConversation> {
    store.iter().map(renderable_conversation).collect()
}
