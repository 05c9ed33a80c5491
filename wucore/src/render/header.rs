//! Chat surface derivations: header, composer, details and the combined
//! chat view.

use serde::{Deserialize, Serialize};

use crate::model::{Conversation, Plan};
use crate::render::avatar::{avatar_color_index, initials};
use crate::render::inbox::member_count_subtitle;
use crate::render::messages::{RenderableMessage, renderable_messages};

/// Header block above an open transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderableChatHeader {
    pub title: String,
    /// Member-count phrase for groups, the thread's activity time for 1:1.
    pub subtitle: String,
    pub initials: String,
    pub avatar_color_index: usize,
    pub is_group: bool,
    /// Decorative indicator; the shipped app keeps it always on.
    pub show_typing_indicator: bool,
}

/// Composer strip at the bottom of the chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderableComposer {
    pub draft_text: String,
    /// Send is enabled only when the draft has non-whitespace content.
    pub send_enabled: bool,
}

/// One row of the details member list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderableMember {
    pub id: String,
    pub name: String,
    pub initials: String,
    pub avatar_color_index: usize,
    pub is_self: bool,
}

/// The details overlay for the open conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderableDetails {
    pub title: String,
    pub subtitle: String,
    pub initials: String,
    pub avatar_color_index: usize,
    pub is_group: bool,
    /// Members in seed order.
    pub members: Vec<RenderableMember>,
    pub plan: Option<Plan>,
}

/// Everything the chat view draws, in one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderableChat {
    pub header: RenderableChatHeader,
    /// Pinned plan card between header and transcript, when present.
    pub plan_banner: Option<Plan>,
    pub messages: Vec<RenderableMessage>,
    /// True exactly when the log is empty; the host then shows a single
    /// placeholder in place of the transcript.
    pub show_empty_state: bool,
    pub composer: RenderableComposer,
}

fn subtitle_for(conversation: &Conversation) -> String {
    if conversation.is_group {
        member_count_subtitle(conversation.member_count())
    } else {
        conversation.last_activity_time.clone()
    }
}

/// Derive the chat header for one conversation.
pub fn renderable_chat_header(conversation: &Conversation) -> RenderableChatHeader {
    RenderableChatHeader {
        title: conversation.name.clone(),
        subtitle: subtitle_for(conversation),
        initials: initials(&conversation.name),
        avatar_color_index: avatar_color_index(&conversation.name),
        is_group: conversation.is_group,
        show_typing_indicator: true,
    }
}

/// Derive the composer strip from the current draft.
pub fn renderable_composer(draft_text: &str) -> RenderableComposer {
    RenderableComposer {
        draft_text: draft_text.to_string(),
        send_enabled: !draft_text.trim().is_empty(),
    }
}

/// Derive the details overlay for one conversation.
pub fn renderable_details(conversation: &Conversation) -> RenderableDetails {
    RenderableDetails {
        title: conversation.name.clone(),
        subtitle: subtitle_for(conversation),
        initials: initials(&conversation.name),
        avatar_color_index: avatar_color_index(&conversation.name),
        is_group: conversation.is_group,
        members: conversation
            .members
            .iter()
            .map(|member| RenderableMember {
                id: member.id.clone(),
                name: member.name.clone(),
                initials: initials(&member.name),
                avatar_color_index: avatar_color_index(&member.name),
                is_self: member.is_self,
            })
            .collect(),
        plan: conversation.plan.clone(),
    }
}

/// Derive the complete chat view for one conversation and draft.
pub fn renderable_chat(conversation: &Conversation, draft_text: &str) -> RenderableChat {
    let messages = renderable_messages(conversation);
    let show_empty_state = messages.is_empty();
    RenderableChat {
        header: renderable_chat_header(conversation),
        plan_banner: conversation.plan.clone(),
        messages,
        show_empty_state,
        composer: renderable_composer(draft_text),
    }
}
