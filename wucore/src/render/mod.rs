//! Pure derivations from conversation data to renderable view descriptions.
//!
//! Nothing here mutates anything. Each function takes a snapshot of the
//! model and returns plain serializable structs the host lays out 1:1.

mod avatar;
mod header;
mod inbox;
mod messages;

pub use avatar::{AVATAR_COLOR_SLOTS, avatar_color_index, initials};
pub use header::{
    RenderableChat, RenderableChatHeader, RenderableComposer, RenderableDetails, RenderableMember,
    renderable_chat, renderable_chat_header, renderable_composer, renderable_details,
};
pub use inbox::{
    RenderableConversation, member_count_subtitle, renderable_conversation, renderable_inbox,
};
pub use messages::{Alignment, RenderableMessage, first_for_sender, renderable_messages};
