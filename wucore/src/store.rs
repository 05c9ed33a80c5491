//! In-memory conversation store.

use std::collections::HashSet;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::model::Conversation;

/// Ordered collection of every conversation the screen knows about.
///
/// Loaded once from a fixed seed and never repopulated; the only mutation
/// afterwards is the per-conversation unread flag. Iteration order is seed
/// order, and the inbox shows rows in exactly this order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationStore {
    conversations: Vec<Conversation>,
}

impl ConversationStore {
    /// Validate a seed and build the store from it.
    ///
    /// Structural violations (duplicate ids, missing or ambiguous local
    /// user, empty member lists) reject the whole seed. Messages whose
    /// sender matches no member are tolerated; each is logged here once.
    pub fn from_seed(conversations: Vec<Conversation>) -> Result<Self, StoreError> {
        let mut seen_ids = HashSet::new();
        for conversation in &conversations {
            if !seen_ids.insert(conversation.id.as_str()) {
                return Err(StoreError::DuplicateConversation {
                    id: conversation.id.clone(),
                });
            }
            conversation.validate()?;
            for message in conversation.dangling_messages() {
                warn!(
                    "conversation {} message {} has unknown sender {}; will render anonymously",
                    conversation.id, message.id, message.sender_id
                );
            }
        }
        Ok(Self { conversations })
    }

    // ========== Accessors ==========

    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    pub fn contains(&self, conversation_id: &str) -> bool {
        self.get(conversation_id).is_some()
    }

    pub fn get(&self, conversation_id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == conversation_id)
    }

    /// Conversations in seed order.
    pub fn iter(&self) -> impl Iterator<Item = &Conversation> {
        self.conversations.iter()
    }

    // ========== Unread flag ==========

    /// Clear the unread flag. Returns false when the id is unknown.
    pub fn mark_read(&mut self, conversation_id: &str) -> bool {
        match self.get_mut(conversation_id) {
            Some(conversation) => {
                conversation.mark_read();
                true
            }
            None => false,
        }
    }

    /// Set the unread flag. Returns false when the id is unknown.
    pub fn mark_unread(&mut self, conversation_id: &str) -> bool {
        match self.get_mut(conversation_id) {
            Some(conversation) => {
                conversation.mark_unread();
                true
            }
            None => false,
        }
    }

    fn get_mut(&mut self, conversation_id: &str) -> Option<&mut Conversation> {
        self.conversations
            .iter_mut()
            .find(|c| c.id == conversation_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Message, Participant};

    fn make_conversation(id: &str, name: &str) -> Conversation {
        Conversation::new(
            id,
            name,
            vec![
                Participant::local("me", "Alex Thompson"),
                Participant::new(format!("{id}-peer"), name),
            ],
        )
    }

    #[test]
    fn test_from_seed_accepts_valid_conversations() {
        let store = ConversationStore::from_seed(vec![
            make_conversation("c1", "Sarah Chen"),
            make_conversation("c2", "Jordan Lee"),
        ])
        .unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.contains("c1"));
        assert!(store.contains("c2"));
        assert!(!store.contains("c3"));
    }

    #[test]
    fn test_from_seed_rejects_duplicate_conversation_id() {
        let result = ConversationStore::from_seed(vec![
            make_conversation("c1", "Sarah Chen"),
            make_conversation("c1", "Sarah Again"),
        ]);
        assert_eq!(
            result,
            Err(StoreError::DuplicateConversation {
                id: "c1".to_string()
            })
        );
    }

    #[test]
    fn test_from_seed_propagates_conversation_violations() {
        let no_self = Conversation::new("c1", "No self", vec![Participant::new("a", "Ana")]);
        let result = ConversationStore::from_seed(vec![no_self]);
        assert_eq!(
            result,
            Err(StoreError::NoSelfParticipant {
                conversation_id: "c1".to_string()
            })
        );
    }

    #[test]
    fn test_from_seed_tolerates_dangling_sender() {
        let conv = make_conversation("c1", "Sarah Chen")
            .with_messages(vec![Message::new("m1", "ghost", "Boo", "8:00 PM")]);
        let store = ConversationStore::from_seed(vec![conv]).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_iteration_preserves_seed_order() {
        let store = ConversationStore::from_seed(vec![
            make_conversation("c3", "Maya Patel"),
            make_conversation("c1", "Sarah Chen"),
            make_conversation("c2", "Jordan Lee"),
        ])
        .unwrap();
        let ids: Vec<_> = store.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c3", "c1", "c2"]);
    }

    #[test]
    fn test_mark_read_and_unread() {
        let mut store =
            ConversationStore::from_seed(vec![make_conversation("c1", "Sarah Chen").with_unread()])
                .unwrap();
        assert!(store.get("c1").unwrap().has_unread);

        assert!(store.mark_read("c1"));
        assert!(!store.get("c1").unwrap().has_unread);

        assert!(store.mark_unread("c1"));
        assert!(store.get("c1").unwrap().has_unread);

        assert!(!store.mark_read("missing"));
        assert!(!store.mark_unread("missing"));
    }
}
