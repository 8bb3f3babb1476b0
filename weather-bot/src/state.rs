//! Per-chat conversation state: the single input the bot expects next from each chat.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// What the next plain-text message from a chat is expected to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PendingInput {
    #[default]
    None,
    AwaitingCity,
}

/// In-memory map from chat id to [`PendingInput`]. Holds no history and is lost on restart.
///
/// The mutex makes every operation atomic, including [`ConversationStore::take`], so the store stays
/// correct even if a transport dispatches different chats concurrently.
#[derive(Debug, Default)]
pub struct ConversationStore {
    pending: Mutex<HashMap<i64, PendingInput>>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<i64, PendingInput>> {
        // A panic while holding the lock cannot leave the map half-updated.
        self.pending.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns the chat's pending input, `None` when the chat has no entry.
    pub fn get(&self, chat_id: i64) -> PendingInput {
        self.lock().get(&chat_id).copied().unwrap_or_default()
    }

    /// Sets the chat's pending input; setting `None` removes the entry.
    pub fn set(&self, chat_id: i64, value: PendingInput) {
        let mut pending = self.lock();
        match value {
            PendingInput::None => {
                pending.remove(&chat_id);
            }
            other => {
                pending.insert(chat_id, other);
            }
        }
    }

    pub fn clear(&self, chat_id: i64) {
        self.lock().remove(&chat_id);
    }

    /// Returns the chat's pending input and clears it in one step.
    pub fn take(&self, chat_id: i64) -> PendingInput {
        self.lock().remove(&chat_id).unwrap_or_default()
    }

    /// Number of chats with something pending.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_defaults_to_none() {
        let store = ConversationStore::new();
        assert_eq!(store.get(1), PendingInput::None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_then_clear_returns_none() {
        let store = ConversationStore::new();
        for chat_id in [i64::MIN, -100123, 0, 42, i64::MAX] {
            store.set(chat_id, PendingInput::AwaitingCity);
            assert_eq!(store.get(chat_id), PendingInput::AwaitingCity);
            store.clear(chat_id);
            assert_eq!(store.get(chat_id), PendingInput::None);
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_chats_are_independent() {
        let store = ConversationStore::new();
        store.set(1, PendingInput::AwaitingCity);
        assert_eq!(store.get(2), PendingInput::None);
        store.clear(2);
        assert_eq!(store.get(1), PendingInput::AwaitingCity);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_take_is_get_and_clear() {
        let store = ConversationStore::new();
        store.set(7, PendingInput::AwaitingCity);
        assert_eq!(store.take(7), PendingInput::AwaitingCity);
        assert_eq!(store.take(7), PendingInput::None);
        assert_eq!(store.get(7), PendingInput::None);
    }

    #[test]
    fn test_set_none_removes_entry() {
        let store = ConversationStore::new();
        store.set(3, PendingInput::AwaitingCity);
        store.set(3, PendingInput::None);
        assert!(store.is_empty());
    }
}
