//! Process-local session memory registry.
//!
//! `SessionRegistry` maps an opaque caller-supplied session key to a
//! shared `SessionMemory`. Entries are created lazily on first use and
//! destroyed only by explicit deletion; nothing is persisted, so all
//! conversation state is lost on process restart.
//!
//! Uses `DashMap` so get-or-create is atomic: two concurrent first
//! requests for the same key always observe the same memory instance.

use std::sync::{Arc, Mutex};

use dashmap::DashMap;

use hashtalk_types::chat::ConversationTurn;
use hashtalk_types::llm::Message;

/// Ordered record of prior conversation turns for one session.
///
/// All reads return cloned values -- never hold the inner guard across
/// an await.
#[derive(Debug, Default)]
pub struct SessionMemory {
    turns: Mutex<Vec<ConversationTurn>>,
}

/// Shared handle to one session's memory.
pub type SharedMemory = Arc<SessionMemory>;

impl SessionMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the recorded turns.
    pub fn turns(&self) -> Vec<ConversationTurn> {
        self.turns.lock().expect("session memory poisoned").clone()
    }

    /// Snapshot the history as alternating user/assistant messages,
    /// ready to seed an LLM conversation.
    pub fn history(&self) -> Vec<Message> {
        let turns = self.turns();
        let mut messages = Vec::with_capacity(turns.len() * 2);
        for turn in turns {
            messages.push(Message::user(turn.human));
            messages.push(Message::assistant(turn.agent));
        }
        messages
    }

    /// Append one completed turn.
    pub fn record(&self, human: impl Into<String>, agent: impl Into<String>) {
        self.turns
            .lock()
            .expect("session memory poisoned")
            .push(ConversationTurn {
                human: human.into(),
                agent: agent.into(),
            });
    }

    pub fn len(&self) -> usize {
        self.turns.lock().expect("session memory poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Thread-safe registry mapping session keys to conversation memories.
///
/// At most one memory exists per key for the registry's lifetime,
/// unless the key is deleted in between.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: DashMap<String, SharedMemory>,
}

impl SessionRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the memory for `key`, creating an empty one if absent.
    ///
    /// The entry API makes lookup-and-insert a single atomic step.
    pub fn get_or_create(&self, key: &str) -> SharedMemory {
        self.sessions
            .entry(key.to_string())
            .or_insert_with(|| {
                tracing::debug!(session = %key, "created session memory");
                Arc::new(SessionMemory::new())
            })
            .clone()
    }

    /// Remove and discard the memory for `key`.
    ///
    /// Returns whether an entry existed.
    pub fn remove(&self, key: &str) -> bool {
        let removed = self.sessions.remove(key).is_some();
        if removed {
            tracing::debug!(session = %key, "cleared session memory");
        }
        removed
    }

    /// Remove all entries unconditionally.
    pub fn clear(&self) {
        let count = self.sessions.len();
        self.sessions.clear();
        tracing::debug!(sessions = count, "cleared all session memories");
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use hashtalk_types::llm::MessageRole;

    #[test]
    fn test_get_or_create_returns_same_instance() {
        let registry = SessionRegistry::new();
        let first = registry.get_or_create("user_1");
        let second = registry.get_or_create("user_1");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_distinct_keys_never_share_memory() {
        let registry = SessionRegistry::new();
        let a = registry.get_or_create("user_a");
        let b = registry.get_or_create("user_b");
        assert!(!Arc::ptr_eq(&a, &b));

        a.record("hi", "hello");
        assert!(b.is_empty());
    }

    #[test]
    fn test_remove_unknown_key_returns_false() {
        let registry = SessionRegistry::new();
        assert!(!registry.remove("never-created"));
    }

    #[test]
    fn test_remove_then_recreate_yields_fresh_memory() {
        let registry = SessionRegistry::new();
        let memory = registry.get_or_create("user_1");
        memory.record("create a token", "Done!");
        assert_eq!(memory.len(), 1);

        assert!(registry.remove("user_1"));

        let fresh = registry.get_or_create("user_1");
        assert!(!Arc::ptr_eq(&memory, &fresh));
        assert!(fresh.is_empty());
    }

    #[test]
    fn test_clear_forgets_every_key() {
        let registry = SessionRegistry::new();
        for key in ["a", "b", "c"] {
            registry.get_or_create(key).record("q", "a");
        }
        assert_eq!(registry.len(), 3);

        registry.clear();

        assert!(registry.is_empty());
        for key in ["a", "b", "c"] {
            assert!(registry.get_or_create(key).is_empty());
        }
    }

    #[test]
    fn test_history_alternates_roles() {
        let memory = SessionMemory::new();
        memory.record("first question", "first answer");
        memory.record("second question", "second answer");

        let history = memory.history();
        assert_eq!(history.len(), 4);
        assert_eq!(history[0].role, MessageRole::User);
        assert_eq!(history[0].content, "first question");
        assert_eq!(history[1].role, MessageRole::Assistant);
        assert_eq!(history[3].content, "second answer");
    }

    #[test]
    fn test_concurrent_get_or_create_single_memory() {
        let registry = Arc::new(SessionRegistry::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let registry = registry.clone();
            handles.push(std::thread::spawn(move || {
                registry.get_or_create("shared")
            }));
        }
        let memories: Vec<SharedMemory> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();
        for memory in &memories[1..] {
            assert!(Arc::ptr_eq(&memories[0], memory));
        }
        assert_eq!(registry.len(), 1);
    }
}
