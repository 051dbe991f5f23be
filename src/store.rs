//! Per-user session storage
//!
//! One entry per chat id, holding where that user is in the conversation.
//! In-memory only: a restart drops everyone back to the welcome menu, which
//! is the behavior we want for a stateless assistant.

use crate::conversation::Session;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the user's current session, if any
    pub fn get(&self, user: &str) -> Option<Session> {
        self.sessions.lock().unwrap().get(user).cloned()
    }

    pub fn set(&self, user: &str, session: Session) {
        self.sessions
            .lock()
            .unwrap()
            .insert(user.to_string(), session);
    }

    /// Forget the user entirely; their next message starts from the menu
    pub fn clear(&self, user: &str) {
        self.sessions.lock().unwrap().remove(user);
    }
}
