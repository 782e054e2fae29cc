use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use uuid::Uuid;

use crate::model::ChatTurn;

/// In-memory chat histories keyed by session id.
///
/// Histories are append-only and live as long as the store. Nothing is evicted.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, Vec<ChatTurn>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh, unique session identifier.
    pub fn new_session_id() -> String {
        Uuid::now_v7().to_string()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<ChatTurn>>> {
        // Turns are pushed whole, so a poisoned map is still consistent.
        self.sessions.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Append a user turn, compute the reply, append the assistant turn, and
    /// return the reply with a snapshot of the full history.
    ///
    /// The whole exchange runs under the lock, so concurrent calls on the same
    /// session never interleave their turns.
    pub fn exchange<F>(&self, session_id: &str, message: &str, reply: F) -> (String, Vec<ChatTurn>)
    where
        F: FnOnce(&str) -> String,
    {
        let mut sessions = self.lock();
        let history = sessions.entry(session_id.to_string()).or_default();

        history.push(ChatTurn::user(message));
        let response = reply(message);
        history.push(ChatTurn::assistant(response.clone()));

        (response, history.clone())
    }

    /// Snapshot of a session's history. Unknown ids yield an empty list and
    /// are not created.
    pub fn history(&self, session_id: &str) -> Vec<ChatTurn> {
        self.lock().get(session_id).cloned().unwrap_or_default()
    }

    pub fn contains(&self, session_id: &str) -> bool {
        self.lock().contains_key(session_id)
    }

    pub fn session_count(&self) -> usize {
        self.lock().len()
    }
}
