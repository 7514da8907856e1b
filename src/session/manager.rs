/*!
 * Session manager for the upload/translate/download lifecycle.
 */

use log::debug;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use uuid::Uuid;

use super::models::Session;

/// In-memory session store
///
/// One entry per active document interaction, keyed by session ID. Nothing
/// is persisted; idle entries are pruned opportunistically on insert so the
/// map stays bounded without a background task.
pub struct SessionManager {
    /// Active sessions
    sessions: RwLock<HashMap<Uuid, Session>>,
    /// Idle lifetime before a session is pruned
    ttl: Duration,
}

impl SessionManager {
    /// Create a new session manager with the given idle lifetime
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Store a new session, pruning idle ones first
    ///
    /// Returns the session ID to hand back to the client.
    pub fn insert(&self, session: Session) -> Uuid {
        let id = session.id;
        let mut sessions = self.sessions.write();

        let now = Instant::now();
        let before = sessions.len();
        sessions.retain(|_, s| now.duration_since(s.touched) < self.ttl);
        if sessions.len() < before {
            debug!("Pruned {} idle session(s)", before - sessions.len());
        }

        sessions.insert(id, session);
        id
    }

    /// Get a snapshot of a session by ID
    pub fn get(&self, id: &Uuid) -> Option<Session> {
        self.sessions.read().get(id).cloned()
    }

    /// Record a completed translation on a session
    ///
    /// Returns false when the session no longer exists.
    pub fn set_translation(
        &self,
        id: &Uuid,
        target_language: String,
        translated_markdown: String,
        translated_html: String,
    ) -> bool {
        let mut sessions = self.sessions.write();
        match sessions.get_mut(id) {
            Some(session) => {
                session.set_translation(target_language, translated_markdown, translated_html);
                true
            }
            None => false,
        }
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}
