use super::transcript::SessionTranscript;
use crate::{Error, Result};
use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

pub type SessionHandle = Arc<Mutex<SessionTranscript>>;

/// Per-session transcripts, kept in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, SessionHandle>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self) -> Result<(Uuid, SessionHandle)> {
        let id = Uuid::new_v4();
        let handle = SessionHandle::default();

        self.sessions
            .write()
            .map_err(|e| Error::internal(format!("Session lock poisoned: {e}")))?
            .insert(id, Arc::clone(&handle));

        info!("Created session {}", id);
        Ok((id, handle))
    }

    pub fn get(&self, id: &Uuid) -> Result<Option<SessionHandle>> {
        let sessions = self
            .sessions
            .read()
            .map_err(|e| Error::internal(format!("Session lock poisoned: {e}")))?;

        let handle = sessions.get(id).cloned();
        debug!("Session lookup {} -> found: {}", id, handle.is_some());
        Ok(handle)
    }

    /// Parses a client-supplied id and resolves it, failing with `SessionNotFound`.
    pub fn resolve(&self, raw_id: &str) -> Result<(Uuid, SessionHandle)> {
        let not_found = || Error::SessionNotFound {
            session_id: raw_id.to_string(),
        };
        let id = Uuid::parse_str(raw_id).map_err(|_| not_found())?;
        let handle = self.get(&id)?.ok_or_else(not_found)?;
        Ok((id, handle))
    }

    pub fn len(&self) -> usize {
        self.sessions.read().map(|s| s.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
