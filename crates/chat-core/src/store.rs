//! Session persistence on top of StoragePort.
//!
//! The whole conversation lives under a single key as
//! `{ "sessionId": ..., "messages": [...] }`.

use std::rc::Rc;
use chat_types::{Result, session::Session};
use crate::ports::StoragePort;

pub struct SessionStore {
    storage: Rc<dyn StoragePort>,
    key: String,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn StoragePort>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend_name(&self) -> &str {
        self.storage.backend_name()
    }

    /// Load the stored session.
    ///
    /// Missing, unreadable and malformed records all yield `None`; the
    /// failure is logged and never reaches the user.
    pub fn load(&self) -> Option<Session> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("Session storage unreadable ({}): {}", self.backend_name(), e);
                return None;
            }
        };

        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                log::error!("Failed to load session: {}", e);
                None
            }
        }
    }

    /// Overwrite the stored record with `session`.
    pub fn save(&self, session: &Session) -> Result<()> {
        let json = serde_json::to_string(session)?;
        self.storage.set(&self.key, &json)
    }

    /// Remove the stored record.
    pub fn clear(&self) -> Result<()> {
        self.storage.delete(&self.key)
    }
}
