use serde::{Deserialize, Serialize};
use crate::message::Message;

/// A conversation with the RAG backend.
///
/// `session_id` stays `None` until the backend assigns one on the first
/// successful exchange. Serialized as `{ "sessionId", "messages" }`, the
/// record layout kept in browser storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracked(&self) -> bool {
        self.session_id.is_some()
    }

    /// Only sessions with an id and at least one message are worth storing.
    pub fn is_persistable(&self) -> bool {
        self.session_id.is_some() && !self.messages.is_empty()
    }
}
