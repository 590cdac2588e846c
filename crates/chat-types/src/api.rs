//! Wire types for the RAG backend HTTP contract.

use serde::{Deserialize, Serialize};
use crate::message::Source;

/// Body of `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub selected_text: Option<String>,
}

impl ChatRequest {
    /// Build a request, dropping empty optional fields so they are omitted
    /// from the JSON body instead of being sent as `null` or `""`.
    pub fn new(
        message: impl Into<String>,
        session_id: Option<&str>,
        selected_text: &str,
    ) -> Self {
        Self {
            message: message.into(),
            session_id: session_id.filter(|s| !s.is_empty()).map(String::from),
            selected_text: if selected_text.is_empty() {
                None
            } else {
                Some(selected_text.to_string())
            },
        }
    }
}

/// Successful reply of `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub session_id: String,
    pub message: String,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default)]
    pub timestamp: String,
}

/// Body the backend returns with non-2xx statuses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// A string for application errors; validation errors send a list.
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) if s.trim().is_empty() => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Reply of `GET /api/health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub services: ServiceHealth,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub qdrant: String,
    pub postgres: String,
    pub openai: String,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy" || self.status == "ok"
    }
}
