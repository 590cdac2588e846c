//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `chat-core` (pure Rust).
//! Implementations live in `chat-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use chat_types::{
    Result,
    api::{ChatRequest, ChatResponse, HealthResponse},
};

// ─── Chat API Port ───────────────────────────────────────────

#[async_trait(?Send)]
pub trait ChatApiPort {
    /// `POST /api/chat`. Non-2xx statuses, malformed bodies and timeouts
    /// all come back as `Err`.
    async fn send_message(&self, req: ChatRequest) -> Result<ChatResponse>;

    /// `GET /api/health`
    async fn health(&self) -> Result<HealthResponse>;

    /// `GET /api/sessions/{id}/history`. The payload shape is owned by the
    /// backend, so it is handed back untyped.
    async fn session_history(&self, session_id: &str) -> Result<serde_json::Value>;
}

// ─── Storage Port ────────────────────────────────────────────

/// Synchronous string key-value storage (browser `localStorage` shape).
pub trait StoragePort {
    /// Get a value by key
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a value. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<()>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}

// ─── Selection Port ──────────────────────────────────────────

/// Read access to the text the user currently has highlighted on the page.
pub trait SelectionSource {
    /// Raw selection text, untrimmed. `None` when nothing is selected or the
    /// selection cannot be read.
    fn current_selection(&self) -> Option<String>;
}
