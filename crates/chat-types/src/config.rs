use serde::{Deserialize, Serialize};

pub const PRODUCTION_API_BASE: &str = "https://humanoid-ai-book.onrender.com";
pub const DEVELOPMENT_API_BASE: &str = "http://localhost:8000";
pub const SESSION_STORAGE_KEY: &str = "rag_chatbot_session";
pub const DOCS_BASE_PATH: &str = "/ai-native-book/docs";

/// Chat widget configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Backend origin, without a trailing slash
    pub api_base: String,
    pub request_timeout_ms: u64,
    /// Key of the persisted session record
    pub storage_key: String,
    /// Prefix for citation links
    pub docs_base_path: String,
    /// Longer selections are dropped, not clipped
    pub max_selection_chars: usize,
    /// Length of the selection banner preview
    pub selection_preview_chars: usize,
    pub max_input_chars: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_base: DEVELOPMENT_API_BASE.to_string(),
            request_timeout_ms: 30_000,
            storage_key: SESSION_STORAGE_KEY.to_string(),
            docs_base_path: DOCS_BASE_PATH.to_string(),
            max_selection_chars: 1000,
            selection_preview_chars: 100,
            max_input_chars: 1000,
        }
    }
}

impl ChatConfig {
    /// Configuration for the current build profile.
    ///
    /// Release builds talk to the hosted backend, debug builds to a local one.
    /// `CHAT_API_BASE` at compile time overrides both.
    pub fn for_build() -> Self {
        let api_base = match option_env!("CHAT_API_BASE") {
            Some(base) if !base.is_empty() => base,
            _ if cfg!(debug_assertions) => DEVELOPMENT_API_BASE,
            _ => PRODUCTION_API_BASE,
        };
        Self::default().with_api_base(api_base)
    }

    pub fn with_api_base(mut self, base: &str) -> Self {
        self.api_base = base.trim_end_matches('/').to_string();
        self
    }

    /// Absolute URL of a backend route, e.g. `endpoint("/api/chat")`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
