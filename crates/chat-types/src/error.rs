use thiserror::Error;

/// Text shown in the widget for failures that carry no usable backend detail.
pub const GENERIC_FAILURE: &str =
    "Failed to get response. Please check your connection and try again.";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChatError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend error (HTTP {status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Backend { status: u16, detail: Option<String> },

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("A request is already in flight")]
    Busy,

    #[error("Message is empty")]
    EmptyMessage,

    #[error("Nothing to retry")]
    NothingToRetry,

    #[error("JS interop error: {0}")]
    JsInterop(String),
}

impl ChatError {
    /// The message the widget displays for a failed exchange.
    ///
    /// Backend errors surface their `detail` when present; everything else
    /// collapses to the generic retry prompt.
    pub fn user_message(&self) -> String {
        match self {
            ChatError::Backend {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}

impl From<serde_json::Error> for ChatError {
    fn from(e: serde_json::Error) -> Self {
        ChatError::Serialization(e.to_string())
    }
}
