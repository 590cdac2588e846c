use serde::{Deserialize, Serialize};

/// Events emitted by the chat controller.
/// UI subscribes to these for reactive updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChatEvent {
    /// A stored session was loaded at startup
    SessionRestored { session_id: String, message_count: usize },

    /// A message was submitted and the request is in flight
    ExchangeStarted { generation: u64, message: String },

    /// The backend answered and the reply was appended
    ExchangeSucceeded { generation: u64, source_count: usize },

    /// The exchange failed and the optimistic message was rolled back
    ExchangeFailed { generation: u64, reason: String },

    /// A completion arrived for a conversation that was cleared meanwhile
    StaleResponseIgnored { generation: u64 },

    /// The active page selection changed (empty string when cleared)
    SelectionChanged { chars: usize },

    /// The user wiped the conversation
    SessionCleared,
}
