//! View-local state: the input draft and the status line.
//! Conversation data itself comes from the controller's `ChatSnapshot`;
//! this is updated each frame by draining the EventBus.

use chat_types::event::ChatEvent;
use chat_types::Result;

/// What the user asked the widget to do this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetIntent {
    /// Floating button pressed
    Toggle,
    Close,
    Send(String),
    Retry,
    ClearChat,
    ClearSelection,
}

/// State owned by the views
pub struct WidgetState {
    /// Input field content
    pub draft: String,
    /// Status line text
    pub status_text: String,
}

impl WidgetState {
    pub fn new() -> Self {
        Self {
            draft: String::new(),
            status_text: "Ready".to_string(),
        }
    }

    /// Process events from the EventBus and update the status line
    pub fn process_events(&mut self, events: Vec<ChatEvent>) {
        for event in events {
            match event {
                ChatEvent::SessionRestored { message_count, .. } => {
                    self.status_text = format!("Restored {} messages", message_count);
                }
                ChatEvent::ExchangeStarted { .. } => {
                    self.status_text = "Thinking...".to_string();
                }
                ChatEvent::ExchangeSucceeded { source_count, .. } => {
                    self.status_text = match source_count {
                        0 => "Ready".to_string(),
                        1 => "Answered from 1 source".to_string(),
                        n => format!("Answered from {} sources", n),
                    };
                }
                ChatEvent::ExchangeFailed { .. } => {
                    self.status_text = "Request failed".to_string();
                }
                ChatEvent::SessionCleared => {
                    self.status_text = "Ready".to_string();
                }
                ChatEvent::StaleResponseIgnored { .. } | ChatEvent::SelectionChanged { .. } => {}
            }
        }
    }

    /// The trimmed draft, ready to send.
    ///
    /// `None` when it is blank or a request is in flight. The draft itself
    /// is kept until the controller accepts it (see `settle_draft`).
    pub fn pending_draft(&self, is_loading: bool) -> Option<String> {
        let text = self.draft.trim();
        if text.is_empty() || is_loading {
            return None;
        }
        Some(text.to_string())
    }

    /// Clear the draft once it was submitted; a rejected draft stays editable.
    pub fn settle_draft<T>(&mut self, submitted: &Result<T>) {
        if submitted.is_ok() {
            self.draft.clear();
        }
    }
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::new()
    }
}
