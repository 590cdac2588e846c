//! Chat session controller: owns the conversation and drives exchanges.
//!
//! One exchange is:
//! 1. `submit`: record the message for retry, append it optimistically,
//!    hand back the request to send
//! 2. the caller awaits `ChatApiPort::send_message` without holding a borrow
//! 3. `complete`: append the reply, or roll the optimistic message back
//!
//! `run_exchange` covers steps 2 and 3 for callers that share the controller
//! through a `RefCell`.

use std::cell::RefCell;

use chat_types::{
    ChatError, Result,
    api::{ChatRequest, ChatResponse},
    config::ChatConfig,
    event::ChatEvent,
    message::Message,
    session::Session,
};
use crate::event_bus::EventBus;
use crate::exchange::{transition, ExchangeInput, ExchangePhase, Transition};
use crate::ports::{ChatApiPort, SelectionSource};
use crate::selection::{evaluate_selection, SelectionUpdate};
use crate::store::SessionStore;

/// Transient widget state. Never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversationState {
    pub is_open: bool,
    pub is_loading: bool,
    pub error: Option<String>,
    pub selected_text: String,
    /// Last submitted message, kept for retry
    pub last_message: String,
}

/// Read-only view of the controller handed to the UI each frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatSnapshot {
    pub session_id: Option<String>,
    pub messages: Vec<Message>,
    pub is_open: bool,
    pub is_loading: bool,
    pub error: Option<String>,
    pub selected_text: String,
    pub last_message: String,
}

impl ChatSnapshot {
    pub fn can_retry(&self) -> bool {
        self.error.is_some() && !self.last_message.is_empty() && !self.is_loading
    }
}

/// A request issued by `submit`, to be completed with the same generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingExchange {
    pub generation: u64,
    pub request: ChatRequest,
}

pub struct ChatController {
    config: ChatConfig,
    session: Session,
    conversation: ConversationState,
    phase: ExchangePhase,
    generation: u64,
    store: SessionStore,
    event_bus: EventBus,
}

impl ChatController {
    /// Create the controller, hydrating the session from `store` if a valid
    /// record exists.
    pub fn new(config: ChatConfig, store: SessionStore, event_bus: EventBus) -> Self {
        let session = store.load().unwrap_or_default();

        if let Some(id) = &session.session_id {
            log::info!(
                "Restored session {} ({} messages) from {}",
                id,
                session.messages.len(),
                store.backend_name()
            );
            event_bus.emit(ChatEvent::SessionRestored {
                session_id: id.clone(),
                message_count: session.messages.len(),
            });
        }

        Self {
            config,
            session,
            conversation: ConversationState::default(),
            phase: ExchangePhase::Idle,
            generation: 0,
            store,
            event_bus,
        }
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn conversation(&self) -> &ConversationState {
        &self.conversation
    }

    pub fn phase(&self) -> ExchangePhase {
        self.phase
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn snapshot(&self) -> ChatSnapshot {
        ChatSnapshot {
            session_id: self.session.session_id.clone(),
            messages: self.session.messages.clone(),
            is_open: self.conversation.is_open,
            is_loading: self.conversation.is_loading,
            error: self.conversation.error.clone(),
            selected_text: self.conversation.selected_text.clone(),
            last_message: self.conversation.last_message.clone(),
        }
    }

    // ─── Window ──────────────────────────────────────────────

    pub fn toggle_open(&mut self) {
        self.conversation.is_open = !self.conversation.is_open;
    }

    pub fn close(&mut self) {
        self.conversation.is_open = false;
    }

    // ─── Exchange lifecycle ──────────────────────────────────

    /// Start an exchange: idle → sending.
    pub fn submit(&mut self, message: &str) -> Result<PendingExchange> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let generation = self.generation + 1;
        match transition(self.phase, ExchangeInput::Submit { generation }) {
            Transition::Enter(next) => self.phase = next,
            Transition::Reject | Transition::Ignore => {
                log::debug!("Rejected submit while a request is in flight");
                return Err(ChatError::Busy);
            }
        }
        self.generation = generation;

        self.conversation.last_message = message.to_string();
        self.conversation.error = None;
        self.conversation.is_loading = true;
        self.session.messages.push(Message::user(message));
        self.persist();

        let request = ChatRequest::new(
            message,
            self.session.session_id.as_deref(),
            &self.conversation.selected_text,
        );

        self.event_bus.emit(ChatEvent::ExchangeStarted {
            generation,
            message: message.to_string(),
        });

        Ok(PendingExchange { generation, request })
    }

    /// Re-submit the last message with the current session and selection.
    pub fn retry(&mut self) -> Result<PendingExchange> {
        if self.conversation.last_message.is_empty() {
            return Err(ChatError::NothingToRetry);
        }
        let message = self.conversation.last_message.clone();
        self.submit(&message)
    }

    /// Finish the exchange issued under `generation`: sending → idle.
    ///
    /// Returns `false` when the completion was stale and ignored.
    pub fn complete(&mut self, generation: u64, result: Result<ChatResponse>) -> bool {
        let input = match &result {
            Ok(_) => ExchangeInput::Succeed { generation },
            Err(_) => ExchangeInput::Fail { generation },
        };

        match transition(self.phase, input) {
            Transition::Enter(next) => self.phase = next,
            Transition::Reject | Transition::Ignore => {
                log::debug!("Ignoring stale response for exchange {}", generation);
                self.event_bus
                    .emit(ChatEvent::StaleResponseIgnored { generation });
                return false;
            }
        }

        match result {
            Ok(response) => self.apply_success(generation, response),
            Err(e) => self.apply_failure(generation, e),
        }
        self.conversation.is_loading = false;
        self.persist();
        true
    }

    fn apply_success(&mut self, generation: u64, response: ChatResponse) {
        if self.session.session_id.is_none() {
            log::info!("Session started: {}", response.session_id);
            self.session.session_id = Some(response.session_id);
        }

        let source_count = response.sources.len();
        self.session
            .messages
            .push(Message::assistant(response.message, response.sources));
        self.set_selection(String::new());

        self.event_bus.emit(ChatEvent::ExchangeSucceeded {
            generation,
            source_count,
        });
    }

    fn apply_failure(&mut self, generation: u64, error: ChatError) {
        log::error!("Failed to send message: {}", error);

        let reason = error.user_message();
        self.conversation.error = Some(reason.clone());

        if self.session.messages.last().is_some_and(Message::is_user) {
            self.session.messages.pop();
        }

        self.event_bus
            .emit(ChatEvent::ExchangeFailed { generation, reason });
    }

    /// Forget the conversation, transient state and stored record.
    ///
    /// Any request still in flight is left to finish; its completion no
    /// longer matches the generation and is dropped.
    pub fn clear(&mut self) {
        if let Transition::Enter(next) = transition(self.phase, ExchangeInput::Reset) {
            self.phase = next;
        }
        self.generation += 1;

        self.session = Session::new();
        self.conversation = ConversationState {
            is_open: self.conversation.is_open,
            ..ConversationState::default()
        };

        if let Err(e) = self.store.clear() {
            log::warn!("Failed to clear stored session: {}", e);
        }
        self.event_bus.emit(ChatEvent::SessionCleared);
    }

    // ─── Selection ───────────────────────────────────────────

    /// Apply a raw page selection (pointer-release / touch-end).
    pub fn capture_selection(&mut self, raw: &str) {
        match evaluate_selection(raw, self.config.max_selection_chars) {
            SelectionUpdate::Set(text) => self.set_selection(text),
            SelectionUpdate::Clear => self.set_selection(String::new()),
            SelectionUpdate::Unchanged => {}
        }
    }

    /// Read the current selection from `source` and apply it.
    pub fn observe_selection(&mut self, source: &dyn SelectionSource) {
        if let Some(raw) = source.current_selection() {
            self.capture_selection(&raw);
        }
    }

    pub fn clear_selection(&mut self) {
        self.set_selection(String::new());
    }

    fn set_selection(&mut self, text: String) {
        if self.conversation.selected_text == text {
            return;
        }
        self.conversation.selected_text = text;
        self.event_bus.emit(ChatEvent::SelectionChanged {
            chars: self.conversation.selected_text.chars().count(),
        });
    }

    // ─── Persistence ─────────────────────────────────────────

    fn persist(&self) {
        let outcome = if self.session.is_persistable() {
            self.store.save(&self.session)
        } else if self.session.is_tracked() {
            // Tracked but emptied by a rollback: nothing left worth keeping.
            self.store.clear()
        } else {
            Ok(())
        };

        if let Err(e) = outcome {
            log::warn!("Failed to persist session: {}", e);
        }
    }
}

/// Send an already-submitted request and feed the outcome back.
pub async fn run_exchange(
    controller: &RefCell<ChatController>,
    api: &dyn ChatApiPort,
    pending: PendingExchange,
) -> bool {
    let result = api.send_message(pending.request).await;
    controller.borrow_mut().complete(pending.generation, result)
}

