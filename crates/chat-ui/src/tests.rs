#[cfg(test)]
mod tests {
    use crate::panels::{button::chat_button, messages::source_url, window::chat_window};
    use crate::state::*;
    use chat_core::controller::{ChatController, ChatSnapshot};
    use chat_core::event_bus::EventBus;
    use chat_core::ports::StoragePort;
    use chat_core::store::SessionStore;
    use chat_types::config::{ChatConfig, SESSION_STORAGE_KEY};
    use chat_types::event::ChatEvent;
    use chat_types::message::{Message, Source};
    use chat_types::ChatError;
    use std::rc::Rc;

    struct NullStorage;

    impl StoragePort for NullStorage {
        fn get(&self, _key: &str) -> chat_types::Result<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> chat_types::Result<()> {
            Ok(())
        }

        fn delete(&self, _key: &str) -> chat_types::Result<()> {
            Ok(())
        }

        fn backend_name(&self) -> &str {
            "null"
        }
    }

    // ─── WidgetState Tests ───────────────────────────────────

    #[test]
    fn test_widget_state_initial() {
        let state = WidgetState::new();
        assert!(state.draft.is_empty());
        assert_eq!(state.status_text, "Ready");
    }

    #[test]
    fn test_pending_draft_trims_and_keeps_text() {
        let mut state = WidgetState::new();
        state.draft = "  What is ROS 2?  ".to_string();
        assert_eq!(state.pending_draft(false).as_deref(), Some("What is ROS 2?"));
        assert_eq!(state.draft, "  What is ROS 2?  ");
    }

    #[test]
    fn test_pending_draft_blank_is_none() {
        let mut state = WidgetState::new();
        state.draft = "   ".to_string();
        assert!(state.pending_draft(false).is_none());
    }

    #[test]
    fn test_pending_draft_while_loading_is_none() {
        let mut state = WidgetState::new();
        state.draft = "second question".to_string();
        assert!(state.pending_draft(true).is_none());
        assert_eq!(state.draft, "second question");
    }

    #[test]
    fn test_settle_draft_clears_on_accept() {
        let mut state = WidgetState::new();
        state.draft = "hello".to_string();
        state.settle_draft(&Ok::<_, ChatError>(()));
        assert!(state.draft.is_empty());
    }

    #[test]
    fn test_settle_draft_keeps_rejected_text() {
        let mut state = WidgetState::new();
        state.draft = "hello".to_string();
        state.settle_draft(&Err::<(), _>(ChatError::Busy));
        assert_eq!(state.draft, "hello");
        state.settle_draft(&Err::<(), _>(ChatError::EmptyMessage));
        assert_eq!(state.draft, "hello");
    }

    #[test]
    fn test_draft_survives_busy_controller() {
        let mut ctrl = ChatController::new(
            ChatConfig::default(),
            SessionStore::new(Rc::new(NullStorage), SESSION_STORAGE_KEY),
            EventBus::new(),
        );
        let mut state = WidgetState::new();

        state.draft = "first".to_string();
        let text = state.pending_draft(false).unwrap();
        let submitted = ctrl.submit(&text);
        state.settle_draft(&submitted);
        assert!(submitted.is_ok());
        assert!(state.draft.is_empty());

        // Typed while the first request is in flight
        state.draft = "second".to_string();
        let submitted = ctrl.submit("second");
        state.settle_draft(&submitted);
        assert_eq!(submitted, Err(ChatError::Busy));
        assert_eq!(state.draft, "second");
    }

    // ─── Citation Links ──────────────────────────────────────

    fn source(file_path: &str) -> Source {
        Source {
            title: "Intro".to_string(),
            file_path: file_path.to_string(),
            relevance_score: 0.5,
            excerpt: String::new(),
        }
    }

    #[test]
    fn test_source_url_uses_default_docs_base() {
        let config = ChatConfig::default();
        assert_eq!(
            source_url(&source("chapter-1/index.mdx"), &config),
            "/ai-native-book/docs/chapter-1"
        );
    }

    #[test]
    fn test_source_url_follows_configured_docs_base() {
        let config = ChatConfig {
            docs_base_path: "/handbook/".to_string(),
            ..ChatConfig::default()
        };
        assert_eq!(source_url(&source("intro.md"), &config), "/handbook/intro");
    }

    // ─── Event Processing ────────────────────────────────────

    #[test]
    fn test_process_session_restored() {
        let mut state = WidgetState::new();
        state.process_events(vec![ChatEvent::SessionRestored {
            session_id: "abc".to_string(),
            message_count: 4,
        }]);
        assert_eq!(state.status_text, "Restored 4 messages");
    }

    #[test]
    fn test_process_exchange_lifecycle() {
        let mut state = WidgetState::new();
        state.process_events(vec![ChatEvent::ExchangeStarted {
            generation: 1,
            message: "hi".to_string(),
        }]);
        assert_eq!(state.status_text, "Thinking...");

        state.process_events(vec![ChatEvent::ExchangeSucceeded {
            generation: 1,
            source_count: 3,
        }]);
        assert_eq!(state.status_text, "Answered from 3 sources");

        state.process_events(vec![ChatEvent::ExchangeSucceeded {
            generation: 2,
            source_count: 1,
        }]);
        assert_eq!(state.status_text, "Answered from 1 source");
    }

    #[test]
    fn test_process_failure_then_clear() {
        let mut state = WidgetState::new();
        state.process_events(vec![
            ChatEvent::ExchangeFailed {
                generation: 1,
                reason: "Network error".to_string(),
            },
        ]);
        assert_eq!(state.status_text, "Request failed");

        state.process_events(vec![ChatEvent::SessionCleared]);
        assert_eq!(state.status_text, "Ready");
    }

    #[test]
    fn test_process_ignores_selection_and_stale() {
        let mut state = WidgetState::new();
        state.status_text = "Thinking...".to_string();
        state.process_events(vec![
            ChatEvent::SelectionChanged { chars: 12 },
            ChatEvent::StaleResponseIgnored { generation: 1 },
        ]);
        assert_eq!(state.status_text, "Thinking...");
    }

    #[test]
    fn test_process_events_in_order() {
        let mut state = WidgetState::new();
        state.process_events(vec![
            ChatEvent::ExchangeStarted {
                generation: 1,
                message: "hi".to_string(),
            },
            ChatEvent::ExchangeSucceeded {
                generation: 1,
                source_count: 0,
            },
        ]);
        assert_eq!(state.status_text, "Ready");
    }

    // ─── Headless Rendering ──────────────────────────────────

    fn render(snapshot: &ChatSnapshot, state: &mut WidgetState) -> Option<WidgetIntent> {
        let ctx = egui::Context::default();
        let config = ChatConfig::default();
        let mut intent = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            crate::theme::apply_theme(ctx);
            if let Some(i) = chat_button(ctx, snapshot.is_open) {
                intent = Some(i);
            }
            if let Some(i) = chat_window(ctx, snapshot, &config, state) {
                intent = Some(i);
            }
        });
        intent
    }

    #[test]
    fn test_closed_window_renders_nothing() {
        let mut state = WidgetState::new();
        let snapshot = ChatSnapshot::default();
        assert!(render(&snapshot, &mut state).is_none());
    }

    #[test]
    fn test_open_window_without_input_has_no_intent() {
        let mut state = WidgetState::new();
        state.draft = "pending".to_string();
        let snapshot = ChatSnapshot {
            session_id: Some("abc".to_string()),
            messages: vec![
                Message::user("What is Isaac Sim?"),
                Message::assistant(
                    "A robotics simulator.",
                    vec![Source {
                        title: "Isaac Sim".to_string(),
                        file_path: "isaac-platform/isaac-sim/index.mdx".to_string(),
                        relevance_score: 0.87,
                        excerpt: "Isaac Sim is...".to_string(),
                    }],
                ),
            ],
            is_open: true,
            is_loading: true,
            error: Some("Failed to get response.".to_string()),
            selected_text: "humanoid".to_string(),
            last_message: "What is Isaac Sim?".to_string(),
        };

        assert!(render(&snapshot, &mut state).is_none());
        assert_eq!(state.draft, "pending");
    }
}
