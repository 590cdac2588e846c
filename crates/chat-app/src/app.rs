//! Main egui application: renders the widget and drives the controller.

use std::cell::RefCell;
use std::rc::Rc;

use chat_core::controller::{run_exchange, ChatController, PendingExchange};
use chat_core::event_bus::EventBus;
use chat_core::ports::ChatApiPort;
use chat_core::store::SessionStore;
use chat_platform::api::RagApiClient;
use chat_platform::selection::SelectionListener;
use chat_platform::storage::auto_detect_storage;
use chat_types::config::ChatConfig;
use chat_ui::panels::{button, window};
use chat_ui::state::{WidgetIntent, WidgetState};
use chat_ui::theme;

/// The main application state
pub struct ChatApp {
    widget: WidgetState,
    config: ChatConfig,
    event_bus: EventBus,
    controller: Rc<RefCell<ChatController>>,
    api: Rc<dyn ChatApiPort>,
    /// Held so the document handlers stay registered
    _selection: Option<SelectionListener>,
    first_frame: bool,
}

impl ChatApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = ChatConfig::for_build();
        log::info!("Chat API: {}", config.api_base);

        let event_bus = EventBus::new();
        let store = SessionStore::new(auto_detect_storage(), &config.storage_key);
        let controller = Rc::new(RefCell::new(ChatController::new(
            config.clone(),
            store,
            event_bus.clone(),
        )));
        let api: Rc<dyn ChatApiPort> = Rc::new(RagApiClient::new(&config));

        let selection = Self::listen_for_selection(controller.clone(), cc.egui_ctx.clone());
        Self::probe_backend(api.clone());

        Self {
            widget: WidgetState::new(),
            config,
            event_bus,
            controller,
            api,
            _selection: selection,
            first_frame: true,
        }
    }

    /// Feed page selections into the controller on every pointer release.
    fn listen_for_selection(
        controller: Rc<RefCell<ChatController>>,
        ctx: egui::Context,
    ) -> Option<SelectionListener> {
        let attached = SelectionListener::attach(move |raw| {
            match controller.try_borrow_mut() {
                Ok(mut ctrl) => ctrl.capture_selection(&raw),
                Err(_) => log::debug!("Controller busy, selection skipped"),
            }
            ctx.request_repaint();
        });

        match attached {
            Ok(listener) => Some(listener),
            Err(e) => {
                log::warn!("Selection capture unavailable: {}", e);
                None
            }
        }
    }

    /// Log backend health once at startup (fire-and-forget)
    fn probe_backend(api: Rc<dyn ChatApiPort>) {
        wasm_bindgen_futures::spawn_local(async move {
            match api.health().await {
                Ok(health) if health.is_healthy() => log::info!("Backend healthy"),
                Ok(health) => log::warn!(
                    "Backend degraded: {} (qdrant={}, postgres={}, openai={})",
                    health.status,
                    health.services.qdrant,
                    health.services.postgres,
                    health.services.openai
                ),
                Err(e) => log::warn!("Health check failed: {}", e),
            }
        });
    }
}

impl eframe::App for ChatApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        // The docs page shows through everywhere the widget does not draw
        [0.0; 4]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Drain events from the controller
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.widget.process_events(events);
            ctx.request_repaint();
        }

        let snapshot = self.controller.borrow().snapshot();
        if snapshot.is_loading {
            ctx.request_repaint();
        }

        let mut intents = Vec::new();
        intents.extend(button::chat_button(ctx, snapshot.is_open));
        intents.extend(window::chat_window(ctx, &snapshot, &self.config, &mut self.widget));

        for intent in intents {
            self.dispatch(intent, ctx);
        }
    }
}

impl ChatApp {
    fn dispatch(&mut self, intent: WidgetIntent, ctx: &egui::Context) {
        match intent {
            WidgetIntent::Toggle => self.controller.borrow_mut().toggle_open(),
            WidgetIntent::Close => self.controller.borrow_mut().close(),
            WidgetIntent::ClearChat => self.controller.borrow_mut().clear(),
            WidgetIntent::ClearSelection => self.controller.borrow_mut().clear_selection(),
            WidgetIntent::Send(text) => {
                let submitted = self.controller.borrow_mut().submit(&text);
                self.widget.settle_draft(&submitted);
                self.spawn_exchange(submitted, ctx);
            }
            WidgetIntent::Retry => {
                let submitted = self.controller.borrow_mut().retry();
                self.spawn_exchange(submitted, ctx);
            }
        }
        ctx.request_repaint();
    }

    /// Send an accepted request and apply the reply (async)
    fn spawn_exchange(&self, submitted: chat_types::Result<PendingExchange>, ctx: &egui::Context) {
        let pending = match submitted {
            Ok(pending) => pending,
            Err(e) => {
                log::warn!("Message not sent: {}", e);
                return;
            }
        };
        let controller = self.controller.clone();
        let api = self.api.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            if !run_exchange(&controller, api.as_ref(), pending).await {
                log::debug!("Reply arrived after the chat was cleared");
            }
            ctx.request_repaint();
        });
    }
}
