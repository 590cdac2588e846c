//! Page selection capture.
//!
//! `DomSelection` reads `window.getSelection()`. `SelectionListener` hooks
//! `mouseup` and `touchend` on the document and reports the selection after
//! each; dropping the listener unregisters both handlers.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Event};

use chat_core::ports::SelectionSource;
use chat_types::{ChatError, Result};

const RELEASE_EVENTS: [&str; 2] = ["mouseup", "touchend"];

/// The document's current text selection.
pub struct DomSelection;

impl SelectionSource for DomSelection {
    fn current_selection(&self) -> Option<String> {
        let selection = web_sys::window()?.get_selection().ok()??;
        Some(String::from(selection.to_string()))
    }
}

/// Registered pointer-release / touch-end handlers.
pub struct SelectionListener {
    document: Document,
    callback: Closure<dyn FnMut(Event)>,
}

impl SelectionListener {
    /// Register the handlers. `on_release` receives the raw selection after
    /// every release event.
    pub fn attach(mut on_release: impl FnMut(String) + 'static) -> Result<Self> {
        let document = web_sys::window()
            .ok_or_else(|| ChatError::JsInterop("No window object".to_string()))?
            .document()
            .ok_or_else(|| ChatError::JsInterop("No document".to_string()))?;

        let callback = Closure::wrap(Box::new(move |_event: Event| {
            if let Some(raw) = DomSelection.current_selection() {
                on_release(raw);
            }
        }) as Box<dyn FnMut(Event)>);

        // Constructed first so a partial registration is undone by Drop
        let listener = Self { document, callback };
        for name in RELEASE_EVENTS {
            listener
                .document
                .add_event_listener_with_callback(name, listener.callback.as_ref().unchecked_ref())
                .map_err(|e| ChatError::JsInterop(format!("{:?}", e)))?;
        }
        log::debug!("Selection listener attached");

        Ok(listener)
    }
}

impl Drop for SelectionListener {
    fn drop(&mut self) {
        for name in RELEASE_EVENTS {
            if let Err(e) = self
                .document
                .remove_event_listener_with_callback(name, self.callback.as_ref().unchecked_ref())
            {
                log::debug!("Failed to remove {} listener: {:?}", name, e);
            }
        }
        log::debug!("Selection listener detached");
    }
}
