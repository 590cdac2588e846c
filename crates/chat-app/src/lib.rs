//! Chat App — WASM entry point.
//!
//! This crate is the composition root (DI wiring layer).
//! It assembles the platform adapters, builds the controller and hands both
//! to the egui widget.

mod app;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Canvas the widget draws into, overlaid on the docs page
const CANVAS_ID: &str = "chat_canvas";

/// WASM entry point — called from the page's loader script
#[wasm_bindgen(start)]
pub async fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Chat widget starting...");

    let canvas = match find_canvas(CANVAS_ID) {
        Ok(canvas) => canvas,
        Err(e) => {
            log::error!("Chat widget not started: {}", e);
            return;
        }
    };

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async move {
        let started = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(app::ChatApp::new(cc)))),
            )
            .await;
        if let Err(e) = started {
            log::error!("Failed to start eframe: {:?}", e);
        }
    });
}

fn find_canvas(id: &str) -> Result<web_sys::HtmlCanvasElement, String> {
    let document = web_sys::window()
        .ok_or("No window")?
        .document()
        .ok_or("No document")?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| format!("No canvas element with id '{}'", id))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| format!("Element '{}' is not a canvas", id))
}
