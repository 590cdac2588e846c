//! Floating chat button, anchored to the bottom-right corner.

use egui::{self, Align2, RichText};

use crate::state::WidgetIntent;
use crate::theme::*;

/// Render the toggle button. Returns `Toggle` when pressed.
pub fn chat_button(ctx: &egui::Context, is_open: bool) -> Option<WidgetIntent> {
    let mut intent = None;

    egui::Area::new(egui::Id::new("chat_button"))
        .anchor(Align2::RIGHT_BOTTOM, EDGE_OFFSET)
        .show(ctx, |ui| {
            let (icon, tooltip) = if is_open {
                ("✕", "Close chat")
            } else {
                ("💬", "Open chat")
            };
            let button = egui::Button::new(RichText::new(icon).size(24.0).color(ACCENT_TEXT))
                .fill(ACCENT)
                .corner_radius(egui::CornerRadius::same(28))
                .min_size(BUTTON_SIZE);

            if ui.add(button).on_hover_text(tooltip).clicked() {
                intent = Some(WidgetIntent::Toggle);
            }
        });

    intent
}
