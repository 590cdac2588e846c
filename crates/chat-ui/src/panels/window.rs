//! Chat window: header, selection banner, conversation, error, input.

use egui::{self, Align, Align2, Layout, RichText, ScrollArea, Vec2};

use chat_core::controller::ChatSnapshot;
use chat_core::selection::selection_preview;
use chat_types::config::ChatConfig;

use super::messages::message_list;
use crate::state::{WidgetIntent, WidgetState};
use crate::theme::*;

/// Render the chat window when open. Returns the user's intent, if any.
pub fn chat_window(
    ctx: &egui::Context,
    snapshot: &ChatSnapshot,
    config: &ChatConfig,
    state: &mut WidgetState,
) -> Option<WidgetIntent> {
    if !snapshot.is_open {
        return None;
    }

    let mut intent = None;

    egui::Window::new("Chat Assistant")
        .id(egui::Id::new("chat_window"))
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(Align2::RIGHT_BOTTOM, Vec2::new(EDGE_OFFSET.x, EDGE_OFFSET.y - BUTTON_SIZE.y - 12.0))
        .fixed_size(WINDOW_SIZE)
        .frame(
            egui::Frame::window(&ctx.style())
                .fill(BG_PRIMARY)
                .inner_margin(PANEL_PADDING),
        )
        .show(ctx, |ui| {
            if let Some(i) = header(ui) {
                intent = Some(i);
            }
            ui.separator();

            if !snapshot.selected_text.is_empty() {
                if let Some(i) = selection_banner(ui, snapshot, config) {
                    intent = Some(i);
                }
            }

            let available_height = ui.available_height() - 90.0;
            ScrollArea::vertical()
                .max_height(available_height.max(80.0))
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    message_list(ui, &snapshot.messages, config);
                    if snapshot.is_loading {
                        ui.horizontal(|ui| {
                            ui.add(egui::Spinner::new().color(ACCENT));
                            ui.label(RichText::new("Thinking...").color(TEXT_SECONDARY).italics());
                        });
                    }
                });

            if let Some(error) = &snapshot.error {
                if let Some(i) = error_banner(ui, error, snapshot.can_retry()) {
                    intent = Some(i);
                }
            }

            ui.add_space(4.0);
            if let Some(i) = input_row(ui, snapshot, config, state) {
                intent = Some(i);
            }

            ui.label(RichText::new(&state.status_text).color(TEXT_SECONDARY).small());
        });

    intent
}

fn header(ui: &mut egui::Ui) -> Option<WidgetIntent> {
    let mut intent = None;
    ui.horizontal(|ui| {
        ui.heading(RichText::new("💬 Chat Assistant").color(TEXT_PRIMARY).strong());
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.small_button("✕").on_hover_text("Close chat").clicked() {
                intent = Some(WidgetIntent::Close);
            }
            if ui.small_button("🗑").on_hover_text("Clear chat history").clicked() {
                intent = Some(WidgetIntent::ClearChat);
            }
        });
    });
    intent
}

fn selection_banner(
    ui: &mut egui::Ui,
    snapshot: &ChatSnapshot,
    config: &ChatConfig,
) -> Option<WidgetIntent> {
    let mut intent = None;
    let preview = selection_preview(&snapshot.selected_text, config.selection_preview_chars);

    egui::Frame::default()
        .fill(SELECTION_BG)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(6.0)
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(
                    RichText::new(format!("📝 Using selected text: \"{}\"", preview))
                        .color(SELECTION_FG)
                        .small(),
                );
                if ui.small_button("✕").on_hover_text("Clear selection").clicked() {
                    intent = Some(WidgetIntent::ClearSelection);
                }
            });
        });
    ui.add_space(4.0);
    intent
}

fn error_banner(ui: &mut egui::Ui, error: &str, can_retry: bool) -> Option<WidgetIntent> {
    let mut intent = None;
    egui::Frame::default()
        .fill(ERROR_BG)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(6.0)
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new(format!("⚠ {}", error)).color(ERROR));
                if can_retry && ui.button("Retry").clicked() {
                    intent = Some(WidgetIntent::Retry);
                }
            });
        });
    intent
}

fn input_row(
    ui: &mut egui::Ui,
    snapshot: &ChatSnapshot,
    config: &ChatConfig,
    state: &mut WidgetState,
) -> Option<WidgetIntent> {
    let mut intent = None;
    let enabled = !snapshot.is_loading;

    ui.horizontal(|ui| {
        let input = egui::TextEdit::singleline(&mut state.draft)
            .hint_text("Ask a question...")
            .char_limit(config.max_input_chars)
            .desired_width(ui.available_width() - 70.0);
        let response = ui.add_enabled(enabled, input);

        let send_enabled = enabled && !state.draft.trim().is_empty();
        let send_btn = ui.add_enabled(
            send_enabled,
            egui::Button::new(RichText::new("Send").color(ACCENT_TEXT))
                .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                .corner_radius(PANEL_ROUNDING)
                .min_size(Vec2::new(60.0, 0.0)),
        );

        let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if enter || send_btn.clicked() {
            if let Some(text) = state.pending_draft(snapshot.is_loading) {
                intent = Some(WidgetIntent::Send(text));
                response.request_focus();
            }
        }
    });

    intent
}
