//! Message list: welcome placeholder, bubbles, and citation blocks.

use egui::{self, Align, Layout, RichText};

use chat_core::citation::file_path_to_url;
use chat_types::config::ChatConfig;
use chat_types::message::{Message, Source};

use crate::theme::*;

/// Render the conversation, or the welcome text when it is empty.
pub fn message_list(ui: &mut egui::Ui, messages: &[Message], config: &ChatConfig) {
    if messages.is_empty() {
        welcome(ui);
        return;
    }

    for message in messages {
        render_message(ui, message, config);
        ui.add_space(4.0);
    }
}

fn welcome(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(
            RichText::new("👋 Welcome to the Physical AI & Humanoid Robotics chatbot!")
                .color(TEXT_PRIMARY)
                .strong(),
        );
        ui.label(RichText::new("Ask me anything about the book content.").color(TEXT_SECONDARY));
    });
}

fn render_message(ui: &mut egui::Ui, message: &Message, config: &ChatConfig) {
    let (layout, fill, text_color) = if message.is_user() {
        (Layout::right_to_left(Align::Min), ACCENT, ACCENT_TEXT)
    } else {
        (Layout::left_to_right(Align::Min), BG_SECONDARY, TEXT_PRIMARY)
    };

    ui.with_layout(layout, |ui| {
        let max_width = ui.available_width() * 0.85;
        egui::Frame::default()
            .fill(fill)
            .corner_radius(BUBBLE_ROUNDING)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.vertical(|ui| {
                    ui.label(RichText::new(&message.content).color(text_color));
                    let sources = message.citations();
                    if !sources.is_empty() {
                        ui.separator();
                        citations(ui, sources, config);
                    }
                });
            });
    });
}

/// "Sources" block: one link per source, opening in a new tab.
fn citations(ui: &mut egui::Ui, sources: &[Source], config: &ChatConfig) {
    ui.label(RichText::new("📚 Sources:").color(TEXT_SECONDARY).small().strong());
    for source in sources {
        ui.horizontal_wrapped(|ui| {
            ui.add(
                egui::Hyperlink::from_label_and_url(&source.title, source_url(source, config))
                    .open_in_new_tab(true),
            );
            ui.label(
                RichText::new(format!("({}% relevant)", source.relevance_percent()))
                    .color(TEXT_SECONDARY)
                    .small(),
            );
        });
    }
}

/// Docs page a citation links to.
pub fn source_url(source: &Source, config: &ChatConfig) -> String {
    file_path_to_url(&source.file_path, &config.docs_base_path)
}
