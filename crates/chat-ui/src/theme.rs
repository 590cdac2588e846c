//! UI theme constants

use egui::{Color32, CornerRadius, Stroke, Vec2};

pub const BG_PRIMARY: Color32 = Color32::from_rgb(255, 255, 255);
pub const BG_SECONDARY: Color32 = Color32::from_rgb(245, 246, 247);
pub const BG_SURFACE: Color32 = Color32::from_rgb(235, 237, 240);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(28, 30, 33);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(96, 103, 112);
pub const ACCENT: Color32 = Color32::from_rgb(46, 133, 85);
pub const ACCENT_TEXT: Color32 = Color32::from_rgb(255, 255, 255);
pub const ERROR: Color32 = Color32::from_rgb(250, 56, 62);
pub const ERROR_BG: Color32 = Color32::from_rgb(255, 235, 236);
pub const SELECTION_BG: Color32 = Color32::from_rgb(255, 248, 214);
pub const SELECTION_FG: Color32 = Color32::from_rgb(102, 77, 3);

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(8);
pub const BUBBLE_ROUNDING: CornerRadius = CornerRadius::same(12);
pub const PANEL_PADDING: Vec2 = Vec2::new(12.0, 8.0);

pub const WINDOW_SIZE: Vec2 = Vec2::new(380.0, 520.0);
pub const BUTTON_SIZE: Vec2 = Vec2::new(56.0, 56.0);
/// Distance of the button from the bottom-right corner
pub const EDGE_OFFSET: Vec2 = Vec2::new(-20.0, -20.0);

/// Apply the light theme used by the docs site to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::light();
    style.visuals.panel_fill = Color32::TRANSPARENT;
    style.visuals.window_fill = BG_PRIMARY;
    style.visuals.window_corner_radius = PANEL_ROUNDING;

    style.visuals.widgets.inactive.bg_fill = BG_SURFACE;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, ACCENT_TEXT);
    style.visuals.hyperlink_color = ACCENT;

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.3);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
