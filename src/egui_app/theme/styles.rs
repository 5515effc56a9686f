//! Theme Styling Functions

use eframe::egui::{self, Stroke};
use super::colors;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::light();
    style.visuals.panel_fill = colors::PAGE_BG;
    style.visuals.selection.bg_fill = colors::FILTER_ACTIVE;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_LIGHT);
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);

    ctx.set_style(style);
}

/// Frame around a single todo row
pub fn row_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::ROW_BG)
        .stroke(Stroke::new(1.0, colors::ROW_BORDER))
        .corner_radius(egui::CornerRadius::same(4))
        .inner_margin(egui::Margin::symmetric(10, 6))
}

/// Frame for the header bar
pub fn header_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::HEADER_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Frame for the error banner
pub fn error_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::ERROR_BG)
        .inner_margin(egui::Margin::symmetric(12, 6))
}
