use eframe::egui;

use crate::egui_app::state::TodoStore;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::{TodoAction, UiState};

pub mod add_todo;
pub mod todo_filter;
pub mod todo_list;
pub mod todo_preview;

/// Header with the title and the identity in use
pub fn render_top_bar(ctx: &egui::Context, user_id: &str, pending: usize) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::header_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new("Todos").size(18.0).strong());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.colored_label(colors::TEXT_LIGHT, format!("@{}", user_id));
                    if pending > 0 {
                        ui.add_space(12.0);
                        ui.colored_label(colors::SYNCING, format!("{} saving", pending));
                    }
                });
            });
        });
}

/// Dismissable banner with the last surfaced error
pub fn render_error_banner(ctx: &egui::Context, ui_state: &UiState, actions: &mut Vec<TodoAction>) {
    let Some(error) = ui_state.error.as_deref() else {
        return;
    };

    egui::TopBottomPanel::top("error_banner")
        .frame(styles::error_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(colors::ERROR_TEXT, error);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✕").clicked() {
                        actions.push(TodoAction::DismissError);
                    }
                });
            });
        });
}

/// Add form, filter bar and list
pub fn render_main_panel(
    ctx: &egui::Context,
    store: &TodoStore,
    ui_state: &mut UiState,
    actions: &mut Vec<TodoAction>,
) {
    egui::CentralPanel::default().show(ctx, |ui| {
        add_todo::render(ui, &mut ui_state.new_title, actions);
        ui.add_space(6.0);
        todo_filter::render(ui, store.filter(), actions);
        ui.separator();
        todo_list::render(ui, store, ui_state, actions);
    });
}
